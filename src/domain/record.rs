// ==========================================
// 库位报表系统 - 记录领域模型
// ==========================================
// 生命周期: RawRow → ExtractedRecord → NormalizedRecord
// 红线: 每一阶段产出新值,不回写上一阶段
// ==========================================

use crate::domain::field::Field;
use crate::domain::location::LocationCode;
use serde::de::Error as DeError;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

// ==========================================
// RawRow - 原始数据行
// ==========================================
// 用途: 文件解析层产出,按列下标定位（无表头名查找）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub row_number: usize, // 表格中的行号（表头为第 1 行）
    cells: Vec<String>,
}

impl RawRow {
    pub fn new(row_number: usize, cells: Vec<String>) -> Self {
        Self { row_number, cells }
    }

    /// 按列下标取值；越界或空白单元格返回 None
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells
            .get(index)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// 整行是否全部为空
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|v| v.trim().is_empty())
    }
}

// ==========================================
// ExtractedRecord - 字段抽取结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedRecord {
    pub row_number: usize,
    pub location: Option<LocationCode>,
    values: BTreeMap<Field, String>,
}

impl ExtractedRecord {
    pub fn new(row_number: usize) -> Self {
        Self {
            row_number,
            location: None,
            values: BTreeMap::new(),
        }
    }

    pub fn with_location(mut self, location: Option<LocationCode>) -> Self {
        self.location = location;
        self
    }

    /// 写入文本字段；None 表示字段缺失
    pub fn with_value(mut self, field: Field, value: Option<String>) -> Self {
        match value {
            Some(v) => {
                self.values.insert(field, v);
            }
            None => {
                self.values.remove(&field);
            }
        }
        self
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn original_location(&self) -> Option<&str> {
        self.get(Field::OriginalLocation)
    }

    pub fn name(&self) -> Option<&str> {
        self.get(Field::Name)
    }

    pub fn serial_number(&self) -> Option<&str> {
        self.get(Field::SerialNumber)
    }

    pub fn quantity(&self) -> Option<&str> {
        self.get(Field::Quantity)
    }

    pub(crate) fn text_values(&self) -> impl Iterator<Item = (Field, &String)> {
        self.values.iter().map(|(k, v)| (*k, v))
    }
}

// ==========================================
// FieldValue - 标准化后的字段值
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
}

impl FieldValue {
    /// 排序与展示使用的文本形式
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(s) => Cow::Borrowed(s.as_str()),
            FieldValue::Integer(n) => Cow::Owned(n.to_string()),
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(n) => Some(*n),
            FieldValue::Text(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Integer(n) => write!(f, "{}", n),
        }
    }
}

// ==========================================
// NormalizedRecord - 展平后的报表记录
// ==========================================
// 序列化: 以导出列名为键的扁平 JSON 对象,缺失字段为 null
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub row_number: usize,
    values: BTreeMap<Field, FieldValue>,
}

impl NormalizedRecord {
    pub fn new(row_number: usize) -> Self {
        Self {
            row_number,
            values: BTreeMap::new(),
        }
    }

    pub fn with_value(mut self, field: Field, value: Option<FieldValue>) -> Self {
        match value {
            Some(v) => {
                self.values.insert(field, v);
            }
            None => {
                self.values.remove(&field);
            }
        }
        self
    }

    pub fn with_text(self, field: Field, value: Option<&str>) -> Self {
        self.with_value(field, value.map(|v| FieldValue::Text(v.to_string())))
    }

    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    pub fn text(&self, field: Field) -> Option<Cow<'_, str>> {
        self.get(field).map(FieldValue::as_text)
    }

    pub fn storage(&self) -> Option<Cow<'_, str>> {
        self.text(Field::Storage)
    }

    pub fn shelf(&self) -> Option<Cow<'_, str>> {
        self.text(Field::Shelf)
    }

    pub fn position1(&self) -> Option<i64> {
        self.get(Field::Position1).and_then(FieldValue::as_integer)
    }

    pub fn position2(&self) -> Option<i64> {
        self.get(Field::Position2).and_then(FieldValue::as_integer)
    }

    /// 列出给定字段中缺失的部分
    pub fn missing_fields(&self, required: &[Field]) -> Vec<Field> {
        required
            .iter()
            .copied()
            .filter(|f| !self.values.contains_key(f))
            .collect()
    }

    /// 是否满足导出完整性要求
    pub fn is_export_complete(&self) -> bool {
        self.missing_fields(&Field::EXPORT_REQUIRED).is_empty()
    }
}

impl Serialize for NormalizedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Field::EXPORT_COLUMNS.len()))?;
        for field in Field::EXPORT_COLUMNS {
            match self.get(field) {
                Some(FieldValue::Text(s)) => map.serialize_entry(field.header(), s)?,
                Some(FieldValue::Integer(n)) => map.serialize_entry(field.header(), n)?,
                None => map.serialize_entry(field.header(), &Option::<String>::None)?,
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for NormalizedRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;

        let mut record = NormalizedRecord::new(0);
        for (key, value) in raw {
            // 未知列直接忽略（前端可能附带额外列）
            let Some(field) = Field::from_header(&key) else {
                continue;
            };
            let parsed = lenient_value(field, &value)
                .map_err(|msg| D::Error::custom(format!("字段 {} 格式错误: {}", key, msg)))?;
            record = record.with_value(field, parsed);
        }
        Ok(record)
    }
}

/// 宽松解析 JSON 值：
/// - 位置字段接受整数、整数值浮点（2.0）、数字字符串
/// - 文本字段接受字符串、数字、布尔
fn lenient_value(field: Field, value: &serde_json::Value) -> Result<Option<FieldValue>, String> {
    use serde_json::Value;

    let text = match value {
        Value::Null => return Ok(None),
        Value::String(s) => s.clone(),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(f)) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                (f as i64).to_string()
            }
            _ => n.to_string(),
        },
        Value::Bool(b) => b.to_string(),
        Value::Array(_) | Value::Object(_) => return Err("不支持嵌套结构".to_string()),
    };

    if field.is_integer() {
        if let Some(n) = parse_integral(&text) {
            return Ok(Some(FieldValue::Integer(n)));
        }
    }
    Ok(Some(FieldValue::Text(text)))
}

fn parse_integral(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Some(n);
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 => Some(f as i64),
        _ => None,
    }
}
