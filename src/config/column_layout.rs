// ==========================================
// 库位报表系统 - 列布局配置
// ==========================================
// 约定: 上传表格按固定列下标取值（不按表头名称查找）
// 默认: 描述 G 列(6) / 数量 D 列(3) / 序列号 J 列(9)
//       客户 M 列(12) / 委托方 O 列(14) / 单价 K 列(10) / 总价 L 列(11)
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ==========================================
// SourceColumn - 源数据列
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceColumn {
    Description,
    Quantity,
    SerialNumber,
    Customer,
    Client,
    PricePerUnit,
    Total,
}

impl SourceColumn {
    pub fn label(self) -> &'static str {
        match self {
            SourceColumn::Description => "描述",
            SourceColumn::Quantity => "数量",
            SourceColumn::SerialNumber => "序列号",
            SourceColumn::Customer => "客户",
            SourceColumn::Client => "委托方",
            SourceColumn::PricePerUnit => "单价",
            SourceColumn::Total => "总价",
        }
    }
}

impl fmt::Display for SourceColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ==========================================
// ColumnLayout - 逻辑列 → 物理列下标
// ==========================================
// 旧版表格没有单价/总价列: 从布局中移除即可,对应字段恒为缺失
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnLayout {
    columns: BTreeMap<SourceColumn, usize>,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        let columns = BTreeMap::from([
            (SourceColumn::Description, 6),
            (SourceColumn::Quantity, 3),
            (SourceColumn::SerialNumber, 9),
            (SourceColumn::Customer, 12),
            (SourceColumn::Client, 14),
            (SourceColumn::PricePerUnit, 10),
            (SourceColumn::Total, 11),
        ]);
        Self { columns }
    }
}

impl ColumnLayout {
    /// 空布局（用于按需组装）
    pub fn empty() -> Self {
        Self {
            columns: BTreeMap::new(),
        }
    }

    /// 不含单价/总价的旧版布局
    pub fn without_prices() -> Self {
        Self::default()
            .without(SourceColumn::PricePerUnit)
            .without(SourceColumn::Total)
    }

    pub fn with(mut self, column: SourceColumn, index: usize) -> Self {
        self.columns.insert(column, index);
        self
    }

    pub fn without(mut self, column: SourceColumn) -> Self {
        self.columns.remove(&column);
        self
    }

    pub fn index_of(&self, column: SourceColumn) -> Option<usize> {
        self.columns.get(&column).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SourceColumn, usize)> + '_ {
        self.columns.iter().map(|(k, v)| (*k, *v))
    }

    /// 表格列数不足时缺失的逻辑列（按列下标升序）
    pub fn missing_columns(&self, sheet_width: usize) -> Vec<(SourceColumn, usize)> {
        let mut missing: Vec<(SourceColumn, usize)> = self
            .iter()
            .filter(|(_, index)| *index >= sheet_width)
            .collect();
        missing.sort_by_key(|(_, index)| *index);
        missing
    }
}

/// 列下标转 Excel 列字母（0 → A, 26 → AA）
pub fn column_letter(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}
