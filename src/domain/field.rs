// ==========================================
// 库位报表系统 - 逻辑字段定义
// ==========================================
// 职责: 统一声明所有逻辑字段及其导出列名
// 红线: 排序/过滤/导出只遍历字段列表,不硬编码结构体成员
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Field - 逻辑字段
// ==========================================
// 新增字段: 增加枚举值 + header() + 抽取规则表条目即可,
// 排序与导出代码无需改动
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Storage,
    Shelf,
    Position1,
    Position2,
    Name,
    SerialNumber,
    OriginalLocation,
    Quantity,
    Customer,
    Client,
    PricePerUnit,
    Total,
}

impl Field {
    /// 导出列顺序（Excel / PDF 固定 12 列）
    pub const EXPORT_COLUMNS: [Field; 12] = [
        Field::Storage,
        Field::Shelf,
        Field::Position1,
        Field::Position2,
        Field::Name,
        Field::SerialNumber,
        Field::OriginalLocation,
        Field::Quantity,
        Field::Customer,
        Field::Client,
        Field::PricePerUnit,
        Field::Total,
    ];

    /// 排序键顺序（依次比较）
    pub const SORT_KEYS: [Field; 11] = [
        Field::Storage,
        Field::Shelf,
        Field::Position1,
        Field::Position2,
        Field::SerialNumber,
        Field::Quantity,
        Field::Name,
        Field::Customer,
        Field::Client,
        Field::PricePerUnit,
        Field::Total,
    ];

    /// 导出必填字段（缺任一则导出时剔除）
    pub const EXPORT_REQUIRED: [Field; 9] = [
        Field::Storage,
        Field::Shelf,
        Field::Position1,
        Field::Position2,
        Field::SerialNumber,
        Field::Quantity,
        Field::Name,
        Field::Customer,
        Field::Client,
    ];

    /// 导出列名
    pub fn header(self) -> &'static str {
        match self {
            Field::Storage => "Storage",
            Field::Shelf => "Shelf",
            Field::Position1 => "Position1",
            Field::Position2 => "Position2",
            Field::Name => "Name",
            Field::SerialNumber => "Serial_Number",
            Field::OriginalLocation => "Original_Location",
            Field::Quantity => "Quantity",
            Field::Customer => "Customer",
            Field::Client => "Client",
            Field::PricePerUnit => "Price_Per_Unit",
            Field::Total => "Total_NIS",
        }
    }

    /// 由列名反查字段，兼容旧版预览接口的列名
    pub fn from_header(header: &str) -> Option<Field> {
        let field = match header.trim() {
            "Storage" | "Parsed_Location_Storage" => Field::Storage,
            "Shelf" | "Parsed_Location_Shelf" => Field::Shelf,
            "Position1" | "Parsed_Location_Position1" => Field::Position1,
            "Position2" | "Parsed_Location_Position2" => Field::Position2,
            "Name" => Field::Name,
            "Serial_Number" => Field::SerialNumber,
            "Original_Location" => Field::OriginalLocation,
            "Quantity" | "quantity" => Field::Quantity,
            "Customer" => Field::Customer,
            "Client" => Field::Client,
            "Price_Per_Unit" => Field::PricePerUnit,
            "Total_NIS" | "Total" => Field::Total,
            _ => return None,
        };
        Some(field)
    }

    /// 是否为整数字段
    pub fn is_integer(self) -> bool {
        matches!(self, Field::Position1 | Field::Position2)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}
