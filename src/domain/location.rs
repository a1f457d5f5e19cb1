// ==========================================
// 库位报表系统 - 库位编码领域模型
// ==========================================
// 编码格式: <库区字符><货架字符>-<位置1>/<位置2>
// 示例: "1A-1/5" → 库区 1, 货架 A, 位置 1/5
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// LocationCode - 库位编码
// ==========================================
// 红线: 要么完整解析,要么不存在,不允许部分填充
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationCode {
    pub raw: String,     // 原始编码文本
    pub storage: char,   // 库区（第 1 个字符）
    pub shelf: char,     // 货架（第 2 个字符）
    pub position1: i64,  // 位置 1
    pub position2: i64,  // 位置 2
}

impl fmt::Display for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}-{}/{}",
            self.storage, self.shelf, self.position1, self.position2
        )
    }
}
