// ==========================================
// 库位报表系统 - 数据清洗器实现
// ==========================================
// 职责: 占位符清除 / 数字提取 / 末尾括号组处理
// 红线: 全函数,不返回错误,不 panic
// ==========================================

use crate::importer::record_importer_trait::DataCleaner as DataCleanerTrait;
use once_cell::sync::Lazy;
use regex::Regex;

/// 占位符 "None"（连同两侧空白一起去除）
static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*None\s*").unwrap());

/// 品名中的库位部分: 从第一个 '(' 起直到结尾的 ')'（贪婪,含嵌套与多组括号）
static TRAILING_GROUP_STRIP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\(.*\)\s*$").unwrap());

pub struct DataCleaner;

impl DataCleanerTrait for DataCleaner {
    fn strip_placeholder(&self, value: &str) -> String {
        PLACEHOLDER_REGEX.replace_all(value, "").into_owned()
    }

    fn digits_only(&self, value: &str) -> String {
        value.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    fn trailing_group(&self, value: &str) -> Option<String> {
        // 从结尾的 ')' 向前找与之配对的 '(',允许嵌套
        let text = value.trim_end();
        let inner_end = text.strip_suffix(')')?.len();
        let mut depth = 0usize;
        for (idx, c) in text.char_indices().rev() {
            match c {
                ')' => depth += 1,
                '(' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(text[idx + 1..inner_end].trim().to_string());
                    }
                }
                _ => {}
            }
        }
        None
    }

    fn strip_trailing_group(&self, value: &str) -> String {
        TRAILING_GROUP_STRIP_REGEX.replace(value, "").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_placeholder() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.strip_placeholder("SN123 None"), "SN123");
        assert_eq!(cleaner.strip_placeholder("None"), "");
        // 两侧空白一并去除
        assert_eq!(cleaner.strip_placeholder("A None B"), "AB");
        assert_eq!(cleaner.strip_placeholder("Acme"), "Acme");
    }

    #[test]
    fn test_digits_only() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.digits_only("qty: 5 units"), "5");
        assert_eq!(cleaner.digits_only("007"), "007");
        assert_eq!(cleaner.digits_only("1,250"), "1250");
        assert_eq!(cleaner.digits_only("n/a"), "");
    }

    #[test]
    fn test_trailing_group() {
        let cleaner = DataCleaner;
        assert_eq!(
            cleaner.trailing_group("Widget Foo (3C-2/7)"),
            Some("3C-2/7".to_string())
        );
        assert_eq!(
            cleaner.trailing_group("Widget ( 1A-1/5 ) "),
            Some("1A-1/5".to_string())
        );
        // 仅取最后一组
        assert_eq!(
            cleaner.trailing_group("Cable (red) (2B-10/3)"),
            Some("2B-10/3".to_string())
        );
        assert_eq!(cleaner.trailing_group("Widget (1A-1/5) spare"), None);
        assert_eq!(cleaner.trailing_group("Widget"), None);
        // 嵌套括号按配对取整组
        assert_eq!(
            cleaner.trailing_group("Widget (a(1A-1/5))"),
            Some("a(1A-1/5)".to_string())
        );
        assert_eq!(cleaner.trailing_group("Widget ((2B-10/3))"), Some("(2B-10/3)".to_string()));
        // 右括号多于左括号时无法配对
        assert_eq!(cleaner.trailing_group("Widget a) b)"), None);
    }

    #[test]
    fn test_strip_trailing_group() {
        let cleaner = DataCleaner;
        assert_eq!(
            cleaner.strip_trailing_group("Widget Foo (3C-2/7)"),
            "Widget Foo"
        );
        assert_eq!(
            cleaner.strip_trailing_group("Cable (red) (2B-10/3)"),
            "Cable"
        );
        assert_eq!(
            cleaner.strip_trailing_group("Widget (a(1A-1/5))"),
            "Widget"
        );
        assert_eq!(cleaner.strip_trailing_group("Widget"), "Widget");
    }
}
