// ==========================================
// 库位报表系统 - 排序比较器
// ==========================================
// 规则（每个排序键相同）:
// 1. 可解析为数字的值按数值比较
// 2. 数字排在文本之前
// 3. 文本按字典序比较
// 4. 缺失值排在所有存在值之后
// ==========================================

use crate::domain::{Field, NormalizedRecord};
use std::cmp::Ordering;

/// 混合数值/文本比较
///
/// 纯字典序会把 "10" 排在 "2" 之前,位置与数量字段需要按数值比较
pub fn compare_mixed(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => match (as_number(x), as_number(y)) {
            (Some(m), Some(n)) => m.partial_cmp(&n).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => x.cmp(y),
        },
    }
}

/// 有限数值才参与数值比较（"NaN" / "inf" 按文本处理）
fn as_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// 按排序键依次比较两条记录
pub fn compare_records(a: &NormalizedRecord, b: &NormalizedRecord, keys: &[Field]) -> Ordering {
    for key in keys {
        let left = a.text(*key);
        let right = b.text(*key);
        let ordering = compare_mixed(left.as_deref(), right.as_deref());
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// 稳定排序: 全部键相同的记录保持原有相对顺序
pub fn sort_records(records: &mut [NormalizedRecord]) {
    records.sort_by(|a, b| compare_records(a, b, &Field::SORT_KEYS));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldValue;

    #[test]
    fn test_absent_sorts_last() {
        assert_eq!(compare_mixed(None, Some("1")), Ordering::Greater);
        assert_eq!(compare_mixed(Some("zzz"), None), Ordering::Less);
        assert_eq!(compare_mixed(None, None), Ordering::Equal);
    }

    #[test]
    fn test_numeric_before_text() {
        let mut values = vec!["A", "10", "2"];
        values.sort_by(|a, b| compare_mixed(Some(*a), Some(*b)));
        assert_eq!(values, vec!["2", "10", "A"]);
    }

    #[test]
    fn test_numeric_comparison() {
        assert_eq!(compare_mixed(Some("2"), Some("10")), Ordering::Less);
        assert_eq!(compare_mixed(Some("1.5"), Some("1.25")), Ordering::Greater);
        assert_eq!(compare_mixed(Some("05"), Some("5")), Ordering::Equal);
    }

    #[test]
    fn test_text_comparison() {
        assert_eq!(compare_mixed(Some("A"), Some("B")), Ordering::Less);
        assert_eq!(compare_mixed(Some("NaN"), Some("1")), Ordering::Greater);
    }

    #[test]
    fn test_sort_records_is_stable() {
        let make = |row: usize, serial: &str| {
            NormalizedRecord::new(row)
                .with_text(Field::Storage, Some("1"))
                .with_value(Field::Position1, Some(FieldValue::Integer(1)))
                .with_text(Field::SerialNumber, Some(serial))
        };
        let mut records = vec![make(2, "B"), make(3, "A"), make(4, "B"), make(5, "A")];

        sort_records(&mut records);

        let rows: Vec<usize> = records.iter().map(|r| r.row_number).collect();
        assert_eq!(rows, vec![3, 5, 2, 4]);
    }

    #[test]
    fn test_sort_records_by_position_numeric() {
        let make = |row: usize, pos: i64| {
            NormalizedRecord::new(row)
                .with_text(Field::Storage, Some("1"))
                .with_text(Field::Shelf, Some("A"))
                .with_value(Field::Position1, Some(FieldValue::Integer(pos)))
        };
        let mut records = vec![make(2, 10), make(3, 2), make(4, 1)];

        sort_records(&mut records);

        let positions: Vec<Option<i64>> = records.iter().map(|r| r.position1()).collect();
        assert_eq!(positions, vec![Some(1), Some(2), Some(10)]);
    }
}
