// ==========================================
// 库位报表系统 - 库位编码解析器
// ==========================================
// 语法: <库区字符><货架字符>-<位置1>/<位置2>
// 容错: 格式不符一律返回 None,不返回错误,不 panic
// ==========================================

use crate::domain::LocationCode;

/// 解析库位编码
///
/// # 规则
/// - 空输入返回 None
/// - 仅去掉开头一个 '(' 与结尾一个 ')'（非配对扫描）
/// - 按 '-' 必须恰好分为两段,第二段按 '/' 必须恰好分为两段
/// - 第一段至少 2 个字符: 第 1 个为库区,第 2 个为货架,其余字符忽略
/// - 两个位置必须为十进制整数
///
/// # 示例
/// ```
/// use inventory_report::importer::parse_location;
/// let code = parse_location(Some("(2B-10/3)")).unwrap();
/// assert_eq!((code.storage, code.shelf, code.position1, code.position2), ('2', 'B', 10, 3));
/// ```
pub fn parse_location(text: Option<&str>) -> Option<LocationCode> {
    let raw = text?;
    if raw.is_empty() {
        return None;
    }

    let stripped = raw.strip_prefix('(').unwrap_or(raw);
    let stripped = stripped.strip_suffix(')').unwrap_or(stripped);

    let main_parts: Vec<&str> = stripped.split('-').collect();
    let [storage_shelf, positions] = main_parts.as_slice() else {
        return None;
    };

    // 第 3 个及以后的字符不参与解析（历史数据依赖此行为）
    let mut chars = storage_shelf.chars();
    let storage = chars.next()?;
    let shelf = chars.next()?;

    let position_parts: Vec<&str> = positions.split('/').collect();
    let [pos1, pos2] = position_parts.as_slice() else {
        return None;
    };

    let position1 = pos1.trim().parse::<i64>().ok()?;
    let position2 = pos2.trim().parse::<i64>().ok()?;

    Some(LocationCode {
        raw: raw.to_string(),
        storage,
        shelf,
        position1,
        position2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_code() {
        let code = parse_location(Some("1A-1/5")).unwrap();
        assert_eq!(code.raw, "1A-1/5");
        assert_eq!(code.storage, '1');
        assert_eq!(code.shelf, 'A');
        assert_eq!(code.position1, 1);
        assert_eq!(code.position2, 5);
    }

    #[test]
    fn test_parse_parenthesized_code() {
        let code = parse_location(Some("(2B-10/3)")).unwrap();
        assert_eq!(code.raw, "(2B-10/3)");
        assert_eq!((code.storage, code.shelf), ('2', 'B'));
        assert_eq!((code.position1, code.position2), (10, 3));
    }

    #[test]
    fn test_only_one_paren_each_side_is_stripped() {
        assert!(parse_location(Some("((2B-10/3))")).is_none());
        assert!(parse_location(Some("(2B-10/3")).is_some());
    }

    #[test]
    fn test_extra_storage_characters_are_ignored() {
        let code = parse_location(Some("1AX-4/2")).unwrap();
        assert_eq!((code.storage, code.shelf), ('1', 'A'));
    }

    #[test]
    fn test_malformed_codes_are_absent() {
        let malformed = [
            "",
            "1A",
            "1A-15",
            "1A-1/5/2",
            "1A-1-1/5",
            "1-1/5",
            "1A-x/5",
            "1A-1/5.5",
            "1A-/5",
            "-1/5",
        ];
        for text in malformed {
            assert_eq!(parse_location(Some(text)), None, "input: {:?}", text);
        }
        assert_eq!(parse_location(None), None);
    }

    #[test]
    fn test_non_ascii_storage_characters() {
        let code = parse_location(Some("Ωβ-2/3")).unwrap();
        assert_eq!((code.storage, code.shelf), ('Ω', 'β'));
    }
}
