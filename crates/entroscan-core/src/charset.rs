//! 熵字母表（固定字符集）

/// 固定字符集：大小写字母、数字与常见口令符号（含非 ASCII 的 `§`）。
/// Token 识别与 Shannon 熵计算都只在这 88 个字符上进行，
/// 字母表外的字符一律视为分隔符，不会进入任何 Token。
pub const CHARSET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/=#!§$%&()[]|{}*-_.:,;'\"?";

#[cfg(test)]
mod tests {
    use super::CHARSET;
    use std::collections::HashSet;

    #[test]
    fn charset_has_88_distinct_chars() {
        let chars: Vec<char> = CHARSET.chars().collect();
        let unique: HashSet<char> = chars.iter().copied().collect();
        assert_eq!(chars.len(), 88);
        assert_eq!(unique.len(), 88);
    }

    #[test]
    fn charset_contains_section_sign() {
        assert!(CHARSET.contains('§'));
    }

    #[test]
    fn charset_excludes_whitespace_and_angle_brackets() {
        assert!(!CHARSET.contains(' '));
        assert!(!CHARSET.contains('\t'));
        assert!(!CHARSET.contains('<'));
        assert!(!CHARSET.contains('>'));
    }
}
