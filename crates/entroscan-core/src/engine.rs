//! 单行检测管线：分词 → 逐候选算熵 → 阈值裁决
use crate::entropy::shannon_entropy;
use crate::findings::Finding;
use crate::options::ScanOptions;
use crate::tokenize::tokenize;

/// 对一行文本跑完整检测，按候选串出现顺序返回全部发现
/// 阈值判定是严格大于：熵恰好等于阈值的候选串不报告
pub fn scan_line(file: &str, line_no: usize, line: &str, opts: &ScanOptions) -> Vec<Finding> {
    let mut findings = Vec::new();
    for token in tokenize(line, opts.min_token_len, &opts.charset) {
        let entropy = shannon_entropy(&token, &opts.charset);
        if entropy > opts.threshold {
            findings.push(Finding {
                file: file.to_string(),
                line: line_no,
                token,
                entropy,
            });
        }
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::scan_line;
    use crate::entropy::shannon_entropy;
    use crate::options::ScanOptions;

    // 40 个互不相同的字符表成员，熵 = log2(40) ≈ 5.32，超出默认阈值
    const SECRET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789+/=#";

    #[test]
    fn high_entropy_token_is_reported() {
        let opts = ScanOptions::default();
        let line = format!("api_key = {SECRET}");
        let findings = scan_line("conf.txt", 3, &line, &opts);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].file, "conf.txt");
        assert_eq!(findings[0].line, 3);
        assert_eq!(findings[0].token, SECRET);
        assert!(findings[0].entropy > 4.8);
    }

    #[test]
    fn low_entropy_prose_is_not_reported() {
        let opts = ScanOptions::default();
        let findings = scan_line("a.txt", 1, "configuration_management_notes", &opts);
        assert!(findings.is_empty());
    }

    #[test]
    fn entropy_equal_to_threshold_is_not_a_finding() {
        let mut opts = ScanOptions::default();
        let h = shannon_entropy(SECRET, &opts.charset);
        opts.threshold = h;
        assert!(scan_line("a.txt", 1, SECRET, &opts).is_empty());
        // 阈值略低于熵时同一个串就要报出来
        opts.threshold = h - 1e-9;
        assert_eq!(scan_line("a.txt", 1, SECRET, &opts).len(), 1);
    }

    #[test]
    fn findings_keep_token_order_within_line() {
        let opts = ScanOptions::default();
        let line = format!("{SECRET} filler {SECRET}=");
        let findings = scan_line("a.txt", 9, &line, &opts);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].token, SECRET);
        assert_eq!(findings[1].token, format!("{SECRET}="));
    }

    #[test]
    fn short_tokens_never_reach_the_threshold_check() {
        let mut opts = ScanOptions::default();
        opts.threshold = 0.5;
        // 长度不足 12 的串在分词阶段就被丢弃
        assert!(scan_line("a.txt", 1, "Ab3+/ Ab3+/ Ab3+/", &opts).is_empty());
    }
}
