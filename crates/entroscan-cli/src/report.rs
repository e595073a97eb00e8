//! 发现的呈现：文本高亮与 JSON 行两种 sink，都写 stdout
//!
//! 日志走 stderr，发现走 stdout，二者互不混流，方便管道二次处理。
use std::io::{self, Stdout, Write};

use colored::Colorize;
use entroscan_core::{Finding, FindingSink};

/// 展示行的最大字符数，超出部分截断并追加标记
const MAX_LINE_DISPLAY: usize = 1000;
const TRUNCATION_MARK: &str = "... <truncated>";

/// 文本模式：`文件:行号 (Score: 熵)` 头 + 候选串高亮的原始行
pub struct TextSink {
    out: Stdout,
}

impl TextSink {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl FindingSink for TextSink {
    fn report(&mut self, finding: &Finding, line: &str) -> io::Result<()> {
        let score = format!("{:.6}", finding.entropy);
        writeln!(
            self.out,
            "{}:{} (Score: {})",
            finding.file,
            finding.line,
            score.bright_green()
        )?;

        // 先按字符截断原始行，再做高亮，避免把着色序列切成两半
        let (shown, truncated) = truncate_chars(line, MAX_LINE_DISPLAY);
        let painted = finding.token.bright_yellow().on_black().bold().to_string();
        let mut output = shown.replacen(finding.token.as_str(), &painted, 1);
        if truncated {
            output.push_str(TRUNCATION_MARK);
        }
        writeln!(self.out, "{output}")?;
        writeln!(self.out)
    }
}

/// JSON 模式：每个发现一行 JSON 对象
pub struct JsonSink {
    out: Stdout,
}

impl JsonSink {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl FindingSink for JsonSink {
    fn report(&mut self, finding: &Finding, _line: &str) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, finding)?;
        writeln!(self.out)
    }
}

/// 最多保留 max 个字符，返回（保留部分, 是否发生截断）
fn truncate_chars(line: &str, max: usize) -> (&str, bool) {
    match line.char_indices().nth(max) {
        Some((idx, _)) => (&line[..idx], true),
        None => (line, false),
    }
}

#[cfg(test)]
mod tests {
    use super::{truncate_chars, MAX_LINE_DISPLAY};

    #[test]
    fn short_lines_pass_through_untouched() {
        let (shown, truncated) = truncate_chars("short line", MAX_LINE_DISPLAY);
        assert_eq!(shown, "short line");
        assert!(!truncated);
    }

    #[test]
    fn exactly_max_chars_is_not_truncated() {
        let line = "x".repeat(MAX_LINE_DISPLAY);
        let (shown, truncated) = truncate_chars(&line, MAX_LINE_DISPLAY);
        assert_eq!(shown.chars().count(), MAX_LINE_DISPLAY);
        assert!(!truncated);
    }

    #[test]
    fn overlong_lines_are_cut_at_max_chars() {
        let line = "y".repeat(MAX_LINE_DISPLAY + 50);
        let (shown, truncated) = truncate_chars(&line, MAX_LINE_DISPLAY);
        assert_eq!(shown.chars().count(), MAX_LINE_DISPLAY);
        assert!(truncated);
    }

    #[test]
    fn truncation_respects_multibyte_boundaries() {
        // 按字符数截断，多字节字符不会被切半
        let line = "§".repeat(MAX_LINE_DISPLAY + 10);
        let (shown, truncated) = truncate_chars(&line, MAX_LINE_DISPLAY);
        assert_eq!(shown.chars().count(), MAX_LINE_DISPLAY);
        assert!(truncated);
        assert!(shown.is_char_boundary(shown.len()));
    }
}
