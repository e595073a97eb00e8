//! 命中项与上报接口
use std::io;

use serde::Serialize;

/// 单条命中：文件、行号（1 起）、命中 Token 与其熵值
/// 命中即产即报，不持久化也不去重
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub file: String,
    pub line: usize,
    pub token: String,
    pub entropy: f64,
}

/// 命中上报接口，由调用方实现（CLI 的彩色文本 / JSON 输出、测试的收集器等）
/// `line` 为命中所在的原始行，便于展示与高亮；超长截断由实现方处理
/// 写出失败要向上返回，扫描会随之终止，发现不允许无声丢失
pub trait FindingSink {
    fn report(&mut self, finding: &Finding, line: &str) -> io::Result<()>;
}
