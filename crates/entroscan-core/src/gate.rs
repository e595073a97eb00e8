//! 文件门禁：单句柄打开 → 嗅探头部 → 回绕 → 逐行读取
//!
//! 整个生命周期只打开一次文件：先读至多 [`SNIFF_LEN`] 字节做内容嗅探，
//! 判定放行后把同一个句柄回绕到起点再逐行读。行内容按 UTF-8 宽松解码,
//! 非法字节替换为 U+FFFD，保证任意放行文件都能读到行尾。
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use thiserror::Error;

use crate::sniff::{sniff, ContentClass, SNIFF_LEN};

/// 门禁阶段的错误：区分"打开/嗅探失败"与"读行失败"，
/// 供上层决定是跳过整个文件还是中断当前文件
#[derive(Debug, Error)]
pub enum GateError {
    #[error("failed to open file: {0}")]
    Open(#[source] io::Error),
    #[error("failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// 单行长度上限（字节）；超出按读取错误处理，当前文件扫描终止
pub const MAX_LINE_LEN: usize = 64 * 1024;

/// 打开文件并嗅探内容类型，返回（已消费头部的句柄, 嗅探标签）
/// 句柄交由 [`LineReader::new`] 回绕复用，调用方不应再次打开该路径
pub fn open_and_classify(path: &Path) -> Result<(File, ContentClass), GateError> {
    let mut file = File::open(path).map_err(GateError::Open)?;
    let mut head = [0u8; SNIFF_LEN];
    let n = read_head(&mut file, &mut head).map_err(GateError::Open)?;
    Ok((file, sniff(&head[..n])))
}

/// 反复读取直到填满缓冲或遇到 EOF，返回实际读到的字节数
fn read_head(file: &mut File, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = file.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}

/// 逐行读取器：行号从 1 开始，行尾的 `\n` 与 `\r\n` 都被剥除
/// 单行最长 [`MAX_LINE_LEN`] 字节，无换行的超长文件不会被整个吞进内存
pub struct LineReader {
    reader: BufReader<File>,
    line_no: usize,
    buf: Vec<u8>,
}

impl LineReader {
    /// 接管嗅探后的句柄，回绕到文件起点
    pub fn new(mut file: File) -> Result<Self, GateError> {
        file.seek(SeekFrom::Start(0)).map_err(GateError::Open)?;
        Ok(Self { reader: BufReader::new(file), line_no: 0, buf: Vec::new() })
    }

    /// 读下一行，返回（行号, 行内容）；文件结束返回 `None`
    pub fn next_line(&mut self) -> Result<Option<(usize, String)>, GateError> {
        self.buf.clear();
        // 限额读取：多取一个字节用于区分"恰好到上限"与"超限"
        let mut limited = (&mut self.reader).take(MAX_LINE_LEN as u64 + 1);
        let n = limited
            .read_until(b'\n', &mut self.buf)
            .map_err(|e| GateError::Read { line: self.line_no + 1, source: e })?;
        if n == 0 {
            return Ok(None);
        }
        if n > MAX_LINE_LEN && self.buf.last() != Some(&b'\n') {
            let e = io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line longer than {MAX_LINE_LEN} bytes"),
            );
            return Err(GateError::Read { line: self.line_no + 1, source: e });
        }
        self.line_no += 1;
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        let line = String::from_utf8_lossy(&self.buf).into_owned();
        Ok(Some((self.line_no, line)))
    }
}

/// 标签是否在表中（精确匹配）
pub(crate) fn in_table(table: &[String], label: &str) -> bool {
    table.iter().any(|t| t == label)
}
