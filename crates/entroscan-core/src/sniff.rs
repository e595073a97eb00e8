//! 内容类型嗅探（文件头部魔数 + 文本启发式）
//!
//! 语义对齐 HTTP 内容嗅探：只看文件开头至多 512 字节，
//! 先匹配标签/魔数签名，都未命中时退回"是否含二进制字节"的文本判定。
//! 产出 MIME 风格标签，供允许表/已知二进制表做门禁裁决。
use std::fmt;

/// 嗅探窗口：只读取文件开头这么多字节
pub const SNIFF_LEN: usize = 512;

/// 允许扫描的文本类型（精确标签，全部为 UTF-8 文本）
pub const ALLOWED_TEXT_TYPES: &[&str] = &[
    "text/plain; charset=utf-8",
    "text/xml; charset=utf-8",
    "text/html; charset=utf-8",
];

/// 已知的二进制类型：正常情况，静默跳过不告警
pub const KNOWN_BINARY_TYPES: &[&str] = &[
    "application/octet-stream",
    "application/zip",
    "application/pdf",
    "image/jpeg",
    "image/png",
    "image/webp",
    "font/woff",
    "font/woff2",
    "font/ttf",
    "image/x-icon",
    "application/vnd.ms-fontobject",
    "font/otf",
    "application/x-gzip",
];

/// 嗅探结果：MIME 风格标签（如 `text/plain; charset=utf-8`、`image/png`）
/// 只在单次门禁裁决内使用，不随文件保存
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentClass(&'static str);

impl ContentClass {
    pub fn label(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ContentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// HTML 标签族签名：匹配时字母大小写不敏感，签名之后必须紧跟空格或 '>'
const HTML_SIGS: &[&[u8]] = &[
    b"<!DOCTYPE HTML",
    b"<HTML",
    b"<HEAD",
    b"<SCRIPT",
    b"<IFRAME",
    b"<H1",
    b"<DIV",
    b"<FONT",
    b"<TABLE",
    b"<A",
    b"<STYLE",
    b"<TITLE",
    b"<B",
    b"<BODY",
    b"<BR",
    b"<P",
    b"<!--",
];

/// 掩码魔数（逐字节 data & mask == pattern）：BOM 与 RIFF 族等变长头
const MASKED_SIGS: &[(&[u8], &[u8], &str)] = &[
    (b"\xff\xff\x00\x00", b"\xfe\xff\x00\x00", "text/plain; charset=utf-16be"),
    (b"\xff\xff\x00\x00", b"\xff\xfe\x00\x00", "text/plain; charset=utf-16le"),
    (b"\xff\xff\xff\x00", b"\xef\xbb\xbf\x00", "text/plain; charset=utf-8"),
    (
        b"\xff\xff\xff\xff\x00\x00\x00\x00\xff\xff\xff\xff\xff\xff",
        b"RIFF\x00\x00\x00\x00WEBPVP",
        "image/webp",
    ),
    (
        b"\xff\xff\xff\xff\x00\x00\x00\x00\xff\xff\xff\xff",
        b"FORM\x00\x00\x00\x00AIFF",
        "audio/aiff",
    ),
    (
        b"\xff\xff\xff\xff\x00\x00\x00\x00\xff\xff\xff\xff",
        b"RIFF\x00\x00\x00\x00AVI ",
        "video/avi",
    ),
    (
        b"\xff\xff\xff\xff\x00\x00\x00\x00\xff\xff\xff\xff",
        b"RIFF\x00\x00\x00\x00WAVE",
        "audio/wave",
    ),
    // EOT 字体：前 34 字节任意，第 34/35 字节为 "LP"
    (
        b"\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\
          \x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\xff\xff",
        b"\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\
          \x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00LP",
        "application/vnd.ms-fontobject",
    ),
];

/// 精确前缀魔数 → 标签
const EXACT_SIGS: &[(&[u8], &str)] = &[
    (b"%PDF-", "application/pdf"),
    (b"%!PS-Adobe-", "application/postscript"),
    (b"GIF87a", "image/gif"),
    (b"GIF89a", "image/gif"),
    (b"\x89PNG\r\n\x1a\n", "image/png"),
    (b"\xff\xd8\xff", "image/jpeg"),
    (b"BM", "image/bmp"),
    (b"\x00\x00\x01\x00", "image/x-icon"),
    (b"\x00\x00\x02\x00", "image/x-icon"),
    (b".snd", "audio/basic"),
    (b"\x00\x01\x00\x00", "font/ttf"),
    (b"OTTO", "font/otf"),
    (b"ttcf", "font/collection"),
    (b"wOFF", "font/woff"),
    (b"wOF2", "font/woff2"),
    (b"ID3", "audio/mpeg"),
    (b"OggS\x00", "application/ogg"),
    (b"MThd\x00\x00\x00\x06", "audio/midi"),
    (b"\x1a\x45\xdf\xa3", "video/webm"),
    (b"\x1f\x8b\x08", "application/x-gzip"),
    (b"PK\x03\x04", "application/zip"),
    (b"Rar!\x1a\x07\x00", "application/x-rar-compressed"),
    (b"Rar!\x1a\x07\x01\x00", "application/x-rar-compressed"),
    (b"\x00\x61\x73\x6d", "application/wasm"),
];

/// 对文件头部字节做内容嗅探
/// - 标签类签名（HTML/XML）允许前导空白；魔数从第 0 字节起匹配
/// - 全部未命中时：头部不含二进制字节则判为 UTF-8 纯文本，否则为字节流
/// - 空文件没有二进制字节，判为纯文本（与整体语义一致的边界约定）
pub fn sniff(head: &[u8]) -> ContentClass {
    let data = if head.len() > SNIFF_LEN { &head[..SNIFF_LEN] } else { head };
    let start = data.iter().position(|&b| !is_sniff_ws(b)).unwrap_or(data.len());
    let trimmed = &data[start..];

    // 1) HTML 标签族与 <?xml（跳过前导空白）
    for sig in HTML_SIGS {
        if html_sig_match(trimmed, sig) {
            return ContentClass("text/html; charset=utf-8");
        }
    }
    if trimmed.starts_with(b"<?xml") {
        return ContentClass("text/xml; charset=utf-8");
    }

    // 2) BOM 与魔数
    for (mask, pat, label) in MASKED_SIGS {
        if masked_sig_match(data, mask, pat) {
            return ContentClass(label);
        }
    }
    for (pat, label) in EXACT_SIGS {
        if data.starts_with(pat) {
            return ContentClass(label);
        }
    }

    // 3) mp4：ftyp box
    if mp4_sig_match(data) {
        return ContentClass("video/mp4");
    }

    // 4) 文本启发式
    if trimmed.iter().any(|&b| is_binary_byte(b)) {
        ContentClass("application/octet-stream")
    } else {
        ContentClass("text/plain; charset=utf-8")
    }
}

/// 嗅探意义上的前导空白
fn is_sniff_ws(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | b'\x0c' | b'\r' | b' ')
}

/// 二进制数据字节：控制字符区，排除常见文本控制符（tab/LF/FF/CR/ESC 等）
fn is_binary_byte(b: u8) -> bool {
    matches!(b, 0x00..=0x08 | 0x0b | 0x0e..=0x1a | 0x1c..=0x1f)
}

/// HTML 标签签名匹配：签名中的大写字母按不区分大小写比较，
/// 且签名结束后的下一个字节必须是空格或 '>'
fn html_sig_match(data: &[u8], sig: &[u8]) -> bool {
    if data.len() < sig.len() + 1 {
        return false;
    }
    for (i, &b) in sig.iter().enumerate() {
        let mut db = data[i];
        if b.is_ascii_uppercase() {
            db &= 0xdf;
        }
        if b != db {
            return false;
        }
    }
    matches!(data[sig.len()], b' ' | b'>')
}

/// 掩码魔数匹配：mask 与 pattern 等长，逐字节 data & mask == pattern
fn masked_sig_match(data: &[u8], mask: &[u8], pat: &[u8]) -> bool {
    if mask.len() != pat.len() || data.len() < pat.len() {
        return false;
    }
    data.iter().zip(mask.iter()).zip(pat.iter()).all(|((&d, &m), &p)| d & m == p)
}

/// mp4 签名：首个 box 为 ftyp，且 box 内某个 brand 以 "mp4" 开头
fn mp4_sig_match(data: &[u8]) -> bool {
    if data.len() < 12 {
        return false;
    }
    let box_size = u32::from_be_bytes([data[0], data[1], data[2], data[3]]) as usize;
    if data.len() < box_size || box_size % 4 != 0 {
        return false;
    }
    if &data[4..8] != b"ftyp" {
        return false;
    }
    let mut at = 8;
    while at < box_size {
        // 偏移 12 处是次版本号，不是 brand
        if at != 12 && &data[at..at + 3] == b"mp4" {
            return true;
        }
        at += 4;
    }
    false
}
