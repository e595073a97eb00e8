//! entroscan-core：基于香农熵的高熵字符串扫描库
//!
//! 核心流程是一条两段式管线：
//! 1. 文件门禁——遍历目录树，忽略表剪枝，嗅探头部字节裁决文件去留；
//! 2. 逐行检测——固定字符表分词，对每个候选串计算香农熵，
//!    超过阈值即为发现。
//!
//! 设计取向：
//! - 单线程顺序扫描，遍历按文件名排序，结果可复现；
//! - 发现一经产生立即写入 [`FindingSink`]，不在内存里攒完整列表；
//! - 所有可调参数集中在 [`ScanOptions`]，不读环境变量不藏全局状态。
mod charset;
mod config;
mod engine;
mod entropy;
mod findings;
mod gate;
mod options;
mod scan;
mod sniff;
mod tokenize;

pub use charset::CHARSET;
pub use config::{load_config, FileConfig};
pub use engine::scan_line;
pub use entropy::shannon_entropy;
pub use findings::{Finding, FindingSink};
pub use gate::{open_and_classify, GateError, LineReader, MAX_LINE_LEN};
pub use options::{
    ScanOptions, ScanStats, DEFAULT_IGNORE, DEFAULT_MIN_TOKEN_LEN, DEFAULT_THRESHOLD,
};
pub use scan::scan_tree;
pub use sniff::{sniff, ContentClass, ALLOWED_TEXT_TYPES, KNOWN_BINARY_TYPES, SNIFF_LEN};
pub use tokenize::tokenize;
