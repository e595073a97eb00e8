//! 扫描参数与统计
use crate::charset::CHARSET;
use crate::sniff::{ALLOWED_TEXT_TYPES, KNOWN_BINARY_TYPES};

/// 默认熵阈值（严格大于才算发现）
pub const DEFAULT_THRESHOLD: f64 = 4.8;

/// 默认候选串最小长度（按字符计）
pub const DEFAULT_MIN_TOKEN_LEN: usize = 12;

/// 默认忽略子串表：任一子串出现在完整路径中即跳过
/// 覆盖锁文件、依赖目录、版本库内部、构建产物等高误报来源
pub const DEFAULT_IGNORE: &[&str] = &[
    ".lock",
    "package-lock.json",
    "/Migrations/",
    ".git/",
    "node_modules/",
    ".blackbox/",
    ".gpg",
    "go.sum",
    ".svg",
    ".css",
    ".deps.json",
    "project.assets.json",
    "project.nuget.cache",
    "/obj/",
    "/bin",
    "pnpm-lock.yaml",
    ".sln.DotSettings",
    "project.pbxproj",
    "yarn-error.log",
    ".sln",
    ".csproj",
];

/// 一次扫描的全部参数；`Default` 即开箱可用的配置
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// 熵阈值，候选串的熵严格大于它才报告
    pub threshold: f64,
    /// 候选串最小字符数，短于它的连续段直接丢弃
    pub min_token_len: usize,
    /// 字符表：既是分词的成员判定，也是熵计算的遍历域
    pub charset: String,
    /// 路径忽略子串表
    pub ignore: Vec<String>,
    /// 放行扫描的内容类型标签
    pub allow_types: Vec<String>,
    /// 已知二进制类型标签，跳过时不告警
    pub known_binary_types: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            charset: CHARSET.to_string(),
            ignore: DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect(),
            allow_types: ALLOWED_TEXT_TYPES.iter().map(|s| s.to_string()).collect(),
            known_binary_types: KNOWN_BINARY_TYPES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// 一次扫描结束后的计数汇总
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStats {
    /// 通过门禁并逐行扫描过的文件数
    pub files_scanned: usize,
    /// 被门禁拦下的文件数（已知二进制 + 未知类型）
    pub files_skipped: usize,
    /// 报告出的发现总数
    pub findings_reported: usize,
    /// 打开或读取阶段出错的文件数
    pub file_errors: usize,
}
