//! 目录扫描调度：深度优先遍历 → 忽略表剪枝 → 文件门禁 → 逐行检测
//!
//! 遍历按文件名排序，同一棵目录树两次扫描产出完全相同的发现序列。
//! 单个文件的打开/读取失败只记警告并跳过，不会中断整棵树的扫描。
use std::io;
use std::path::Path;

use anyhow::Result;
use tracing::{debug, error, warn};
use walkdir::WalkDir;

use crate::engine::scan_line;
use crate::findings::FindingSink;
use crate::gate::{in_table, open_and_classify, LineReader};
use crate::options::{ScanOptions, ScanStats};

/// 扫描一棵目录树，发现即时写入 sink，返回计数汇总
pub fn scan_tree(root: &Path, sink: &mut dyn FindingSink, opts: &ScanOptions) -> Result<ScanStats> {
    let mut stats = ScanStats::default();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        // 忽略表命中即剪枝：目录被忽略时其整棵子树都不再展开
        .filter_entry(|e| !is_ignored(&e.path().to_string_lossy(), &opts.ignore));
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("walk error: {e}");
                stats.file_errors += 1;
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        // 文件级失败就地消化进 stats；sink 写失败则终止整次扫描
        scan_file(entry.path(), sink, opts, &mut stats)?;
    }
    Ok(stats)
}

/// 完整路径中含任一忽略子串即判为忽略
fn is_ignored(path: &str, ignore: &[String]) -> bool {
    ignore.iter().any(|pat| path.contains(pat.as_str()))
}

/// 单文件流程：门禁裁决后逐行检测
/// 文件自身的打开/读取失败只计入 stats；返回错误仅来自 sink 写出失败
fn scan_file(
    path: &Path,
    sink: &mut dyn FindingSink,
    opts: &ScanOptions,
    stats: &mut ScanStats,
) -> io::Result<()> {
    let path_str = path.to_string_lossy();
    let (file, class) = match open_and_classify(path) {
        Ok(pair) => pair,
        Err(e) => {
            warn!("skipping {path_str}: {e}");
            stats.file_errors += 1;
            return Ok(());
        }
    };
    if !in_table(&opts.allow_types, class.label()) {
        // 已知二进制静默跳过；未知类型要留下线索
        if !in_table(&opts.known_binary_types, class.label()) {
            warn!("{} ({})", path_str, class.label());
        }
        stats.files_skipped += 1;
        return Ok(());
    }
    debug!("scanning {path_str}");
    let mut reader = match LineReader::new(file) {
        Ok(r) => r,
        Err(e) => {
            warn!("skipping {path_str}: {e}");
            stats.file_errors += 1;
            return Ok(());
        }
    };
    stats.files_scanned += 1;
    loop {
        match reader.next_line() {
            Ok(Some((line_no, line))) => {
                for finding in scan_line(&path_str, line_no, &line, opts) {
                    stats.findings_reported += 1;
                    sink.report(&finding, &line)?;
                }
            }
            Ok(None) => break,
            Err(e) => {
                error!("error parsing {path_str}: {e}");
                stats.file_errors += 1;
                break;
            }
        }
    }
    Ok(())
}
