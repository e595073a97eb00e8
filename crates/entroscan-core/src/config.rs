//! TOML 配置文件：覆盖阈值/最小长度，追加忽略子串
//!
//! 配置文件的字段全部可选，缺省字段不改动既有参数。
//! 优先级约定由调用方保证：内置默认 < 配置文件 < 命令行显式参数。
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::options::ScanOptions;

/// 配置文件结构，示例：
///
/// ```toml
/// threshold = 5.0
/// minimum = 16
/// ignore = ["vendor/", ".min.js"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    /// 熵阈值
    #[serde(default)]
    pub threshold: Option<f64>,
    /// 候选串最小字符数
    #[serde(default)]
    pub minimum: Option<usize>,
    /// 追加到内置表之后的忽略子串
    #[serde(default)]
    pub ignore: Vec<String>,
}

/// 读取并解析配置文件
pub fn load_config(path: &Path) -> Result<FileConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: FileConfig = toml::from_str(&text)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    Ok(config)
}

impl FileConfig {
    /// 把配置文件中出现的字段套用到扫描参数上；忽略表是追加而非替换
    pub fn apply(&self, opts: &mut ScanOptions) {
        if let Some(threshold) = self.threshold {
            opts.threshold = threshold;
        }
        if let Some(minimum) = self.minimum {
            opts.min_token_len = minimum;
        }
        opts.ignore.extend(self.ignore.iter().cloned());
    }
}

#[cfg(test)]
mod tests {
    use super::{load_config, FileConfig};
    use crate::options::{ScanOptions, DEFAULT_IGNORE};
    use std::io::Write;

    #[test]
    fn partial_config_parses_with_missing_fields() {
        let config: FileConfig = toml::from_str("threshold = 5.5").unwrap();
        assert_eq!(config.threshold, Some(5.5));
        assert_eq!(config.minimum, None);
        assert!(config.ignore.is_empty());
    }

    #[test]
    fn empty_config_is_valid() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.threshold, None);
        assert_eq!(config.minimum, None);
    }

    #[test]
    fn apply_overrides_present_fields_only() {
        let config: FileConfig = toml::from_str(
            "minimum = 20\nignore = [\"vendor/\"]",
        )
        .unwrap();
        let mut opts = ScanOptions::default();
        config.apply(&mut opts);
        assert_eq!(opts.threshold, 4.8);
        assert_eq!(opts.min_token_len, 20);
        assert_eq!(opts.ignore.len(), DEFAULT_IGNORE.len() + 1);
        assert!(opts.ignore.iter().any(|s| s == "vendor/"));
    }

    #[test]
    fn load_config_reads_from_disk() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "threshold = 6.0").unwrap();
        f.flush().unwrap();
        let config = load_config(f.path()).unwrap();
        assert_eq!(config.threshold, Some(6.0));
    }

    #[test]
    fn load_config_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(&dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn load_config_fails_on_bad_toml() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "threshold = ").unwrap();
        f.flush().unwrap();
        assert!(load_config(f.path()).is_err());
    }
}
