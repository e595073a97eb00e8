use anyhow::{ensure, Context, Result};
use clap::Parser;
use entroscan_core::{load_config, scan_tree, ScanOptions, ScanStats};
use std::path::PathBuf;
use tracing::info;

mod report;

use report::{JsonSink, TextSink};

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "entroscan", version, about = "高熵字符串扫描器：在目录树中查找疑似泄露的密钥")]
struct Cli {
    /// 待扫描的目录
    directory: PathBuf,

    /// 熵阈值，调高可减少检出（默认 4.8）
    #[arg(short = 't', long)]
    threshold: Option<f64>,

    /// 候选串最小字符数（默认 12）
    #[arg(short = 'm', long)]
    minimum: Option<usize>,

    /// TOML 配置文件路径
    #[arg(long)]
    config: Option<PathBuf>,

    /// 输出格式：text 为高亮文本，json 为每发现一行 JSON
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    format: String,
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    // 相对路径以当前工作目录为基准展开
    let root = if cli.directory.is_absolute() {
        cli.directory.clone()
    } else {
        std::env::current_dir().context("resolve current directory")?.join(&cli.directory)
    };
    ensure!(root.is_dir(), "not a directory: {}", root.display());

    // 参数优先级：内置默认 < 配置文件 < 命令行显式参数
    let mut opts = ScanOptions::default();
    if let Some(path) = &cli.config {
        load_config(path)?.apply(&mut opts);
    }
    if let Some(threshold) = cli.threshold {
        opts.threshold = threshold;
    }
    if let Some(minimum) = cli.minimum {
        opts.min_token_len = minimum;
    }

    info!(
        root = %root.display(),
        threshold = opts.threshold,
        minimum = opts.min_token_len,
        "starting scan"
    );

    let stats: ScanStats = match cli.format.as_str() {
        "json" => {
            let mut sink = JsonSink::stdout();
            scan_tree(&root, &mut sink, &opts).context("scan failed")?
        }
        _ => {
            let mut sink = TextSink::stdout();
            scan_tree(&root, &mut sink, &opts).context("scan failed")?
        }
    };

    info!(
        files_scanned = stats.files_scanned,
        files_skipped = stats.files_skipped,
        findings_reported = stats.findings_reported,
        file_errors = stats.file_errors,
        "scan finished"
    );

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 支持通过环境变量 RUST_LOG 控制日志等级，如：RUST_LOG=debug
    // 日志一律写 stderr，stdout 留给扫描发现
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
