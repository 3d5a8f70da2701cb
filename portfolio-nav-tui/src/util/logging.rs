//! 日志初始化
//!
//! stdout 被终端界面占用，日志写入文件：
//!     <cache_dir>/portfolio-nav/portfolio-nav.log
//! 级别默认 info，可用 RUST_LOG 覆盖。核心库使用 `log` 门面，
//! 由 tracing-subscriber 的 tracing-log 桥接进来。

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE: &str = "portfolio-nav.log";

/// 日志文件路径
pub fn log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("portfolio-nav")
        .join(LOG_FILE)
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))
}

/// 安装全局日志订阅者
pub fn init_logging() -> Result<PathBuf> {
    let path = log_path();
    let file = open_log_file(&path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .context("failed to install log subscriber")?;

    Ok(path)
}
