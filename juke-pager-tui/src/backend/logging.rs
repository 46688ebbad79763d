//! 日志初始化
//!
//! TUI 占用了标准输出，日志只能写入文件：
//! `<data_local_dir>/juke-pager/juke-pager.log`。
//! 核心库通过 `log` 门面输出，由 tracing-subscriber 一并收集。

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE: &str = "juke-pager.log";

/// 日志文件路径
pub fn log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("juke-pager")
        .join(LOG_FILE)
}

/// 解析过滤规则；`RUST_LOG` 优先，其次是配置文件中的规则
fn build_filter(configured: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// 安装全局日志订阅器，返回日志文件路径
pub fn init_logging(filter: &str) -> Result<PathBuf> {
    let path = log_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(build_filter(filter))
        .try_init()
        .context("installing log subscriber")?;

    Ok(path)
}
