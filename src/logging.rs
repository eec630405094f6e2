//! ログ初期化
//!
//! 進捗表示は標準出力（println!）、診断ログはtracingで標準エラーに出す。

use crate::error::{FlattenError, Result};
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_TARGETS: [&str; 2] = ["flatten_applied_jobs", "flatten_jobs_common"];

fn default_directives(level: Level) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}

/// `RUST_LOG` があれば優先、なければ `--verbose` でdebug、通常はwarn
pub fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(level)))
        .map_err(|e| FlattenError::Config(format!("ログフィルタの作成に失敗: {}", e)))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| FlattenError::Config(format!("ログの初期化に失敗: {}", e)))?;

    Ok(())
}
