use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::shared::config::{get_log_dir, LoggingConfig};

/// Инициализация tracing: фильтр из RUST_LOG (или из конфигурации),
/// вывод в stderr и при необходимости в файл `backend.log`.
///
/// stdout остаётся под отчёт.
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    let file_layer = if config.file {
        let log_dir = get_log_dir(config);
        std::fs::create_dir_all(&log_dir)
            .with_context(|| format!("failed to create log dir {}", log_dir.display()))?;

        let log_file_path = log_dir.join("backend.log");
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file_path)
            .with_context(|| format!("failed to open {}", log_file_path.display()))?;

        Some(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .context("tracing subscriber already initialized")?;

    Ok(())
}

/// Логирование события с категорией
///
/// # Примеры
/// ```
/// backend::shared::logger::log("startup", "Анализ запущен");
/// ```
pub fn log(category: &str, message: &str) {
    tracing::info!(category = category, "{}", message);
}
