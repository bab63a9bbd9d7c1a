//! Log setup. Output goes to a file because the terminal belongs to the UI.
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_ENV: &str = "MODERNART_LOG";
const LOG_FILE: &str = "modernart.log";

pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("modernart")
}

/// Installs the global subscriber. Keep the guard alive until exit so buffered lines get flushed.
pub fn init() -> Result<WorkerGuard> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(non_blocking);
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(env_filter)
        .try_init()
        .context("failed to install log subscriber")?;

    install_panic_hook();

    Ok(guard)
}

/// Logs panics, then hands them to the previous hook so they still reach stderr.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tracing::error!("modernart panicked: {panic_info}");
        previous(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use std::process::Command;

    use super::*;

    const CHILD_ENV: &str = "MODERNART_PANIC_CHILD";
    const MESSAGE: &str = "palette exploded";

    #[test]
    fn panic_message_reaches_stderr() {
        if std::env::var_os(CHILD_ENV).is_some() {
            install_panic_hook();
            panic!("{MESSAGE}");
        }

        let output = Command::new(std::env::current_exe().unwrap())
            .args([
                "logging::tests::panic_message_reaches_stderr",
                "--exact",
                "--nocapture",
                "--test-threads=1",
            ])
            .env(CHILD_ENV, "1")
            .output()
            .unwrap();
        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains(MESSAGE), "stderr was: {stderr}");
    }
}
