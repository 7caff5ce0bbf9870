//! Log setup. The terminal belongs to the UI, so logs always go to a file.

use anyhow::Context;
use chrono::Local;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

#[derive(Clone, Debug, Default, clap::Args)]
pub struct LoggingArgs {
    /// Log verbosity (RUST_LOG takes precedence)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Directory for the log file (default: system temp dir)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Log file name or path; relative paths are joined onto --log-dir
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl LoggingArgs {
    pub fn resolve_path(&self, component: &str) -> PathBuf {
        let dir = self.log_dir.clone().unwrap_or_else(std::env::temp_dir);
        match &self.log_file {
            Some(file) if file.is_absolute() => file.clone(),
            Some(file) => dir.join(file),
            None => dir.join(format!("{component}-{}.log", Local::now().format("%Y-%m-%d"))),
        }
    }

    /// Installs the global subscriber and returns the file it writes to.
    pub fn init(&self, component: &str) -> anyhow::Result<PathBuf> {
        let path = self.resolve_path(component);
        init_to_file(component, self.log_level.into(), &path)?;
        Ok(path)
    }
}

pub fn init_to_file(component: &str, default_level: Level, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{default_level},{}={default_level}",
            component.replace('-', "_")
        ))
    });
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .context("installing tracing subscriber")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_log_file_wins_over_dir() {
        let args = LoggingArgs {
            log_dir: Some("/var/log/todo".into()),
            log_file: Some("/tmp/todo.log".into()),
            ..Default::default()
        };
        assert_eq!(args.resolve_path("todo-cards"), PathBuf::from("/tmp/todo.log"));
    }

    #[test]
    fn relative_log_file_joins_dir() {
        let args = LoggingArgs {
            log_dir: Some("/var/log/todo".into()),
            log_file: Some("ui.log".into()),
            ..Default::default()
        };
        assert_eq!(args.resolve_path("todo-cards"), PathBuf::from("/var/log/todo/ui.log"));
    }

    #[test]
    fn default_name_is_dated() {
        let args = LoggingArgs {
            log_dir: Some("/logs".into()),
            ..Default::default()
        };
        let path = args.resolve_path("todo-cards");
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("todo-cards-"));
        assert!(name.ends_with(".log"));
        assert_eq!(path.parent(), Some(Path::new("/logs")));
    }
}
