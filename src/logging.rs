//! File-backed tracing, off unless asked for.
//!
//! The TUI owns the terminal, so log output must never reach stdout or
//! stderr while it runs. Logging therefore goes to a file, and only when
//! `GIFTMART_LOG` names one; otherwise no subscriber is installed at all.

use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;

/// Installs the file subscriber when `GIFTMART_LOG` is set.
///
/// `RUST_LOG` still controls the filter; without it everything at info and
/// above is kept. Failing to create the log file is an error: the user
/// asked for logs and would otherwise silently get none.
pub fn init() -> io::Result<()> {
    let Ok(base) = std::env::var("GIFTMART_LOG") else {
        return Ok(());
    };

    let file = std::fs::File::create(unique_log_path(&base))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_ansi(false)
        .init();
    Ok(())
}

/// `{base}.{unix seconds}.{pid}`: concurrent instances never share a file.
fn unique_log_path(base: &str) -> PathBuf {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    PathBuf::from(format!("{}.{}.{}", base, seconds, std::process::id()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_keeps_base_and_appends_pid() {
        let name = unique_log_path("/tmp/giftmart.log")
            .to_string_lossy()
            .into_owned();
        assert!(name.starts_with("/tmp/giftmart.log."));
        assert!(name.ends_with(&format!(".{}", std::process::id())));
    }

    #[test]
    fn log_path_suffix_is_two_numeric_segments() {
        let name = unique_log_path("app.log").to_string_lossy().into_owned();
        let tail: Vec<&str> = name["app.log.".len()..].split('.').collect();
        assert_eq!(tail.len(), 2);
        assert!(tail
            .iter()
            .all(|segment| !segment.is_empty() && segment.chars().all(|c| c.is_ascii_digit())));
    }
}
