/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::utils::config::get_env_or_none;
use std::sync::Once;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

fn level_from_env() -> Level {
    let log_level = get_env_or_none::<String>("LOGLEVEL")
        .unwrap_or_else(|| "INFO".to_string())
        .to_uppercase();
    match log_level.as_str() {
        "DEBUG" => Level::DEBUG,
        "ERROR" => Level::ERROR,
        "WARN" => Level::WARN,
        "TRACE" => Level::TRACE,
        _ => Level::INFO,
    }
}

/// Installs the global tracing subscriber
///
/// The level is read from the `LOGLEVEL` environment variable (`TRACE`,
/// `DEBUG`, `INFO`, `WARN` or `ERROR`; `INFO` otherwise). Only the first call
/// has an effect, and a subscriber installed elsewhere is left in place.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = level_from_env();
        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
        match tracing::subscriber::set_global_default(subscriber) {
            Ok(()) => debug!("Log level set to: {}", level),
            Err(e) => eprintln!("Global subscriber already set: {e}"),
        }
    });
}
