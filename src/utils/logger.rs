use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogFormat;

/// Targets logged at the configured level; everything else stays at `warn`.
const APP_TARGETS: [&str; 3] = ["phone_zip_api", "build_region_map", "tower_http"];

fn filter_directives(level: &str) -> String {
    let mut directives: Vec<String> = APP_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect();
    directives.push("warn".to_string());
    directives.join(",")
}

fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directives(level)))
}

pub fn init_logger(level: &str, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(default_filter(level));

    match format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .init(),
        // 給日誌收集器使用的 JSON 格式
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(),
            )
            .init(),
    }
}

/// Maps the level names accepted in configuration onto `tracing` directives.
///
/// `WARNING` and `CRITICAL` are accepted as aliases; anything unrecognised
/// falls back to `debug`.
pub fn tracing_level(configured: &str) -> &'static str {
    match configured.trim().to_ascii_uppercase().as_str() {
        "TRACE" => "trace",
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" | "WARNING" => "warn",
        "ERROR" | "CRITICAL" => "error",
        _ => "debug",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_level_aliases() {
        assert_eq!(tracing_level("INFO"), "info");
        assert_eq!(tracing_level("info"), "info");
        assert_eq!(tracing_level("WARNING"), "warn");
        assert_eq!(tracing_level("CRITICAL"), "error");
        assert_eq!(tracing_level(" error "), "error");
    }

    #[test]
    fn test_filter_covers_server_and_tools() {
        assert_eq!(
            filter_directives("info"),
            "phone_zip_api=info,build_region_map=info,tower_http=info,warn"
        );
    }

    #[test]
    fn test_filter_directives_parse() {
        assert!(EnvFilter::try_new(filter_directives("debug")).is_ok());
    }

    #[test]
    fn test_tracing_level_unknown_falls_back_to_debug() {
        assert_eq!(tracing_level("VERBOSE"), "debug");
        assert_eq!(tracing_level(""), "debug");
    }
}
