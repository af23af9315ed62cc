use std::env;
use std::io::IsTerminal;

use tracing_subscriber::filter::EnvFilter;

/// Level used when neither `RUST_LOG` nor `TEMPIFY_LOG` is set
fn default_level(debug: bool) -> &'static str {
    if debug { "debug" } else { "warn" }
}

fn level_from(value: Option<&str>, debug: bool) -> &'static str {
    match value {
        Some("trace") => "trace",
        Some("debug") => "debug",
        Some("info") => "info",
        Some("warn") => "warn",
        Some("error") => "error",
        _ => default_level(debug),
    }
}

/// Install the global tracing subscriber (stderr, compact).
///
/// `RUST_LOG` wins when set, then `TEMPIFY_LOG`, then `--debug`.
pub(crate) fn init_tracing(debug: bool) {
    let env_filter = if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = level_from(env::var("TEMPIFY_LOG").ok().as_deref(), debug);
        EnvFilter::new(format!("tempify={level}"))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(env_filter)
        .with_ansi(std::io::stderr().is_terminal())
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_level_wins() {
        assert_eq!(level_from(Some("info"), true), "info");
        assert_eq!(level_from(Some("error"), false), "error");
    }

    #[test]
    fn debug_flag_is_fallback() {
        assert_eq!(level_from(None, true), "debug");
        assert_eq!(level_from(None, false), "warn");
        assert_eq!(level_from(Some("loud"), false), "warn");
    }
}
