//! Logging setup shared by the desktop binary and tests.
//!
//! `RUST_LOG` wins when set; otherwise verbosity picks the level for the
//! portfolio crates and everything else stays at `warn`.

use tracing_subscriber::EnvFilter;

/// Filter directives for a `-v` count
pub fn default_directives(verbose: u8) -> String {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    format!("warn,portfolio_desktop={level},portfolio_core={level},portfolio_ui={level}")
}

/// Install the global fmt subscriber. Safe to call more than once.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert!(default_directives(0).contains("portfolio_core=info"));
        assert!(default_directives(1).contains("portfolio_core=debug"));
        assert!(default_directives(5).contains("portfolio_core=trace"));
        assert!(default_directives(0).starts_with("warn,"));
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(0);
        init(2);
    }
}
