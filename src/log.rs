use log::LevelFilter;

/// Environment variable that turns on debug logging in the `boggle` binary.
pub const DEBUG_ENV: &str = "BOGGLE_DEBUG";

/// Targets that log at the chosen level: the library and the `boggle` binary.
const CRATE_TARGETS: [&str; 2] = ["boggle_trie", "boggle"];

/// Level for this crate's own targets.
pub fn crate_level(debug_enabled: bool) -> LevelFilter {
    if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Default filter directives: dependencies at `warn`, this crate at [`crate_level`].
pub fn default_filters(debug_enabled: bool) -> String {
    let level = crate_level(debug_enabled).as_str().to_ascii_lowercase();
    let mut spec = String::from("warn");
    for target in CRATE_TARGETS {
        spec.push_str(&format!(",{target}={level}"));
    }
    spec
}

/// Initialize logging for the command line.
///
/// Solver messages go to stderr with millisecond timestamps so they can be lined up
/// with the per-board timings. `RUST_LOG` directives are applied on top of
/// [`default_filters`]. Only the first call installs a logger.
pub fn init_logger(debug_enabled: bool) {
    let mut builder = env_logger::Builder::new();
    builder
        .parse_filters(&default_filters(debug_enabled))
        .parse_default_env()
        .format_timestamp_millis()
        .format_module_path(false)
        .format_target(false);

    if builder.try_init().is_ok() {
        log::debug!(
            "boggle-trie {} logging enabled for {}",
            env!("CARGO_PKG_VERSION"),
            CRATE_TARGETS.join(", ")
        );
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn filters_scope_level_to_crate() {
        assert_eq!(default_filters(false), "warn,boggle_trie=info,boggle=info");
        assert_eq!(default_filters(true), "warn,boggle_trie=debug,boggle=debug");
    }

    #[test]
    fn debug_raises_crate_level() {
        assert_eq!(crate_level(false), LevelFilter::Info);
        assert_eq!(crate_level(true), LevelFilter::Debug);
        assert!(crate_level(true) > crate_level(false));
    }
}
