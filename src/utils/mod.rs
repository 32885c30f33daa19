use std::{env, path::PathBuf, sync::Once};

use dirs::home_dir;

const DEFAULT_DIR_NAME: &str = ".fabcost";
const CONFIG_FILE: &str = "config.json";
const DEFAULT_DIRECTIVE: &str = "fabcost=warn";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber. Events go to stderr so they never
/// interleave with shell output on stdout.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if env::var_os("RUST_LOG").is_none() {
            if let Ok(directive) = DEFAULT_DIRECTIVE.parse::<Directive>() {
                filter = filter.add_directive(directive);
            }
        }

        // A subscriber installed by an embedding application wins.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// Returns the application data directory, defaulting to `~/.fabcost`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("FABCOST_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Path of the preferences file inside `base`.
pub fn config_file_in(base: &std::path::Path) -> PathBuf {
    base.join(CONFIG_FILE)
}
