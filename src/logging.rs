/// Environment variable holding the `env_logger` filter.
pub const LOG_ENV: &str = "MAX_MIN_LOG";
/// Environment variable holding the `env_logger` write style.
pub const LOG_STYLE_ENV: &str = "MAX_MIN_LOG_STYLE";

/// Initialises `env_logger` on stderr, defaulting to `warn`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger() {
    let env = env_logger::Env::new()
        .filter_or(LOG_ENV, "warn")
        .write_style(LOG_STYLE_ENV);
    let _ = env_logger::Builder::from_env(env)
        .target(env_logger::Target::Stderr)
        .try_init();
}
