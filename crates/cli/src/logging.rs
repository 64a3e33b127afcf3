/// Install the env_logger backend for the `log` facade.
///
/// `filter` uses env_logger's directive syntax (`warn`, `edtheme_config=debug`).
/// Logs go to stderr so stdout stays machine-readable.
pub fn setup_logger(filter: &str) {
    let mut log_builder = env_logger::Builder::new();

    log_builder
        .format_timestamp_millis()
        .target(env_logger::Target::Stderr)
        .parse_filters(filter);

    log_builder.init();
}
