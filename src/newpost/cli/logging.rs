use newpost::config::Verbosity;

/// Installs the global fmt subscriber. Logs go to stderr so stdout stays
/// clean for `--output json`.
pub fn init(verbosity: Verbosity) {
    tracing_subscriber::fmt()
        .with_max_level(verbosity.level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
