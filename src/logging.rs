use crate::config::MailAssertConfig;

/// Routes `log` output through the test harness' captured output.
///
/// Safe to call from every test; only the first call installs the logger.
/// Returns whether this call did the installing.
pub fn init_test_logger(level: Option<&str>) -> bool {
    let mut builder = env_logger::Builder::new();

    if let Some(level) = level {
        builder.parse_filters(level);
    } else if let Ok(env_level) = std::env::var("RUST_LOG") {
        builder.parse_filters(&env_level);
    } else {
        builder.filter_level(log::LevelFilter::Warn);
    }

    builder.is_test(true).try_init().is_ok()
}

pub fn init_logger_from_config(config: &MailAssertConfig) -> bool {
    init_test_logger(config.log_level.as_deref())
}
