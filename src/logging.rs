use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    Handle,
};

/// Initialise console logging at the given level.
///
/// This is a convenience for binaries and tests embedding the registry.
/// Hosts that need file appenders or per-target filtering should build
/// their own log4rs config instead.
pub fn init(level: LevelFilter) -> Handle {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}",
        )))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))
        .expect("Logging config is well-formed");
    log4rs::init_config(config).expect("Failed to initialise logging")
}
