use std::io::Write;

use log::LevelFilter;

/// Initializes env_logger, writing to stderr.
/// The format is:
/// `<level>  /path/to/file:<line_number>  <time>  <log_message>`
///
/// `RUST_LOG` overrides `log_level` when set.
///
/// ## Panics
///
/// Panics if a global logger was already set.
pub fn init_logging(log_level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(log_level)
        .parse_default_env()
        .format(|buf, record| {
            let location =
                format!("{}:{}", record.file().unwrap_or("unknown"), record.line().unwrap_or(0));
            let time_format = time::macros::format_description!("[hour]:[minute]:[second]");
            let formatted_time = time::OffsetDateTime::now_local()
                .unwrap_or_else(|_| time::OffsetDateTime::now_utc())
                .format(time_format)
                .unwrap_or_default();
            writeln!(buf, "{:7}{:45} {formatted_time} {}", record.level(), location, record.args())
        })
        .init();
}
