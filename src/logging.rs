use std::io::Write;

use env_logger::fmt::Formatter;
use log::{LevelFilter, Record};

/// Sends log lines to stderr so they never mix with the wheel's own output.
pub fn init(level: LevelFilter) {
    env_logger::Builder::new()
        .format(|buf: &mut Formatter, record: &Record| {
            let timestamp = buf.timestamp_millis();
            writeln!(
                buf,
                "[{}] [{}] [{}] - {}",
                timestamp,
                record.level(),
                record.target(),
                record.args()
            )
        })
        .filter_level(level)
        .init();
}
