use anyhow::Result;
use chrono::Local;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

use std::path::Path;

const TIME_FORMAT: &str = "%H:%M:%S%.3f";

/// Installs the global logger.
///
/// Without a log file, records go to stderr with `\r\n` line endings so they
/// stay readable while the terminal is in raw mode.
pub fn init(level: LevelFilter, log_file: Option<&Path>) -> Result<()> {
    let dispatch = fern::Dispatch::new().level(level);

    let dispatch = match log_file {
        Some(path) => dispatch
            .format(|out, message, record| {
                out.finish(format_args!(
                    "{} {:<5} [{}] {}",
                    Local::now().format(TIME_FORMAT),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .chain(fern::log_file(path)?),
        None => {
            let colors = ColoredLevelConfig::new()
                .error(Color::Red)
                .warn(Color::Yellow)
                .info(Color::Green)
                .debug(Color::Cyan)
                .trace(Color::BrightBlack);

            dispatch
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "{} {} [{}] {}",
                        Local::now().format(TIME_FORMAT),
                        colors.color(record.level()),
                        record.target(),
                        message
                    ))
                })
                .chain(fern::Output::stderr("\r\n"))
        }
    };

    dispatch.apply()?;
    Ok(())
}
