use anyhow::{anyhow, ensure, Result};
use clap::builder::ValueParser;
use clap::{arg, command, value_parser, ArgAction, ArgMatches, Command};
use log::LevelFilter;
use tweener::{Ease, TweenConfig};

use std::path::PathBuf;

const DURATION_LONG_HELP: &str = "Specify how long one pass from FROM to TO \
takes. If not specified, defaults to 2 seconds.

The value is parsed as SECONDS. Numbers can be specified as integers (e.g., 3) \
or floating point numbers (e.g., 0.75), and must be positive.";

const DELAY_LONG_HELP: &str = "Wait this many SECONDS after launch before \
playback begins. If not specified, playback begins immediately.";

const YOYO_LONG_HELP: &str = "Bounce back to FROM after reaching TO, instead \
of stopping or jumping back to the start.

With '--loop', one repeat is a full round trip.";

const REPEAT_LONG_HELP: &str = "Total number of cycles to play when looping. \
If not specified, loops until finished with 'f' or quit with 'q'.";

const FPS_LONG_HELP: &str = "Number of frames drawn per second. If not \
specified, defaults to 60.";

const VERBOSE_LONG_HELP: &str = "Increase logging verbosity. Use once for \
info, twice for debug and three times for trace output.

Logs are written to stderr unless '--log-file' is given.";

/// Settings for one run of the demo.
#[derive(Debug)]
pub struct Options {
    pub tween: TweenConfig<f64>,
    pub looping: bool,
    pub repeat: Option<u32>,
    pub fps: u32,
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl From<&ArgMatches> for Options {
    fn from(value: &ArgMatches) -> Self {
        let from = value
            .get_one::<f64>("FROM")
            .copied()
            .expect("from should have a default");
        let to = value
            .get_one::<f64>("TO")
            .copied()
            .expect("to should have a default");
        let duration = value
            .get_one::<f64>("duration")
            .copied()
            .expect("duration should have a default");
        let easing = value
            .get_one::<Ease>("easing")
            .copied()
            .expect("easing should have a default");

        let mut tween = TweenConfig::new(from, to, duration);
        tween.delay = value.get_one::<f64>("delay").copied().unwrap_or(0.);
        tween.yoyo = value.get_flag("yoyo");
        tween.easing = easing.name().to_owned();

        Self {
            tween,
            looping: value.get_flag("loop"),
            repeat: value.get_one::<u32>("repeat").copied(),
            fps: value
                .get_one::<u32>("fps")
                .copied()
                .expect("fps should have a default"),
            log_level: log_level(value.get_count("verbose")),
            log_file: value.get_one::<PathBuf>("log-file").cloned(),
        }
    }
}

pub fn build() -> Command {
    command!()
        .disable_help_flag(true)
        .disable_version_flag(true)
        .after_help("Use '--help' for detailed information")
        .after_long_help("Use '-h' for brief information")
        .arg(
            arg!([FROM] "Start value (default: 0)")
                .default_value("0")
                .hide_default_value(true)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(f64)),
        )
        .arg(
            arg!([TO] "End value (default: 100)")
                .default_value("100")
                .hide_default_value(true)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(f64)),
        )
        .next_help_heading("Tween Options")
        .arg(
            arg!(-d --duration <SECONDS> "Duration of one pass (default: 2)")
                .long_help(DURATION_LONG_HELP)
                .default_value("2")
                .hide_default_value(true)
                .value_parser(ValueParser::new(parse_duration)),
        )
        .arg(
            arg!(-D --delay <SECONDS> "Delay before playback begins")
                .long_help(DELAY_LONG_HELP)
                .value_parser(ValueParser::new(parse_delay)),
        )
        .arg(
            arg!(-e --easing <NAME> "Easing curve, or 'random' (default: linear)")
                .long_help(easing_long_help())
                .default_value("linear")
                .hide_default_value(true)
                .value_parser(ValueParser::new(parse_easing)),
        )
        .arg(arg!(-y --yoyo "Bounce back to the start value").long_help(YOYO_LONG_HELP))
        .arg(arg!(-l --"loop" "Repeat the tween"))
        .arg(
            arg!(-r --repeat <COUNT> "Number of cycles to play when looping")
                .long_help(REPEAT_LONG_HELP)
                .requires("loop")
                .value_parser(ValueParser::new(parse_repeat)),
        )
        .next_help_heading("Display Options")
        .arg(
            arg!(-f --fps <FPS> "Number of frames drawn per second (default: 60)")
                .long_help(FPS_LONG_HELP)
                .default_value("60")
                .hide_default_value(true)
                .value_parser(ValueParser::new(parse_fps)),
        )
        .arg(arg!(-v --verbose ... "Increase logging verbosity").long_help(VERBOSE_LONG_HELP))
        .arg(
            arg!(--"log-file" <PATH> "Write logs to a file instead of stderr")
                .value_parser(value_parser!(PathBuf)),
        )
        .next_help_heading("Options")
        .arg(arg!(-h --help "Print help information and quit").action(ArgAction::Help))
        .arg(arg!(-V --version "Print version information and quit").action(ArgAction::Version))
}

fn easing_long_help() -> String {
    let names = Ease::ALL.map(Ease::name).join(", ");

    format!(
        "Name of the easing curve applied to the tween. If not specified, \
defaults to linear. Use 'random' to pick one at startup.

Available curves: {names}"
    )
}

fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn parse_secs(s: &str) -> Result<f64> {
    match s.parse::<f64>() {
        Ok(value) => {
            ensure!(value.is_finite(), "value must be a finite number of seconds");
            Ok(value)
        }
        Err(e) => Err(anyhow!(e)),
    }
}

pub fn parse_duration(s: &str) -> Result<f64> {
    let value = parse_secs(s)?;
    ensure!(value > 0., "duration must be a positive number");
    Ok(value)
}

pub fn parse_delay(s: &str) -> Result<f64> {
    let value = parse_secs(s)?;
    ensure!(value >= 0., "delay must not be negative");
    Ok(value)
}

pub fn parse_easing(s: &str) -> Result<Ease> {
    if s == "random" {
        return Ok(Ease::ALL[fastrand::usize(..Ease::ALL.len())]);
    }

    Ok(s.parse::<Ease>()?)
}

fn parse_repeat(s: &str) -> Result<u32> {
    // parse first as i64 so we can report better error messages
    match s.parse::<i64>() {
        Ok(value) => {
            ensure!(value > 0, "repeat must be a positive number");
            ensure!(
                value <= u32::MAX as i64,
                format!("repeat must be between 1 and {}", u32::MAX)
            );
            Ok(value as u32)
        }
        Err(e) => Err(anyhow!(e)),
    }
}

fn parse_fps(s: &str) -> Result<u32> {
    match s.parse::<i64>() {
        Ok(value) => {
            ensure!(value > 0, "fps must be a positive number");
            ensure!(value <= 1000, "fps must be between 1 and 1000");
            Ok(value as u32)
        }
        Err(e) => Err(anyhow!(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(args: &[&str]) -> Options {
        let matches = build()
            .try_get_matches_from(std::iter::once("tweener").chain(args.iter().copied()))
            .unwrap();
        Options::from(&matches)
    }

    #[test]
    fn command_is_valid() {
        build().debug_assert();
    }

    #[test]
    fn defaults() {
        let opts = options(&[]);
        assert_eq!(opts.tween, TweenConfig::new(0., 100., 2.));
        assert!(!opts.looping);
        assert_eq!(opts.repeat, None);
        assert_eq!(opts.fps, 60);
        assert_eq!(opts.log_level, LevelFilter::Warn);
        assert_eq!(opts.log_file, None);
    }

    #[test]
    fn full_invocation() {
        let opts = options(&[
            "-d", "0.5", "-D", "1", "-e", "out_bounce", "-y", "-l", "-r", "3", "-vv",
            "--log-file", "tween.log", "--", "-5", "5",
        ]);

        assert_eq!(opts.tween.start, -5.);
        assert_eq!(opts.tween.end, 5.);
        assert_eq!(opts.tween.duration, 0.5);
        assert_eq!(opts.tween.delay, 1.);
        assert_eq!(opts.tween.easing, "out_bounce");
        assert!(opts.tween.yoyo);
        assert!(opts.looping);
        assert_eq!(opts.repeat, Some(3));
        assert_eq!(opts.log_level, LevelFilter::Debug);
        assert_eq!(opts.log_file, Some(PathBuf::from("tween.log")));
    }

    #[test]
    fn repeat_requires_loop() {
        assert!(build()
            .try_get_matches_from(["tweener", "--repeat", "2"])
            .is_err());
    }

    #[test]
    fn unknown_easing_is_rejected() {
        assert!(build()
            .try_get_matches_from(["tweener", "--easing", "wobbly"])
            .is_err());
    }

    #[test]
    fn durations() {
        assert_eq!(parse_duration("2").unwrap(), 2.);
        assert_eq!(parse_duration("0.25").unwrap(), 0.25);
        assert!(parse_duration("0").is_err());
        assert!(parse_duration("-1").is_err());
        assert!(parse_duration("inf").is_err());
        assert!(parse_duration("soon").is_err());

        assert_eq!(parse_delay("0").unwrap(), 0.);
        assert!(parse_delay("-0.5").is_err());
    }

    #[test]
    fn easing_names() {
        assert_eq!(parse_easing("in_out_expo").unwrap(), Ease::InOutExpo);
        assert!(Ease::ALL.contains(&parse_easing("random").unwrap()));
        assert!(parse_easing("in_out").is_err());
    }

    #[test]
    fn counts() {
        assert_eq!(parse_repeat("4").unwrap(), 4);
        assert!(parse_repeat("0").is_err());
        assert!(parse_repeat("99999999999").is_err());
        assert_eq!(parse_fps("30").unwrap(), 30);
        assert!(parse_fps("-1").is_err());
        assert!(parse_fps("5000").is_err());
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(log_level(1), LevelFilter::Info);
        assert_eq!(log_level(3), LevelFilter::Trace);
        assert_eq!(log_level(9), LevelFilter::Trace);
    }
}
