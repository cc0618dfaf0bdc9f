mod cli;
mod input;
mod logging;

use cli::Options;
use input::KeyCommand;
use tweener::{MonotonicClock, Tween, TweenState};

use anyhow::Result;
use crossterm::cursor::MoveToColumn;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor, Stylize};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute};
use log::{error, info};

use std::io::{stdout, Stdout};
use std::process::ExitCode;
use std::time::{Duration, Instant};

const BAR_WIDTH: usize = 30;

type DemoTween = Tween<f64, MonotonicClock>;

fn main() -> ExitCode {
    let matches = cli::build().get_matches();
    let options = Options::from(&matches);

    if let Err(e) = logging::init(options.log_level, options.log_file.as_deref()) {
        eprintln!("error: failed to set up logging ({e})");
        return ExitCode::FAILURE;
    }

    let tween = match Tween::with_config(&options.tween, MonotonicClock::new()) {
        Ok(tween) => tween,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        "tweening {} -> {} over {}s ({}, yoyo: {}, loop: {}, repeat: {:?})",
        options.tween.start,
        options.tween.end,
        options.tween.duration,
        tween.easing(),
        tween.is_yoyo(),
        options.looping,
        options.repeat,
    );

    let mut stdout = stdout();
    execute!(
        stdout,
        cursor::Hide,
        EnterAlternateScreen,
        Clear(ClearType::All),
    )
    .expect("should be able to execute crossterm commands");
    enable_raw_mode().expect("should be able to start raw mode");

    let result = run(tween, &options);

    disable_raw_mode().expect("should be able to disable raw mode");
    execute!(stdout, cursor::Show, LeaveAlternateScreen)
        .expect("should be able to leave alternate screen");

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(mut tween: DemoTween, options: &Options) -> Result<()> {
    let mut stdout = stdout();
    execute!(
        stdout,
        cursor::MoveTo(0, 0),
        Print("Tween ready.\n".dim()),
        MoveToColumn(0),
        Print("Press ".dim()),
        Print("p".bold()),
        Print(" to pause, ".dim()),
        Print("f".bold()),
        Print(" to finish, ".dim()),
        Print("t".bold()),
        Print(" to turn back, ".dim()),
        Print("s".bold()),
        Print(" to start, ".dim()),
        Print("q".bold()),
        Print(" to quit\n\n".dim()),
        MoveToColumn(0),
    )?;

    let frame_time = Duration::from_secs_f64(1. / options.fps as f64);
    let launched = Instant::now();

    loop {
        let f_start = Instant::now();

        match KeyCommand::read(&Duration::ZERO)? {
            KeyCommand::Quit => return Ok(()),
            KeyCommand::TogglePause if tween.is_paused() => tween.resume(),
            KeyCommand::TogglePause => tween.pause(),
            KeyCommand::Finish => tween.finish(),
            KeyCommand::TurnBack => tween.turn_back(),
            KeyCommand::Start => launch(&mut tween, options),
            KeyCommand::None | KeyCommand::Unknown => (),
        }

        if tween.state() == TweenState::Idle {
            let elapsed = launched.elapsed().as_secs_f64();
            if options.looping {
                tween.delay_loop(elapsed, options.repeat);
            } else {
                tween.delay_start(elapsed);
            }
        }

        let value = tween.update();
        draw_status(&mut stdout, &tween, value)?;

        // pause for the remainder of frame time to achieve target fps
        let dt = f_start.elapsed();
        if dt < frame_time {
            spin_sleep::sleep(frame_time - dt);
        }
    }
}

fn launch(tween: &mut DemoTween, options: &Options) {
    if options.looping {
        tween.start_loop(options.repeat);
    } else {
        tween.start();
    }
}

fn draw_status(stdout: &mut Stdout, tween: &DemoTween, value: f64) -> Result<()> {
    let (label, color) = match tween.state() {
        TweenState::Idle => ("waiting", Color::DarkGrey),
        TweenState::Playing => ("playing", Color::Cyan),
        TweenState::TurningBack => ("turning back", Color::Magenta),
        TweenState::Paused => ("paused", Color::Yellow),
        TweenState::Stopped => ("finished", Color::Green),
    };

    execute!(
        stdout,
        Clear(ClearType::CurrentLine),
        Print("Status:".bold()),
        SetForegroundColor(color),
        Print(format!(" {label:<12} ")),
        ResetColor,
        Print(progress_bar(tween.progress())),
        Print(format!(" {value:>10.2} ")),
        Print(format!("({}, cycle {})", tween.easing(), tween.repeat_count() + 1).dim()),
        MoveToColumn(0),
    )?;

    Ok(())
}

fn progress_bar(progress: f64) -> String {
    let filled = (progress.clamp(0., 1.) * BAR_WIDTH as f64).round() as usize;

    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_fills() {
        assert_eq!(progress_bar(0.), format!("[{}]", "-".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(1.), format!("[{}]", "#".repeat(BAR_WIDTH)));
        assert_eq!(
            progress_bar(0.5),
            format!("[{}{}]", "#".repeat(15), "-".repeat(15))
        );
        assert_eq!(progress_bar(2.), progress_bar(1.));
    }
}
