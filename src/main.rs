//! Wave Shooter entry point
//!
//! There is no window here: the binary drives the simulation with the
//! autopilot standing in for the keyboard, which makes it a soak test and a
//! demo at the same time. Hosts with a renderer use the library directly.
//!
//! Usage: `wave-shooter [settings.json] [--pacing realtime|headless] [--seed N] [--matches N]`

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use wave_shooter::settings::Pacing;
use wave_shooter::sim::{LoopSignal, Match, MatchEvent, autopilot};
use wave_shooter::{Settings, SettingsError};

#[derive(Parser, Debug)]
#[command(name = "wave-shooter")]
#[command(about = "Headless wave shooter: the autopilot plays a few matches and reports the scores")]
struct Cli {
    /// Settings JSON file; missing fields use defaults
    settings: Option<PathBuf>,
    /// Override the configured tick pacing
    #[arg(long, value_enum)]
    pacing: Option<Pacing>,
    /// Override the RNG seed
    #[arg(long)]
    seed: Option<u64>,
    /// Override the number of demo matches
    #[arg(long)]
    matches: Option<u32>,
}

impl Cli {
    /// Settings from the file (or defaults) with command-line overrides applied
    fn settings(&self) -> Result<Settings, SettingsError> {
        let mut settings = match &self.settings {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        if let Some(pacing) = self.pacing {
            settings.pacing = pacing;
        }
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(matches) = self.matches {
            settings.demo_matches = matches;
        }
        settings.validate()?;
        Ok(settings)
    }
}

/// Result of one demo match
struct MatchSummary {
    score: u32,
    waves_completed: u32,
    ticks: u64,
    died: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Wave Shooter (headless) starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), SettingsError> {
    let settings = Cli::parse().settings()?;
    let arena = settings.arena()?;
    let mut game = Match::new(arena, settings.effective_seed());

    for round in 1..=settings.demo_matches {
        let summary = run_match(&mut game, &settings);
        println!(
            "match {round}: score {}, waves completed {}, {} ticks{}",
            summary.score,
            summary.waves_completed,
            summary.ticks,
            if summary.died { "" } else { " (tick limit)" }
        );
    }

    log::info!("Done (seed {})", game.seed());
    Ok(())
}

/// Play until game over or the tick limit, then restart the match for the next round
fn run_match(game: &mut Match, settings: &Settings) -> MatchSummary {
    let frame = settings.frame_duration();
    let mut summary = MatchSummary {
        score: 0,
        waves_completed: 0,
        ticks: 0,
        died: false,
    };

    // Every round starts from a fresh match
    if game.state().ticks > 0 {
        game.reset();
    }

    while summary.ticks < settings.demo_ticks {
        let frame_start = Instant::now();

        let input = autopilot::plan(&game.snapshot(), summary.ticks);
        if game.step(&input) == LoopSignal::Quit {
            break;
        }
        summary.ticks += 1;

        for event in game.drain_events() {
            match event {
                MatchEvent::WaveCleared { next_wave } => {
                    log::debug!("Autopilot reached wave {next_wave}");
                }
                MatchEvent::GameOver {
                    score,
                    waves_completed,
                } => {
                    summary.score = score;
                    summary.waves_completed = waves_completed;
                    summary.died = true;
                }
                _ => {}
            }
        }
        if summary.died {
            break;
        }

        if settings.pacing == Pacing::Realtime {
            let elapsed = frame_start.elapsed();
            if elapsed < frame {
                std::thread::sleep(frame - elapsed);
            }
        }
    }

    if !summary.died {
        let state = game.state();
        summary.score = state.score;
        summary.waves_completed = state.waves_completed();
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args_uses_defaults() {
        let cli = Cli::try_parse_from(["wave-shooter"]).expect("parse");
        assert_eq!(cli.settings().ok(), Some(Settings::default()));
    }

    #[test]
    fn test_overrides_apply() {
        let cli = Cli::try_parse_from([
            "wave-shooter",
            "--pacing",
            "fast",
            "--seed",
            "7",
            "--matches",
            "1",
        ])
        .expect("parse");
        let settings = cli.settings().expect("settings");
        assert_eq!(settings.pacing, Pacing::Headless);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.demo_matches, 1);
    }

    #[test]
    fn test_flag_without_value_is_rejected() {
        // Must not be mistaken for a settings path
        assert!(Cli::try_parse_from(["wave-shooter", "--pacing"]).is_err());
        assert!(Cli::try_parse_from(["wave-shooter", "--pacing", "warp"]).is_err());
    }

    #[test]
    fn test_help_is_not_a_settings_path() {
        let err = Cli::try_parse_from(["wave-shooter", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_settings_path_is_positional() {
        let cli = Cli::try_parse_from(["wave-shooter", "custom.json", "--pacing", "rt"])
            .expect("parse");
        assert_eq!(cli.settings, Some(PathBuf::from("custom.json")));
        assert_eq!(cli.pacing, Some(Pacing::Realtime));
        assert!(matches!(cli.settings(), Err(SettingsError::Io { .. })));
    }
}
