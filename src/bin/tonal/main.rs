//! tonal - terminal scale and chord explorer
//!
//! Run with: cargo run -- --scale scale.json --progression progression.json

mod app;
mod logger;
mod ui;

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use clap::Parser;
use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};

use app::App;
use tonal_keys::{
    io::CpalBackend,
    playback::{PlaybackConfig, TonePlayer},
    theory::{parse_progression_payload, parse_scale_payload, Progression, ScaleData, LOOP_GAP},
};

#[derive(Parser, Debug)]
#[command(name = "tonal", about = "Play scales and chords from the terminal")]
struct Cli {
    /// Scale payload (JSON) to load instead of C major
    #[arg(short, long)]
    scale: Option<PathBuf>,

    /// Progression payload (JSON) to load into the chord loop
    #[arg(short, long)]
    progression: Option<PathBuf>,

    /// Seconds between successive chord notes
    #[arg(long, default_value_t = 0.05)]
    strum: f64,

    /// Seconds between loop chords
    #[arg(long, default_value_t = LOOP_GAP.as_secs_f64())]
    gap: f64,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    logger::init(level).map_err(|e| eyre!("failed to install logger: {}", e))?;

    let scale = match &cli.scale {
        Some(path) => load_scale(path)?,
        None => ScaleData::c_major(),
    };
    log::info!("loaded {}", scale.scale_name);

    let progression = cli.progression.as_deref().map(load_progression).transpose()?;

    let config = PlaybackConfig::new().strum(cli.strum);
    let player = TonePlayer::new(CpalBackend::open).with_config(config);
    let gap = Duration::try_from_secs_f64(cli.gap).unwrap_or(LOOP_GAP);

    let mut app = App::new(scale, player, gap);
    if let Some(progression) = progression {
        app.load_progression(progression);
    }
    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();
    result
}

fn load_scale(path: &Path) -> EyreResult<ScaleData> {
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    parse_scale_payload(&text).wrap_err_with(|| format!("invalid scale payload in {}", path.display()))
}

fn load_progression(path: &Path) -> EyreResult<Progression> {
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    parse_progression_payload(&text)
        .wrap_err_with(|| format!("invalid progression payload in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progression_flag_loads_payload() {
        let path = std::env::temp_dir().join(format!("tonal-progression-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"name": "Cadence", "description": "ii-V-I", "chords": [
                {"roman": "ii", "name": "D Minor", "notes": ["D", "F", "A"], "type": "Minor"},
                {"roman": "V", "name": "G Major", "notes": ["G", "B", "D"], "type": "Major"},
                {"roman": "I", "name": "C Major", "notes": ["C", "E", "G"], "type": "Major"}
            ]}"#,
        )
        .unwrap();

        let cli = Cli::try_parse_from(["tonal", "--progression", path.to_str().unwrap()]).unwrap();
        let progression = load_progression(cli.progression.as_deref().unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(progression.name, "Cadence");
        assert_eq!(progression.chords.len(), 3);
        assert!(cli.scale.is_none());
    }

    #[test]
    fn bad_progression_file_is_an_error() {
        let path = std::env::temp_dir().join("tonal-missing-progression.json");
        assert!(load_progression(&path).is_err());
    }
}
