// room: replay a scripted session against a room composer and print what
// happened as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use room_app::{replay, RoomComposer, RoomConfig, RoomEvent, RoomSnapshot, Script};
use room_core::{InteractionMode, Size};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "room", version, about = "Replay pointer scripts against a perspective room")]
struct Cli {
    /// JSON script of viewport, window and pointer steps
    #[arg(long)]
    script: PathBuf,
    /// Config file to use instead of the user config
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value_t = 1200.0)]
    width: f32,
    #[arg(long, default_value_t = 800.0)]
    height: f32,
    /// Force touch mode regardless of viewport width
    #[arg(long)]
    touch: bool,
}

#[derive(Serialize)]
struct Report {
    events: Vec<RoomEvent>,
    snapshot: RoomSnapshot,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(report) => match serde_json::to_string_pretty(&report) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("failed to encode report: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            log::error!("{e}");
            eprintln!("room: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> room_app::Result<Report> {
    let config = match &cli.config {
        Some(path) => RoomConfig::from_path(path)?,
        None => RoomConfig::load()?,
    };
    let script = Script::from_path(&cli.script)?;

    let viewport = script
        .viewport
        .unwrap_or_else(|| Size::new(cli.width, cli.height));
    let mode = if cli.touch {
        InteractionMode::Touch
    } else {
        InteractionMode::for_width(viewport.width, config.narrow_breakpoint)
    };
    log::info!(
        "replaying {} steps at {}x{} ({:?})",
        script.steps.len(),
        viewport.width,
        viewport.height,
        mode
    );

    let mut room = RoomComposer::new(config, viewport, mode)?;
    let events = replay(&mut room, &script.steps)?;
    Ok(Report {
        events,
        snapshot: room.snapshot(),
    })
}
