//! Rock Drift headless driver
//!
//! Runs the simulation with a scripted pilot and prints the final scene as
//! JSON. Usage: `rock-drift [config.json] [frames]`

use rock_drift::sim::{Controls, FrameInput, GamePhase, InputEvent};
use rock_drift::{EngineConfig, EngineError, SimulationEngine};

const DEFAULT_FRAMES: u64 = 3600;
/// Frames between scripted shots
const FIRE_INTERVAL: u64 = 12;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), EngineError> {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    let frames = frame_limit(args.next().as_deref());

    log::info!("Rock Drift (headless) starting, {frames} frames max");
    let mut engine = SimulationEngine::new(&config)?;
    let mut input = FrameInput::default();

    for frame in 0..frames {
        input.held = pilot_controls(frame);
        if frame % FIRE_INTERVAL == 0 {
            input.push(InputEvent::Fire);
        }

        let events = engine.advance(&input);
        input.clear_events();

        for destruction in &events.destroyed {
            log::info!(
                "Frame {frame}: +{} (size {}), score {}",
                destruction.points,
                destruction.size,
                events.score
            );
        }
        if events.phase == GamePhase::GameOver {
            break;
        }
    }

    log::info!(
        "Finished in {:?} with score {}",
        engine.phase(),
        engine.score()
    );

    let scene = engine.scene();
    match serde_json::to_string_pretty(&scene) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Failed to serialize scene: {err}"),
    }
    Ok(())
}

/// Frame limit from the optional CLI argument. An unparsable value falls
/// back to the default with a warning.
fn frame_limit(arg: Option<&str>) -> u64 {
    match arg.map(str::parse::<u64>) {
        None => DEFAULT_FRAMES,
        Some(Ok(frames)) => frames,
        Some(Err(err)) => {
            log::warn!(
                "Ignoring frame limit {:?} ({err}), running {DEFAULT_FRAMES} frames",
                arg.unwrap_or_default()
            );
            DEFAULT_FRAMES
        }
    }
}

/// Slow constant spin with a short burn every few seconds
fn pilot_controls(frame: u64) -> Controls {
    Controls {
        turn_left: false,
        turn_right: frame % 3 == 0,
        thrust: frame % 240 < 20,
    }
}
