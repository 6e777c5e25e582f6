//! Egg Timer - a terminal countdown driven by the countdown engine
//!
//! This is the main entry point for the egg-timer demo binary. It stands in
//! for a presentation layer: it feeds a preset duration and a start command
//! into the engine, then renders every published snapshot until the countdown
//! completes or a shutdown signal arrives.

use tracing::{debug, info};

use egg_timer::{
    config::Config, presets, state::CountdownEngine, utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("egg_timer={}", config.log_level()))
        .init();

    info!("Starting egg-timer");
    info!(
        "Configuration: preset={} ({}ms), tick={}ms",
        config.preset,
        config.duration_millis(),
        config.tick_ms
    );
    for preset in presets::catalog() {
        debug!("Preset {:>2}: {}", preset.slot, preset.label);
    }

    let engine = CountdownEngine::new();
    let mut updates = engine.subscribe();

    engine.select_duration(config.duration_millis() as i64)?;
    engine.start_with_interval(config.tick_ms)?;

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = updates.borrow_and_update().clone();
                info!(
                    "{} | {:>5.1}% | {}",
                    snapshot.remaining_text,
                    snapshot.completion_fraction * 100.0,
                    if snapshot.is_running { "running" } else { "stopped" }
                );
                debug!(
                    "Snapshot: {}",
                    serde_json::to_string(&snapshot).unwrap_or_default()
                );
                if !snapshot.is_running && snapshot.completion_fraction >= 1.0 {
                    info!("Countdown finished");
                    break;
                }
            }
            _ = &mut shutdown => {
                info!("Shutdown signal received");
                engine.pause()?;
                break;
            }
        }
    }

    engine.shutdown();
    info!("Engine shutdown complete");
    Ok(())
}
