//! Floorplanner (headless).
//!
//! Spielt ein JSON-Eingabeskript (Liste von `AppIntent`s) gegen einen leeren
//! Grundriss ab und protokolliert die ausgelösten Events und das Ergebnis.

use anyhow::{bail, Context};
use floorplanner::{AppController, AppIntent, AppState, EditorEvent, EditorOptions};
use std::path::{Path, PathBuf};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Floorplanner v{} startet...", env!("CARGO_PKG_VERSION"));

    let Some(script_path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        bail!("Aufruf: floorplanner <eingabe.json>");
    };

    // Optionen aus TOML laden (oder Standardwerte)
    let options = EditorOptions::load_from_file(&EditorOptions::config_path());
    let script = load_script(&script_path)?;
    log::info!(
        "{} Eingaben aus {} geladen",
        script.len(),
        script_path.display()
    );

    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();
    controller.subscribe(|event: &EditorEvent| {
        if *event != EditorEvent::RedrawRequested {
            log::info!("Event: {:?}", event);
        }
    });

    for (index, intent) in script.into_iter().enumerate() {
        if let Err(e) = controller.handle_intent(&mut state, intent) {
            log::error!("Eingabe #{} fehlgeschlagen: {:#}", index, e);
        }
    }

    let scene = controller.build_render_scene(&state);
    log::info!(
        "Ergebnis: {} Ecken, {} Wände, {} Räume (Modus: {})",
        scene.corners.len(),
        scene.walls.len(),
        scene.rooms.len(),
        scene.mode
    );
    for room in &scene.rooms {
        log::info!(
            "Raum {} '{}': {:.2} m²",
            room.id,
            room.name,
            room.area / 10_000.0
        );
    }

    Ok(())
}

/// Liest ein Eingabeskript im JSON-Format.
fn load_script(path: &Path) -> anyhow::Result<Vec<AppIntent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Eingabe-Datei nicht lesbar: {}", path.display()))?;
    let intents = serde_json::from_str(&content)
        .with_context(|| format!("Eingabe-Datei fehlerhaft: {}", path.display()))?;
    Ok(intents)
}
