//! level-picker - a terminal picker for building model levels
//!
//! Opens a building model document export, collects its level elements,
//! and lets the user pick one from a modal dialog. The chosen level is
//! printed to stdout; the exit code reports the outcome.

mod action;
mod app;
mod component;
mod components;
mod config;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::model::SelectionOutcome;
use crate::tui::Tui;
use anyhow::{bail, Context, Result};
use crossterm::event::Event;
use std::path::PathBuf;
use std::time::Duration;

fn main() -> Result<()> {
    let mut config = Config::load().unwrap_or_default();
    let document_path = resolve_document_path(&config)?;

    // Host concerns: an unreadable document is an error, not an outcome
    let document = services::load_document(&document_path)
        .with_context(|| "could not open the building model document")?;

    // Remember the document for the next run
    config.document_path = document_path.display().to_string();
    let _ = config.save();

    let mut app = App::new(&document, &document_path, config.preselect_last);

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(100));
    tui.enter()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal before reporting anything
    tui.exit()?;
    result?;

    let outcome = app.into_outcome();
    match &outcome {
        SelectionOutcome::Succeeded(level) => {
            println!("{}\t{}\t{}", level.id, level.name, level.elevation);
        }
        SelectionOutcome::Cancelled => {}
        SelectionOutcome::Failed(reason) => {
            eprintln!("Error: {}", reason);
        }
    }

    std::process::exit(outcome.exit_code());
}

/// Document path from argv, falling back to the last opened document
fn resolve_document_path(config: &Config) -> Result<PathBuf> {
    if let Some(arg) = std::env::args().nth(1) {
        return Ok(PathBuf::from(arg));
    }

    if !config.document_path.is_empty() {
        return Ok(PathBuf::from(&config.document_path));
    }

    bail!("usage: level-picker <document.json>");
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                eprintln!("Draw error: {}", e);
            }
        })?;

        // Poll for events
        if let Some(event) = tui.next_event()? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Process the action
            if let Some(action) = action {
                // Action might produce a follow-up action
                let mut current_action = Some(action);
                while let Some(a) = current_action {
                    current_action = app.update(a)?;
                }
            }
        } else {
            // No event - send a tick for time-based updates
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
