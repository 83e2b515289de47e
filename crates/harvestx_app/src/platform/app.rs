use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use harvestx_core::{update, AppState};
use harvestx_logging::{harvest_info, harvest_warn};

use super::config::{self, AppConfig};
use super::effects::EffectRunner;
use super::ui::commands::{parse_command, HELP};
use super::ui::render::render;
use super::{logging, ShellEvent};

pub fn run_app() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("resolving working directory")?;
    let (config, config_error) = match config::load_config(&cwd) {
        Ok(config) => (config.unwrap_or_default(), None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    logging::initialize(config.log_destination);
    if let Some(err) = config_error {
        harvest_warn!("Ignoring {}: {:#}", config::CONFIG_FILENAME, err);
    }
    harvest_info!("Starting HarvestX shell with {:?}", config);

    let catalog_path = config.catalog_path_in(&cwd);
    let catalog = harvestx_store::load_catalog(catalog_path.as_deref())
        .context("loading the listing catalog")?;
    let mut state = AppState::with_catalog(catalog.listings, catalog.requests)
        .with_settings(config.core_settings());

    let (event_tx, event_rx) = mpsc::channel::<ShellEvent>();
    let runner = EffectRunner::new(event_tx.clone());
    spawn_stdin_reader(event_tx);

    print_screen(&state);

    while let Ok(event) = event_rx.recv() {
        match event {
            ShellEvent::Quit => break,
            ShellEvent::Help => println!("{HELP}"),
            ShellEvent::Msg(msg) => {
                let (next, effects) = update(std::mem::take(&mut state), msg);
                state = next;
                runner.enqueue(effects);
                if state.consume_dirty() {
                    print_screen(&state);
                }
            }
        }
    }

    harvest_info!("HarvestX shell stopped");
    Ok(())
}

fn print_screen(state: &AppState) {
    for line in render(&state.view()) {
        println!("{line}");
    }
}

fn spawn_stdin_reader(event_tx: mpsc::Sender<ShellEvent>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    harvest_warn!("stdin read failed: {}", err);
                    break;
                }
            };
            match parse_command(&line) {
                Ok(event) => {
                    if event_tx.send(event).is_err() {
                        return;
                    }
                }
                Err(err) => println!("{err:#}"),
            }
        }
        let _ = event_tx.send(ShellEvent::Quit);
    });
}
