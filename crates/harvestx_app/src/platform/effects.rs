use std::sync::mpsc;
use std::thread;

use harvestx_core::{Effect, Msg, Severity};
use harvestx_logging::{harvest_debug, harvest_info, harvest_warn};

use super::ui::render::render_notification;
use super::ShellEvent;

/// Executes effects returned by `update`. Delayed navigation is fed back
/// into the shell loop through `msg_tx`.
pub struct EffectRunner {
    msg_tx: mpsc::Sender<ShellEvent>,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<ShellEvent>) -> Self {
        Self { msg_tx }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Notify(notification) => {
                    match notification.severity {
                        Severity::Info => harvest_info!(
                            "Notify {}: {}",
                            notification.title,
                            notification.description
                        ),
                        Severity::Destructive => harvest_warn!(
                            "Notify {}: {}",
                            notification.title,
                            notification.description
                        ),
                    }
                    println!("{}", render_notification(&notification));
                }
                Effect::NavigateAfter { view, delay } => {
                    harvest_debug!("Scheduling navigation to {} in {:?}", view, delay);
                    let msg_tx = self.msg_tx.clone();
                    thread::spawn(move || {
                        thread::sleep(delay);
                        // The receiver is gone once the shell has quit.
                        let _ = msg_tx.send(ShellEvent::Msg(Msg::Navigate(view)));
                    });
                }
            }
        }
    }
}
