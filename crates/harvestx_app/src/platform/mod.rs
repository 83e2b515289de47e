//! Terminal shell around the HarvestX core.
mod app;
mod config;
mod effects;
mod logging;
mod ui;

pub use app::run_app;

use harvestx_core::Msg;

/// Input to the shell loop, from stdin or from a delayed effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ShellEvent {
    Msg(Msg),
    Help,
    Quit,
}
