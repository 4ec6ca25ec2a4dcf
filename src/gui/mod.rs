mod app;
mod message;
pub mod screens;
mod state;
mod widgets;

pub use app::{GovTrackApp, run};
pub use message::Message;
pub use state::{AppState, Toast};
