pub mod app;
pub mod ui;
pub mod event;

pub use app::{Action, App, Field};
pub use event::{Event, EventHandler};
