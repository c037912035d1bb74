mod action;
mod api;
mod coach;
mod error;
mod event;
mod message;
mod session;
mod slash_commands;
mod sport;
mod stats;
mod view;

pub use action::*;
pub use api::*;
pub use coach::*;
pub use error::*;
pub use event::*;
pub use message::*;
pub use session::*;
pub use slash_commands::*;
pub use sport::*;
pub use stats::*;
pub use view::*;
