pub mod actions;
mod app_state;
mod chat_session;
mod coach_desk;
pub mod events;
mod router;
mod session_manager;
mod stats_aggregator;

pub use app_state::*;
pub use chat_session::*;
pub use coach_desk::*;
pub use router::*;
pub use session_manager::*;
pub use stats_aggregator::*;
