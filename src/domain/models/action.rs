use std::time::Duration;

use super::ChatRequest;
use super::CoachResource;
use super::FormKind;
use super::LoginRequest;
use super::Sport;

/// Work orders for the actions service. Each one is run by its own worker and
/// answered with an `Event`.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    ChatRequest(ChatRequest),
    Login(LoginRequest),
    LoadDashboard {
        auth_header: String,
        generation: u64,
    },
    LoadStats {
        sport: Sport,
        generation: u64,
    },
    SubmitCoachResource {
        auth_header: String,
        resource: CoachResource,
        seq: u64,
    },
    ExpireFeedback {
        kind: FormKind,
        seq: u64,
        delay: Duration,
    },
}
