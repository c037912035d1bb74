use super::Acknowledgement;
use super::ChatReply;
use super::ClientError;
use super::CoachDashboard;
use super::FormKind;
use super::LoginReply;
use super::Sport;
use super::SportStatsBundle;

#[derive(Debug)]
pub enum Event {
    Input(String),
    /// Standard input reached end of file.
    InputClosed,
    ChatResponded(Result<ChatReply, ClientError>),
    LoginCompleted(Result<LoginReply, ClientError>),
    DashboardLoaded {
        generation: u64,
        result: Result<CoachDashboard, ClientError>,
    },
    StatsLoaded {
        sport: Sport,
        generation: u64,
        result: Result<SportStatsBundle, ClientError>,
    },
    CoachResourceSaved {
        kind: FormKind,
        seq: u64,
        result: Result<Acknowledgement, ClientError>,
    },
    FeedbackExpired {
        kind: FormKind,
        seq: u64,
    },
}

/// Which part of the screen an applied event changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Refresh {
    Nothing,
    Transcript,
    Session,
    Stats,
    Dashboard,
    Feedback(FormKind),
}
