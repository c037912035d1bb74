use std::sync::Arc;

use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Acknowledgement;
use super::ClientError;
use super::CoachDashboard;
use super::CoachResource;
use super::ConversationContext;
use super::GoalkeeperRoster;
use super::Leaderboard;
use super::Overview;
use super::Schedule;
use super::Sport;
use super::YearOverYear;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    pub context: ConversationContext,
    pub coach_mode: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub response: String,
    #[serde(default)]
    pub context: ConversationContext,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub password: String,
    pub requested_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginReply {
    pub token: String,
    pub coach_name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ScheduleFilter {
    All,
    Upcoming,
}

/// Every endpoint of the athletics service the client consumes. Coach calls
/// take the full `Authorization` header value.
#[async_trait]
pub trait Api {
    async fn chat(&self, req: ChatRequest) -> Result<ChatReply, ClientError>;

    async fn login(&self, req: LoginRequest) -> Result<LoginReply, ClientError>;

    async fn coach_dashboard(&self, auth_header: &str) -> Result<CoachDashboard, ClientError>;

    async fn create_coach_resource(
        &self,
        auth_header: &str,
        resource: &CoachResource,
    ) -> Result<Acknowledgement, ClientError>;

    async fn overview(&self, sport: Sport) -> Result<Overview, ClientError>;

    async fn leaderboard(&self, sport: Sport) -> Result<Leaderboard, ClientError>;

    async fn schedule(&self, sport: Sport, filter: ScheduleFilter)
        -> Result<Schedule, ClientError>;

    async fn goalkeepers(&self, sport: Sport) -> Result<GoalkeeperRoster, ClientError>;

    async fn year_over_year(&self) -> Result<YearOverYear, ClientError>;
}

pub type ApiHandle = Arc<dyn Api + Send + Sync>;
