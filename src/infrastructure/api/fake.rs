use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use test_utils::dashboard_fixture;
use test_utils::goalkeepers_fixture;
use test_utils::leaderboard_fixture;
use test_utils::overview_fixture;
use test_utils::schedule_fixture;
use test_utils::upcoming_fixture;
use test_utils::year_over_year_fixture;

use crate::domain::models::Acknowledgement;
use crate::domain::models::Api;
use crate::domain::models::ApiHandle;
use crate::domain::models::ChatReply;
use crate::domain::models::ChatRequest;
use crate::domain::models::ClientError;
use crate::domain::models::CoachDashboard;
use crate::domain::models::CoachResource;
use crate::domain::models::ConversationContext;
use crate::domain::models::GoalkeeperRoster;
use crate::domain::models::Leaderboard;
use crate::domain::models::LoginReply;
use crate::domain::models::LoginRequest;
use crate::domain::models::Overview;
use crate::domain::models::Schedule;
use crate::domain::models::ScheduleFilter;
use crate::domain::models::Sport;
use crate::domain::models::YearOverYear;

pub const FAKE_PASSWORD: &str = "eagles2026";
pub const FAKE_TOKEN: &str = "fake-token";

fn fixture<T: DeserializeOwned>(endpoint: &str, body: &str) -> Result<T, ClientError> {
    return serde_json::from_str(body).map_err(|err| return ClientError::transport(endpoint, err));
}

/// In-memory backend used by service tests. Every call is recorded by path.
#[derive(Default)]
pub struct FakeApi {
    pub fail_chat: bool,
    pub fail_primary: bool,
    pub fail_secondary: bool,
    pub fail_writes: bool,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn failing_chat() -> FakeApi {
        return FakeApi {
            fail_chat: true,
            ..FakeApi::default()
        };
    }

    pub fn failing_primary() -> FakeApi {
        return FakeApi {
            fail_primary: true,
            ..FakeApi::default()
        };
    }

    pub fn failing_secondary() -> FakeApi {
        return FakeApi {
            fail_secondary: true,
            ..FakeApi::default()
        };
    }

    pub fn failing_writes() -> FakeApi {
        return FakeApi {
            fail_writes: true,
            ..FakeApi::default()
        };
    }

    pub fn handle(self) -> (Arc<FakeApi>, ApiHandle) {
        let fake = Arc::new(self);
        let handle: ApiHandle = fake.clone();
        return (fake, handle);
    }

    pub fn calls(&self) -> Vec<String> {
        return self.calls.lock().unwrap().clone();
    }

    pub fn count(&self, path: &str) -> usize {
        return self.calls().iter().filter(|e| return *e == path).count();
    }

    fn record(&self, path: &str) {
        self.calls.lock().unwrap().push(path.to_string());
    }

    fn authorize(&self, endpoint: &str, auth_header: &str) -> Result<(), ClientError> {
        if auth_header != format!("Bearer {FAKE_TOKEN}") {
            return Err(ClientError::status(endpoint, 401));
        }

        return Ok(());
    }
}

#[async_trait]
impl Api for FakeApi {
    async fn chat(&self, req: ChatRequest) -> Result<ChatReply, ClientError> {
        self.record("/api/chat");
        if self.fail_chat {
            return Err(ClientError::transport("/api/chat", "connection refused"));
        }

        let mut history = match req.context.as_value() {
            Value::Array(items) => items.clone(),
            _ => vec![],
        };
        history.push(Value::String(req.message.to_string()));

        return Ok(ChatReply {
            response: format!("coach_mode={} {}", req.coach_mode, req.message),
            context: ConversationContext::new(Value::Array(history)),
        });
    }

    async fn login(&self, req: LoginRequest) -> Result<LoginReply, ClientError> {
        self.record("/api/auth/login");
        if req.password != FAKE_PASSWORD {
            return Err(ClientError::status("/api/auth/login", 401));
        }

        return Ok(LoginReply {
            token: FAKE_TOKEN.to_string(),
            coach_name: req.requested_name,
        });
    }

    async fn coach_dashboard(&self, auth_header: &str) -> Result<CoachDashboard, ClientError> {
        self.record("/api/coach/dashboard");
        self.authorize("/api/coach/dashboard", auth_header)?;

        return fixture("/api/coach/dashboard", dashboard_fixture());
    }

    async fn create_coach_resource(
        &self,
        auth_header: &str,
        resource: &CoachResource,
    ) -> Result<Acknowledgement, ClientError> {
        let path = resource.kind().path();
        self.record(path);
        self.authorize(path, auth_header)?;
        if self.fail_writes {
            return Err(ClientError::status(path, 500));
        }

        return Ok(Acknowledgement {
            id: Some("1".to_string()),
        });
    }

    async fn overview(&self, sport: Sport) -> Result<Overview, ClientError> {
        let path = format!("/api/{sport}/overview");
        self.record(&path);
        if self.fail_primary {
            return Err(ClientError::status(&path, 500));
        }

        return fixture(&path, overview_fixture());
    }

    async fn leaderboard(&self, sport: Sport) -> Result<Leaderboard, ClientError> {
        let path = format!("/api/{sport}/leaderboard");
        self.record(&path);

        return fixture(&path, leaderboard_fixture());
    }

    async fn schedule(
        &self,
        sport: Sport,
        filter: ScheduleFilter,
    ) -> Result<Schedule, ClientError> {
        let path = format!("/api/{sport}/schedule?filter={filter}");
        self.record(&path);

        match filter {
            ScheduleFilter::All => return fixture(&path, schedule_fixture()),
            ScheduleFilter::Upcoming => return fixture(&path, upcoming_fixture()),
        }
    }

    async fn goalkeepers(&self, sport: Sport) -> Result<GoalkeeperRoster, ClientError> {
        let path = format!("/api/{sport}/goalkeepers");
        self.record(&path);
        if self.fail_secondary {
            return Err(ClientError::status(&path, 404));
        }

        return fixture(&path, goalkeepers_fixture());
    }

    async fn year_over_year(&self) -> Result<YearOverYear, ClientError> {
        let path = "/api/comparison/year-over-year";
        self.record(path);
        if self.fail_secondary {
            return Err(ClientError::transport(path, "connection reset"));
        }

        return fixture(path, year_over_year_fixture());
    }
}
