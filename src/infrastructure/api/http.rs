#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::models::Acknowledgement;
use crate::domain::models::Api;
use crate::domain::models::ChatReply;
use crate::domain::models::ChatRequest;
use crate::domain::models::ClientError;
use crate::domain::models::CoachDashboard;
use crate::domain::models::CoachResource;
use crate::domain::models::GoalkeeperRoster;
use crate::domain::models::Leaderboard;
use crate::domain::models::LoginReply;
use crate::domain::models::LoginRequest;
use crate::domain::models::Overview;
use crate::domain::models::Schedule;
use crate::domain::models::ScheduleFilter;
use crate::domain::models::Sport;
use crate::domain::models::YearOverYear;

/// REST client for the athletics service. No request timeout is set beyond
/// what the transport does by default.
pub struct HttpApi {
    url: String,
    client: reqwest::Client,
}

impl HttpApi {
    pub fn new(url: &str) -> HttpApi {
        return HttpApi {
            url: url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        };
    }

    async fn decode<T: DeserializeOwned>(
        endpoint: &str,
        res: Result<reqwest::Response, reqwest::Error>,
    ) -> Result<T, ClientError> {
        let res = match res {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(endpoint, error = ?err, "request failed");
                return Err(ClientError::transport(endpoint, err));
            }
        };

        let status = res.status();
        if !status.is_success() {
            tracing::error!(endpoint, status = status.as_u16(), "request rejected");
            return Err(ClientError::status(endpoint, status.as_u16()));
        }

        return res.json::<T>().await.map_err(|err| {
            tracing::error!(endpoint, error = ?err, "response body could not be decoded");
            return ClientError::transport(endpoint, err);
        });
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let res = self
            .client
            .get(format!("{}{path}", self.url))
            .query(query)
            .send()
            .await;

        return HttpApi::decode(path, res).await;
    }

    async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        auth_header: Option<&str>,
    ) -> Result<T, ClientError> {
        let mut req = self.client.post(format!("{}{path}", self.url)).json(body);
        if let Some(header) = auth_header {
            req = req.header(reqwest::header::AUTHORIZATION, header);
        }

        return HttpApi::decode(path, req.send().await).await;
    }
}

#[async_trait]
impl Api for HttpApi {
    #[allow(clippy::implicit_return)]
    async fn chat(&self, req: ChatRequest) -> Result<ChatReply, ClientError> {
        return self.post_json("/api/chat", &req, None).await;
    }

    #[allow(clippy::implicit_return)]
    async fn login(&self, req: LoginRequest) -> Result<LoginReply, ClientError> {
        return self.post_json("/api/auth/login", &req, None).await;
    }

    #[allow(clippy::implicit_return)]
    async fn coach_dashboard(&self, auth_header: &str) -> Result<CoachDashboard, ClientError> {
        let path = "/api/coach/dashboard";
        let res = self
            .client
            .get(format!("{}{path}", self.url))
            .header(reqwest::header::AUTHORIZATION, auth_header)
            .send()
            .await;

        return HttpApi::decode(path, res).await;
    }

    #[allow(clippy::implicit_return)]
    async fn create_coach_resource(
        &self,
        auth_header: &str,
        resource: &CoachResource,
    ) -> Result<Acknowledgement, ClientError> {
        return self
            .post_json(resource.kind().path(), resource, Some(auth_header))
            .await;
    }

    #[allow(clippy::implicit_return)]
    async fn overview(&self, sport: Sport) -> Result<Overview, ClientError> {
        return self.get_json(&format!("/api/{sport}/overview"), &[]).await;
    }

    #[allow(clippy::implicit_return)]
    async fn leaderboard(&self, sport: Sport) -> Result<Leaderboard, ClientError> {
        return self.get_json(&format!("/api/{sport}/leaderboard"), &[]).await;
    }

    #[allow(clippy::implicit_return)]
    async fn schedule(
        &self,
        sport: Sport,
        filter: ScheduleFilter,
    ) -> Result<Schedule, ClientError> {
        return self
            .get_json(
                &format!("/api/{sport}/schedule"),
                &[("filter", filter.to_string())],
            )
            .await;
    }

    #[allow(clippy::implicit_return)]
    async fn goalkeepers(&self, sport: Sport) -> Result<GoalkeeperRoster, ClientError> {
        return self.get_json(&format!("/api/{sport}/goalkeepers"), &[]).await;
    }

    #[allow(clippy::implicit_return)]
    async fn year_over_year(&self) -> Result<YearOverYear, ClientError> {
        return self
            .get_json("/api/comparison/year-over-year", &[])
            .await;
    }
}
