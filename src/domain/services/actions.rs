#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::time;

use super::StatsAggregator;
use crate::domain::models::Action;
use crate::domain::models::ApiHandle;
use crate::domain::models::Event;

/// Carries out one action and returns the event describing its outcome.
pub async fn perform(api: &ApiHandle, action: Action) -> Event {
    match action {
        Action::ChatRequest(req) => {
            return Event::ChatResponded(api.chat(req).await);
        }
        Action::Login(req) => {
            return Event::LoginCompleted(api.login(req).await);
        }
        Action::LoadDashboard {
            auth_header,
            generation,
        } => {
            let result = api.coach_dashboard(&auth_header).await;
            return Event::DashboardLoaded { generation, result };
        }
        Action::LoadStats { sport, generation } => {
            let result = StatsAggregator::fetch(api.as_ref(), sport).await;
            return Event::StatsLoaded {
                sport,
                generation,
                result,
            };
        }
        Action::SubmitCoachResource {
            auth_header,
            resource,
            seq,
        } => {
            let result = api.create_coach_resource(&auth_header, &resource).await;
            return Event::CoachResourceSaved {
                kind: resource.kind(),
                seq,
                result,
            };
        }
        Action::ExpireFeedback { kind, seq, delay } => {
            time::sleep(delay).await;
            return Event::FeedbackExpired { kind, seq };
        }
    }
}

pub struct ActionsService {}

impl ActionsService {
    /// Runs every action on its own worker so slow requests never hold up
    /// others. Returns once the action channel closes.
    pub async fn start(
        api: ApiHandle,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        while let Some(action) = rx.recv().await {
            let worker_api = api.clone();
            let worker_tx = tx.clone();

            tokio::spawn(async move {
                let event = perform(&worker_api, action).await;
                if worker_tx.send(event).is_err() {
                    tracing::debug!("event receiver closed, dropping result");
                }
            });
        }

        return Ok(());
    }
}
