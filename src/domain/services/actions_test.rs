use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use tokio::sync::mpsc;
use tokio::time::Instant;

use super::*;
use crate::domain::models::ChatRequest;
use crate::domain::models::ClientError;
use crate::domain::models::ConversationContext;
use crate::domain::models::FormKind;
use crate::domain::models::Sport;
use crate::infrastructure::api::fake::FakeApi;

#[tokio::test]
async fn it_reports_stats_with_their_generation() -> Result<()> {
    let (_fake, api) = FakeApi::default().handle();

    let event = perform(
        &api,
        Action::LoadStats {
            sport: Sport::GirlsSoccer,
            generation: 7,
        },
    )
    .await;

    match event {
        Event::StatsLoaded {
            sport,
            generation,
            result,
        } => {
            assert_eq!(sport, Sport::GirlsSoccer);
            assert_eq!(generation, 7);
            assert_eq!(result?.completed_games.len(), 7);
        }
        _ => bail!("Wrong enum"),
    }

    return Ok(());
}

#[tokio::test(start_paused = true)]
async fn it_expires_feedback_after_the_delay() -> Result<()> {
    let (_fake, api) = FakeApi::default().handle();
    let started = Instant::now();

    let event = perform(
        &api,
        Action::ExpireFeedback {
            kind: FormKind::Note,
            seq: 3,
            delay: Duration::from_millis(3000),
        },
    )
    .await;

    assert!(started.elapsed() >= Duration::from_millis(3000));
    match event {
        Event::FeedbackExpired { kind, seq } => {
            assert_eq!(kind, FormKind::Note);
            assert_eq!(seq, 3);
        }
        _ => bail!("Wrong enum"),
    }

    return Ok(());
}

#[tokio::test]
async fn it_answers_each_action_with_an_event() -> Result<()> {
    let (fake, api) = FakeApi::default().handle();
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();

    action_tx.send(Action::ChatRequest(ChatRequest {
        message: "Who are our top scorers?".to_string(),
        context: ConversationContext::default(),
        coach_mode: false,
    }))?;
    drop(action_tx);

    ActionsService::start(api, event_tx, &mut action_rx).await?;

    match event_rx.recv().await {
        Some(Event::ChatResponded(Ok(reply))) => {
            assert_eq!(reply.response, "coach_mode=false Who are our top scorers?");
        }
        _ => bail!("Wrong enum"),
    }
    assert_eq!(fake.calls(), vec!["/api/chat".to_string()]);

    return Ok(());
}

#[tokio::test]
async fn it_reports_the_dashboard_with_its_generation() -> Result<()> {
    let (_fake, api) = FakeApi::default().handle();

    let event = perform(
        &api,
        Action::LoadDashboard {
            auth_header: "Bearer fake-token".to_string(),
            generation: 4,
        },
    )
    .await;

    match event {
        Event::DashboardLoaded { generation, result } => {
            assert_eq!(generation, 4);
            assert_eq!(result?.counts.injuries, 1);
        }
        _ => bail!("Wrong enum"),
    }

    return Ok(());
}

#[tokio::test]
async fn it_reports_chat_failures() -> Result<()> {
    let (_fake, api) = FakeApi::failing_chat().handle();

    let event = perform(
        &api,
        Action::ChatRequest(ChatRequest {
            message: "What's our record?".to_string(),
            context: ConversationContext::default(),
            coach_mode: false,
        }),
    )
    .await;

    match event {
        Event::ChatResponded(Err(err)) => {
            assert_eq!(err, ClientError::transport("/api/chat", "connection refused"));
        }
        _ => bail!("Wrong enum"),
    }

    return Ok(());
}
