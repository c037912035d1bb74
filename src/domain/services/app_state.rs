#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;

use super::ChatSession;
use super::CoachDesk;
use super::SessionManager;
use super::StatsAggregator;
use super::ViewLoad;
use super::ViewNeeds;
use super::ViewRouter;
use crate::domain::models::bearer;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::FormKind;
use crate::domain::models::Refresh;
use crate::domain::models::Sport;
use crate::domain::models::View;

/// Every state slice of the client. Only the console loop holds it, so each
/// slice is mutated by one owner at a time.
pub struct AppState {
    pub router: ViewRouter,
    pub session: SessionManager,
    pub stats: StatsAggregator,
    pub chat: ChatSession,
    pub coach: CoachDesk,
}

impl AppState {
    pub fn new(sport: Sport, coach_name: &str, feedback_delay: Duration) -> AppState {
        return AppState {
            router: ViewRouter::default(),
            session: SessionManager::new(coach_name),
            stats: StatsAggregator::new(sport),
            chat: ChatSession::default(),
            coach: CoachDesk::new(feedback_delay),
        };
    }

    fn needs(&self) -> ViewNeeds {
        return ViewNeeds {
            stats: self.stats.needs_load(),
            dashboard: self.session.is_authenticated() && self.coach.needs_dashboard(),
        };
    }

    pub fn navigate(&mut self, to: View, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        let needs = self.needs();
        match self.router.navigate(to, needs) {
            Some(ViewLoad::Stats) => {
                self.stats.load(self.stats.sport(), tx)?;
            }
            Some(ViewLoad::Dashboard) => {
                self.coach.load_dashboard(&self.session.auth_header()?, tx)?;
            }
            None => (),
        }

        return Ok(());
    }

    /// Makes `sport` active. The stats view reloads right away, elsewhere the
    /// load waits for the next visit.
    pub fn select_sport(&mut self, sport: Sport, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        if self.router.active() == View::Stats {
            return self.stats.load(sport, tx);
        }

        self.stats.select(sport);
        return Ok(());
    }

    /// Re-runs the failed load of the active view. Returns false when there
    /// is nothing to retry.
    pub fn retry(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        match self.router.active() {
            View::Stats if self.stats.failure().is_some() => {
                self.stats.load(self.stats.sport(), tx)?;
                return Ok(true);
            }
            View::Coach
                if self.session.is_authenticated() && self.coach.dashboard_error().is_some() =>
            {
                self.coach.load_dashboard(&self.session.auth_header()?, tx)?;
                return Ok(true);
            }
            _ => return Ok(false),
        }
    }

    pub fn refresh_dashboard(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        let header = match self.session.auth_header() {
            Ok(header) => header,
            Err(_) => return Ok(false),
        };

        self.coach.load_dashboard(&header, tx)?;
        return Ok(true);
    }

    /// Coach mode follows the session at the moment of sending.
    pub fn send_chat(&mut self, text: &str, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        let coach_mode = self.session.is_authenticated();
        return self.chat.send(text, coach_mode, tx);
    }

    pub fn login(&mut self, password: &str, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        return self.session.login(password, tx);
    }

    /// True while any request is still waiting on the backend. Pending
    /// feedback timers do not count.
    pub fn is_busy(&self) -> bool {
        return self.chat.is_waiting()
            || self.stats.is_loading()
            || self.session.is_pending()
            || self.coach.is_busy();
    }

    pub fn logout(&mut self) -> Refresh {
        if !self.session.is_authenticated() {
            return Refresh::Nothing;
        }

        self.session.logout();
        self.coach.reset();
        self.router.leave_coach();

        return Refresh::Session;
    }

    /// Submits a coach form. Signed out coaches cannot write, so nothing is
    /// sent and false is returned.
    pub fn submit(&mut self, kind: FormKind, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        let header = match self.session.auth_header() {
            Ok(header) => header,
            Err(_) => return Ok(false),
        };

        return self.coach.submit(kind, self.stats.sport(), &header, tx);
    }

    /// Applies a backend result and reports which part of the screen changed.
    pub fn handle_event(
        &mut self,
        event: Event,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<Refresh> {
        match event {
            Event::Input(_) | Event::InputClosed => {
                return Ok(Refresh::Nothing);
            }
            Event::ChatResponded(result) => {
                if self.chat.complete(result) {
                    return Ok(Refresh::Transcript);
                }
            }
            Event::LoginCompleted(result) => {
                if let Ok(session) = self.session.complete_login(result) {
                    if let Some(token) = session.token() {
                        self.coach.load_dashboard(&bearer(token), tx)?;
                    }
                }

                return Ok(Refresh::Session);
            }
            Event::DashboardLoaded { generation, result } => {
                if self.coach.complete_dashboard(generation, result) {
                    return Ok(Refresh::Dashboard);
                }
            }
            Event::StatsLoaded {
                sport,
                generation,
                result,
            } => {
                if self.stats.complete(sport, generation, result) {
                    return Ok(Refresh::Stats);
                }
            }
            Event::CoachResourceSaved { kind, seq, result } => {
                let header = self.session.auth_header().ok();
                if self
                    .coach
                    .complete_submission(kind, seq, result, header.as_deref(), tx)?
                {
                    return Ok(Refresh::Feedback(kind));
                }
            }
            Event::FeedbackExpired { kind, seq } => {
                if self.coach.expire_feedback(kind, seq) {
                    return Ok(Refresh::Feedback(kind));
                }
            }
        }

        return Ok(Refresh::Nothing);
    }
}
