#[cfg(test)]
#[path = "coach_desk_test.rs"]
mod tests;

use std::collections::HashMap;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Acknowledgement;
use crate::domain::models::Action;
use crate::domain::models::ClientError;
use crate::domain::models::CoachDashboard;
use crate::domain::models::CoachForm;
use crate::domain::models::FormKind;
use crate::domain::models::InjuryForm;
use crate::domain::models::NoteForm;
use crate::domain::models::ScoutingForm;
use crate::domain::models::Sport;

/// Transient message shown under a form after a submission finishes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub text: String,
    pub is_error: bool,
    pub seq: u64,
}

/// The three coach create-workflows and the dashboard they refresh.
pub struct CoachDesk {
    pub note: NoteForm,
    pub injury: InjuryForm,
    pub scouting: ScoutingForm,
    saving: HashMap<FormKind, u64>,
    submission_seq: u64,
    feedback: HashMap<FormKind, Feedback>,
    feedback_seq: u64,
    feedback_delay: Duration,
    dashboard: Option<CoachDashboard>,
    dashboard_error: Option<ClientError>,
    dashboard_loading: bool,
    dashboard_generation: u64,
}

impl CoachDesk {
    pub fn new(feedback_delay: Duration) -> CoachDesk {
        return CoachDesk {
            note: NoteForm::default(),
            injury: InjuryForm::default(),
            scouting: ScoutingForm::default(),
            saving: HashMap::new(),
            submission_seq: 0,
            feedback: HashMap::new(),
            feedback_seq: 0,
            feedback_delay,
            dashboard: None,
            dashboard_error: None,
            dashboard_loading: false,
            dashboard_generation: 0,
        };
    }

    pub fn form(&self, kind: FormKind) -> &dyn CoachForm {
        match kind {
            FormKind::Note => return &self.note,
            FormKind::Injury => return &self.injury,
            FormKind::Scouting => return &self.scouting,
        }
    }

    fn form_mut(&mut self, kind: FormKind) -> &mut dyn CoachForm {
        match kind {
            FormKind::Note => return &mut self.note,
            FormKind::Injury => return &mut self.injury,
            FormKind::Scouting => return &mut self.scouting,
        }
    }

    pub fn is_saving(&self, kind: FormKind) -> bool {
        return self.saving.contains_key(&kind);
    }

    pub fn feedback(&self, kind: FormKind) -> Option<&Feedback> {
        return self.feedback.get(&kind);
    }

    pub fn dashboard(&self) -> Option<&CoachDashboard> {
        return self.dashboard.as_ref();
    }

    pub fn dashboard_error(&self) -> Option<&ClientError> {
        return self.dashboard_error.as_ref();
    }

    pub fn is_dashboard_loading(&self) -> bool {
        return self.dashboard_loading;
    }

    pub fn dashboard_generation(&self) -> u64 {
        return self.dashboard_generation;
    }

    /// True while a dashboard load or any submission is in flight.
    pub fn is_busy(&self) -> bool {
        return self.dashboard_loading || !self.saving.is_empty();
    }

    pub fn needs_dashboard(&self) -> bool {
        return self.dashboard.is_none() && !self.dashboard_loading && self.dashboard_error.is_none();
    }

    pub fn load_dashboard(
        &mut self,
        auth_header: &str,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<()> {
        self.dashboard_generation += 1;
        self.dashboard_loading = true;
        self.dashboard_error = None;
        tx.send(Action::LoadDashboard {
            auth_header: auth_header.to_string(),
            generation: self.dashboard_generation,
        })?;

        return Ok(());
    }

    /// Replaces the cached dashboard wholesale. Only the most recently issued
    /// load is applied. Older loads and ones landing after a logout are dropped.
    pub fn complete_dashboard(
        &mut self,
        generation: u64,
        result: Result<CoachDashboard, ClientError>,
    ) -> bool {
        if !self.dashboard_loading || generation != self.dashboard_generation {
            tracing::debug!(
                generation,
                current = self.dashboard_generation,
                "discarding stale coach dashboard"
            );
            return false;
        }
        self.dashboard_loading = false;

        match result {
            Ok(dashboard) => {
                self.dashboard = Some(dashboard);
            }
            Err(err) => {
                tracing::error!(error = %err, "coach dashboard load failed");
                self.dashboard_error = Some(err);
            }
        }

        return true;
    }

    /// Validates and sends one form. Returns false with no request made when
    /// a required field is blank or the same form is already saving.
    pub fn submit(
        &mut self,
        kind: FormKind,
        sport: Sport,
        auth_header: &str,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<bool> {
        if self.saving.contains_key(&kind) {
            return Ok(false);
        }

        let resource = match self.form(kind).to_resource(sport) {
            Some(resource) => resource,
            None => return Ok(false),
        };

        tracing::debug!(form = %kind, sport = %sport, "submitting coach form");
        self.submission_seq += 1;
        self.saving.insert(kind, self.submission_seq);
        tx.send(Action::SubmitCoachResource {
            auth_header: auth_header.to_string(),
            resource,
            seq: self.submission_seq,
        })?;

        return Ok(true);
    }

    /// Applies a finished submission stamped `seq`. Results for a submission
    /// that is no longer the one saving are dropped. On success the form is
    /// cleared and the dashboard is fetched again with `auth_header`, when
    /// still signed in.
    pub fn complete_submission(
        &mut self,
        kind: FormKind,
        seq: u64,
        result: Result<Acknowledgement, ClientError>,
        auth_header: Option<&str>,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<bool> {
        if self.saving.get(&kind) != Some(&seq) {
            tracing::debug!(form = %kind, seq, "discarding stale coach form result");
            return Ok(false);
        }
        self.saving.remove(&kind);

        match result {
            Ok(_) => {
                self.form_mut(kind).clear();
                self.show_feedback(kind, &format!("{} saved.", kind.label()), false, tx)?;
                if let Some(header) = auth_header {
                    self.load_dashboard(header, tx)?;
                }
            }
            Err(err) => {
                tracing::error!(form = %kind, error = %err, "coach form submission failed");
                let text = format!("Error saving {}: {err}", kind.label().to_lowercase());
                self.show_feedback(kind, &text, true, tx)?;
            }
        }

        return Ok(true);
    }

    fn show_feedback(
        &mut self,
        kind: FormKind,
        text: &str,
        is_error: bool,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<()> {
        self.feedback_seq += 1;
        self.feedback.insert(
            kind,
            Feedback {
                text: text.to_string(),
                is_error,
                seq: self.feedback_seq,
            },
        );

        tx.send(Action::ExpireFeedback {
            kind,
            seq: self.feedback_seq,
            delay: self.feedback_delay,
        })?;

        return Ok(());
    }

    /// Clears the feedback stamped `seq` if it is still on display.
    pub fn expire_feedback(&mut self, kind: FormKind, seq: u64) -> bool {
        let current = self.feedback.get(&kind).map(|e| return e.seq);
        if current != Some(seq) {
            return false;
        }

        self.feedback.remove(&kind);
        return true;
    }

    /// Forgets everything tied to the signed in coach. Typed form input is kept.
    pub fn reset(&mut self) {
        self.saving.clear();
        self.feedback.clear();
        self.dashboard = None;
        self.dashboard_error = None;
        self.dashboard_loading = false;
        self.dashboard_generation += 1;
    }
}
