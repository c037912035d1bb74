#[cfg(test)]
#[path = "coach_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;
use strum::EnumIter;

use super::Outcome;
use super::PlayerLine;
use super::Sport;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum FormKind {
    Note,
    Injury,
    Scouting,
}

impl FormKind {
    pub fn path(&self) -> &'static str {
        match self {
            FormKind::Note => return "/api/coach/notes",
            FormKind::Injury => return "/api/coach/injuries",
            FormKind::Scouting => return "/api/coach/scouting",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormKind::Note => return "Note",
            FormKind::Injury => return "Injury report",
            FormKind::Scouting => return "Scouting report",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardCounts {
    pub injuries: u32,
    pub scouting_reports: u32,
    pub notes: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InjuryEntry {
    #[serde(alias = "player_name")]
    pub player: String,
    #[serde(alias = "injury_type")]
    pub description: String,
    #[serde(alias = "expected_return")]
    pub expected_return: Option<String>,
    pub sport: Option<String>,
}

/// Coach portal summary. Replaced by a fresh fetch after every successful write.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoachDashboard {
    pub counts: DashboardCounts,
    pub recent_form: Vec<Outcome>,
    pub active_injuries: Vec<InjuryEntry>,
    pub top_performers: Vec<PlayerLine>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Acknowledgement {
    pub id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotePayload {
    pub text: String,
    pub category: String,
    pub sport: Sport,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InjuryPayload {
    pub player: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_return: Option<String>,
    pub sport: Sport,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoutingPayload {
    pub opponent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strengths: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weaknesses: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_players: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tactical_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_plan: Option<String>,
    pub sport: Sport,
}

/// A validated write bound for one of the coach endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CoachResource {
    Note(NotePayload),
    Injury(InjuryPayload),
    Scouting(ScoutingPayload),
}

impl CoachResource {
    pub fn kind(&self) -> FormKind {
        match self {
            CoachResource::Note(_) => return FormKind::Note,
            CoachResource::Injury(_) => return FormKind::Injury,
            CoachResource::Scouting(_) => return FormKind::Scouting,
        }
    }
}

/// Input fields of one coach create-workflow.
pub trait CoachForm {
    fn kind(&self) -> FormKind;

    /// Returns `None` while a required field is blank.
    fn to_resource(&self, sport: Sport) -> Option<CoachResource>;

    fn clear(&mut self);
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    return Some(trimmed.to_string());
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoteForm {
    pub text: String,
    pub category: String,
}

impl CoachForm for NoteForm {
    fn kind(&self) -> FormKind {
        return FormKind::Note;
    }

    fn to_resource(&self, sport: Sport) -> Option<CoachResource> {
        let text = non_blank(&self.text)?;
        let category = non_blank(&self.category).unwrap_or_else(|| return "general".to_string());

        return Some(CoachResource::Note(NotePayload {
            text,
            category,
            sport,
        }));
    }

    fn clear(&mut self) {
        *self = NoteForm::default();
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InjuryForm {
    pub player: String,
    pub description: String,
    pub expected_return: String,
}

impl CoachForm for InjuryForm {
    fn kind(&self) -> FormKind {
        return FormKind::Injury;
    }

    fn to_resource(&self, sport: Sport) -> Option<CoachResource> {
        let player = non_blank(&self.player)?;
        let description = non_blank(&self.description)?;

        return Some(CoachResource::Injury(InjuryPayload {
            player,
            description,
            expected_return: non_blank(&self.expected_return),
            sport,
        }));
    }

    fn clear(&mut self) {
        *self = InjuryForm::default();
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoutingForm {
    pub opponent: String,
    pub strengths: String,
    pub weaknesses: String,
    pub key_players: String,
    pub tactical_notes: String,
    pub game_plan: String,
}

impl CoachForm for ScoutingForm {
    fn kind(&self) -> FormKind {
        return FormKind::Scouting;
    }

    fn to_resource(&self, sport: Sport) -> Option<CoachResource> {
        let opponent = non_blank(&self.opponent)?;

        return Some(CoachResource::Scouting(ScoutingPayload {
            opponent,
            strengths: non_blank(&self.strengths),
            weaknesses: non_blank(&self.weaknesses),
            key_players: non_blank(&self.key_players),
            tactical_notes: non_blank(&self.tactical_notes),
            game_plan: non_blank(&self.game_plan),
            sport,
        }));
    }

    fn clear(&mut self) {
        *self = ScoutingForm::default();
    }
}
