#[cfg(test)]
#[path = "stats_test.rs"]
mod tests;

use std::collections::BTreeMap;

use serde_derive::Deserialize;
use serde_derive::Serialize;
use serde_json::Value;

use super::Sport;

/// Outcome value the backend uses for a scheduled game without a result.
pub const PENDING_OUTCOME: &str = "—";

/// Number of completed games shown as recent form.
pub const RECENT_FORM_LENGTH: usize = 5;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Outcome {
    Win,
    Loss,
    Tie,
    #[default]
    Pending,
    Other(String),
}

impl From<String> for Outcome {
    fn from(text: String) -> Outcome {
        match text.as_str() {
            "W" => return Outcome::Win,
            "L" => return Outcome::Loss,
            "T" => return Outcome::Tie,
            PENDING_OUTCOME => return Outcome::Pending,
            _ => return Outcome::Other(text),
        }
    }
}

impl From<Outcome> for String {
    fn from(outcome: Outcome) -> String {
        return outcome.symbol().to_string();
    }
}

impl Outcome {
    pub fn is_played(&self) -> bool {
        return *self != Outcome::Pending;
    }

    pub fn symbol(&self) -> &str {
        match self {
            Outcome::Win => return "W",
            Outcome::Loss => return "L",
            Outcome::Tie => return "T",
            Outcome::Pending => return PENDING_OUTCOME,
            Outcome::Other(text) => return text,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Game {
    #[serde(rename = "Date", alias = "date", default)]
    pub date: String,
    #[serde(rename = "Opponent", alias = "opponent", default)]
    pub opponent: String,
    #[serde(rename = "Location", alias = "location", default)]
    pub location: String,
    #[serde(rename = "Result", alias = "result", default)]
    pub result: String,
    #[serde(rename = "Record", alias = "record", default)]
    pub record: String,
    #[serde(rename = "Outcome", alias = "outcome", default)]
    pub outcome: Outcome,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(alias = "upcoming_games", alias = "recent_games", default)]
    pub games: Vec<Game>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OverviewStats {
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub ties: u32,
    #[serde(default)]
    pub record: String,
    /// Sport specific totals such as goals, rebounds or pins.
    #[serde(flatten)]
    pub totals: BTreeMap<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SquadSize {
    #[serde(default)]
    pub total: u32,
    #[serde(flatten)]
    pub groups: BTreeMap<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub season: String,
    #[serde(default)]
    pub coach: String,
    #[serde(default)]
    pub stats: OverviewStats,
    #[serde(default)]
    pub squad_size: Option<SquadSize>,
}

/// A player row. Columns differ per sport, so everything but the name and
/// position is kept as reported.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerLine {
    #[serde(rename = "Player", alias = "player", alias = "name", default)]
    pub name: String,
    #[serde(rename = "Year/Position", alias = "position", default)]
    pub position: String,
    #[serde(flatten)]
    pub stats: BTreeMap<String, Value>,
}

impl PlayerLine {
    pub fn stat(&self, key: &str) -> Option<&Value> {
        return self.stats.get(key);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    #[serde(alias = "top_scorers", alias = "leaders", default)]
    pub players: Vec<PlayerLine>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalkeeperRoster {
    #[serde(default)]
    pub goalkeepers: Vec<PlayerLine>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonTotals {
    #[serde(default)]
    pub total_goals: i64,
    #[serde(default)]
    pub total_assists: i64,
    #[serde(default)]
    pub players: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonChange {
    #[serde(default)]
    pub goals_diff: i64,
    #[serde(default)]
    pub assists_diff: i64,
    #[serde(default)]
    pub goals_change_pct: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct YearOverYear {
    #[serde(default)]
    pub change: SeasonChange,
    /// Keyed by season label, e.g. `2025-2026`.
    #[serde(flatten)]
    pub seasons: BTreeMap<String, SeasonTotals>,
}

/// Results of the mandatory request batch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrimaryStats {
    pub overview: Overview,
    pub leaderboard: Leaderboard,
    pub all_games: Vec<Game>,
    pub upcoming_games: Vec<Game>,
}

/// Results of the best-effort batch. Either side may be missing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SecondaryStats {
    pub goalkeepers: Option<GoalkeeperRoster>,
    pub year_over_year: Option<YearOverYear>,
}

/// Everything the stats view shows for one sport. Built in one piece per load.
#[derive(Clone, Debug, PartialEq)]
pub struct SportStatsBundle {
    pub sport: Sport,
    pub overview: Overview,
    pub leaderboard: Leaderboard,
    pub all_games: Vec<Game>,
    pub upcoming_games: Vec<Game>,
    pub goalkeepers: Option<GoalkeeperRoster>,
    pub year_over_year: Option<YearOverYear>,
    pub completed_games: Vec<Game>,
    pub recent_form: Vec<Outcome>,
}

impl SportStatsBundle {
    pub fn new(sport: Sport, primary: PrimaryStats, secondary: SecondaryStats) -> SportStatsBundle {
        let completed = completed_games(&primary.all_games);
        let form = recent_form(&completed);

        return SportStatsBundle {
            sport,
            overview: primary.overview,
            leaderboard: primary.leaderboard,
            all_games: primary.all_games,
            upcoming_games: primary.upcoming_games,
            goalkeepers: secondary.goalkeepers,
            year_over_year: secondary.year_over_year,
            completed_games: completed,
            recent_form: form,
        };
    }
}

pub fn completed_games(games: &[Game]) -> Vec<Game> {
    return games
        .iter()
        .filter(|game| return game.outcome.is_played())
        .cloned()
        .collect();
}

/// Outcomes of the last completed games, oldest first.
pub fn recent_form(completed: &[Game]) -> Vec<Outcome> {
    let start = completed.len().saturating_sub(RECENT_FORM_LENGTH);
    return completed[start..]
        .iter()
        .map(|game| return game.outcome.clone())
        .collect();
}
