#[cfg(test)]
#[path = "render_test.rs"]
mod tests;

use serde_json::Value;

use crate::domain::models::FormKind;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::models::Outcome;
use crate::domain::models::PlayerLine;
use crate::domain::models::Refresh;
use crate::domain::models::View;
use crate::domain::services::AppState;
use crate::domain::services::CoachDesk;
use crate::domain::services::SessionManager;
use crate::domain::services::StatsAggregator;

/// How the console should color a block of text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Assistant,
    Success,
    Error,
    Muted,
}

fn stat_text(value: &Value) -> String {
    match value {
        Value::String(text) => return text.to_string(),
        other => return other.to_string(),
    }
}

fn player_line(player: &PlayerLine) -> String {
    let mut line = format!("  {}", player.name);
    if !player.position.is_empty() {
        line = format!("{line} ({})", player.position);
    }

    let stats = player
        .stats
        .iter()
        .map(|(key, value)| return format!("{key} {}", stat_text(value)))
        .collect::<Vec<String>>();
    if !stats.is_empty() {
        line = format!("{line} {}", stats.join(", "));
    }

    return line;
}

fn form_line(form: &[Outcome]) -> String {
    if form.is_empty() {
        return "none yet".to_string();
    }

    return form
        .iter()
        .map(|e| return e.symbol().to_string())
        .collect::<Vec<String>>()
        .join(" ");
}

pub fn message(msg: &Message) -> String {
    return format!("{}: {}", msg.role.to_string(), msg.content);
}

pub fn suggestions(items: &[&str]) -> String {
    let mut lines = vec!["Try asking:".to_string()];
    for item in items {
        lines.push(format!("- {item}"));
    }

    return lines.join("\n");
}

pub fn landing() -> String {
    let text = r#"
Edison Eagles Athletics
Stats, schedules and the team assistant for every Eagles program.

/view stats to browse numbers, /view chat to ask the assistant, /view coach for the coach portal.
Type /help for every command.
        "#;

    return text.trim().to_string();
}

pub fn stats(stats: &StatsAggregator) -> String {
    let label = stats.sport().label();
    if stats.is_loading() {
        return format!("Loading {label} stats...");
    }
    if let Some(err) = stats.failure() {
        return format!("Could not load {label} stats: {err}\nType /retry to try again.");
    }

    let bundle = match stats.bundle() {
        Some(bundle) => bundle,
        None => return format!("No {label} stats loaded yet."),
    };

    let overview = &bundle.overview;
    let mut lines = vec![format!("{label} {}", overview.season).trim().to_string()];
    if !overview.coach.is_empty() {
        lines.push(format!("Coach: {}", overview.coach));
    }
    lines.push(format!(
        "Record: {} ({} games played)",
        overview.stats.record, overview.stats.games_played
    ));
    lines.push(format!("Recent form: {}", form_line(&bundle.recent_form)));
    lines.push(format!("Completed games: {}", bundle.completed_games.len()));

    if !bundle.leaderboard.players.is_empty() {
        lines.push("Leaders:".to_string());
        lines.extend(bundle.leaderboard.players.iter().map(player_line));
    }

    if !bundle.upcoming_games.is_empty() {
        lines.push("Upcoming:".to_string());
        lines.extend(bundle.upcoming_games.iter().map(|game| {
            return format!("  {} vs {} ({})", game.date, game.opponent, game.location);
        }));
    }

    if let Some(roster) = &bundle.goalkeepers {
        if !roster.goalkeepers.is_empty() {
            lines.push("Goalkeepers:".to_string());
            lines.extend(roster.goalkeepers.iter().map(player_line));
        }
    }

    if let Some(yoy) = &bundle.year_over_year {
        lines.push(format!(
            "Goals vs last season: {:+} ({:+.1}%)",
            yoy.change.goals_diff, yoy.change.goals_change_pct
        ));
    }

    return lines.join("\n");
}

pub fn session(manager: &SessionManager) -> String {
    let session = manager.session();
    if session.authenticated() {
        return format!("Signed in as {}.", session.coach_name);
    }
    if let Some(err) = &session.last_auth_error {
        return err.to_string();
    }

    return "Signed out.".to_string();
}

pub fn dashboard(desk: &CoachDesk, manager: &SessionManager) -> String {
    if !manager.is_authenticated() {
        return "Sign in with /login PASSWORD to open the coach portal.".to_string();
    }
    if desk.is_dashboard_loading() {
        return "Loading coach dashboard...".to_string();
    }
    if let Some(err) = desk.dashboard_error() {
        return format!("Could not load the coach dashboard: {err}\nType /retry to try again.");
    }

    let dashboard = match desk.dashboard() {
        Some(dashboard) => dashboard,
        None => return "Type /dashboard to load the coach dashboard.".to_string(),
    };

    let mut lines = vec![
        format!("Coach portal: {}", manager.session().coach_name),
        format!(
            "Injuries: {}  Scouting reports: {}  Notes: {}",
            dashboard.counts.injuries, dashboard.counts.scouting_reports, dashboard.counts.notes
        ),
        format!("Recent form: {}", form_line(&dashboard.recent_form)),
    ];

    if !dashboard.active_injuries.is_empty() {
        lines.push("Active injuries:".to_string());
        lines.extend(dashboard.active_injuries.iter().map(|injury| {
            let mut line = format!("  {}: {}", injury.player, injury.description);
            if let Some(back) = &injury.expected_return {
                line = format!("{line} (back {back})");
            }
            return line;
        }));
    }

    if !dashboard.top_performers.is_empty() {
        lines.push("Top performers:".to_string());
        lines.extend(dashboard.top_performers.iter().map(player_line));
    }

    return lines.join("\n");
}

/// Full content of the active view, printed after navigation.
pub fn view(app: &AppState) -> (Tone, String) {
    match app.router.active() {
        View::Landing => return (Tone::Plain, landing()),
        View::Stats => return (Tone::Plain, stats(&app.stats)),
        View::Coach => return (Tone::Plain, dashboard(&app.coach, &app.session)),
        View::Chat => {
            let messages = app.chat.messages();
            if messages.is_empty() {
                return (Tone::Muted, suggestions(app.chat.suggestions()));
            }

            let transcript = messages.iter().map(message).collect::<Vec<String>>();
            return (Tone::Plain, transcript.join("\n\n"));
        }
    }
}

fn feedback(app: &AppState, kind: FormKind) -> Option<(Tone, String)> {
    let feedback = app.coach.feedback(kind)?;
    if feedback.is_error {
        return Some((Tone::Error, feedback.text.to_string()));
    }

    return Some((Tone::Success, feedback.text.to_string()));
}

/// Text to print after an applied event, if the change is visible.
pub fn refresh(app: &AppState, refresh: Refresh) -> Option<(Tone, String)> {
    match refresh {
        Refresh::Nothing => return None,
        Refresh::Transcript => {
            let last = app.chat.messages().last()?;
            if last.message_type() == MessageType::Error {
                return Some((Tone::Error, message(last)));
            }
            return Some((Tone::Assistant, message(last)));
        }
        Refresh::Session => {
            if app.session.is_authenticated() {
                return Some((Tone::Success, session(&app.session)));
            }
            return Some((Tone::Error, session(&app.session)));
        }
        Refresh::Stats if app.router.active() == View::Stats => {
            return Some((Tone::Plain, stats(&app.stats)));
        }
        Refresh::Dashboard if app.router.active() == View::Coach => {
            return Some((Tone::Plain, dashboard(&app.coach, &app.session)));
        }
        Refresh::Feedback(kind) => return feedback(app, kind),
        _ => return None,
    }
}
