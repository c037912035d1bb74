#[cfg(test)]
#[path = "console_test.rs"]
mod tests;

use anyhow::Result;
use owo_colors::OwoColorize;
use owo_colors::Stream;
use strum::VariantNames;
use tokio::io::BufReader;
use tokio::sync::mpsc;

use super::render;
use super::render::Tone;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::help_text;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::FormKind;
use crate::domain::models::SlashCommand;
use crate::domain::models::Sport;
use crate::domain::models::View;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;

/// What the loop should do after a line of input.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Quit,
    Print(Tone, String),
    Nothing,
}

fn hint(text: &str) -> Flow {
    return Flow::Print(Tone::Muted, text.to_string());
}

fn field(fields: &[String], idx: usize) -> String {
    return fields.get(idx).cloned().unwrap_or_default();
}

fn fill_form(app: &mut AppState, kind: FormKind, fields: &[String]) {
    match kind {
        FormKind::Note => {
            if fields.len() > 1 {
                app.coach.note.category = field(fields, 0);
                app.coach.note.text = fields[1..].join(" | ");
            } else {
                app.coach.note.text = field(fields, 0);
            }
        }
        FormKind::Injury => {
            app.coach.injury.player = field(fields, 0);
            app.coach.injury.description = field(fields, 1);
            app.coach.injury.expected_return = field(fields, 2);
        }
        FormKind::Scouting => {
            app.coach.scouting.opponent = field(fields, 0);
            app.coach.scouting.strengths = field(fields, 1);
            app.coach.scouting.weaknesses = field(fields, 2);
            app.coach.scouting.key_players = field(fields, 3);
            app.coach.scouting.tactical_notes = field(fields, 4);
            app.coach.scouting.game_plan = field(fields, 5);
        }
    }
}

fn submit_form(
    app: &mut AppState,
    kind: FormKind,
    fields: &[String],
    tx: &mpsc::UnboundedSender<Action>,
) -> Result<Flow> {
    if !app.session.is_authenticated() {
        return Ok(hint("Sign in with /login PASSWORD before saving coach records."));
    }
    if app.coach.is_saving(kind) {
        return Ok(hint(&format!("{} is still saving.", kind.label())));
    }

    // An empty command resubmits whatever the form still holds.
    if !fields.is_empty() {
        fill_form(app, kind, fields);
    }

    if app.submit(kind, tx)? {
        return Ok(hint(&format!("Saving {}...", kind.label().to_lowercase())));
    }

    return Ok(hint(&format!(
        "{} is missing a required field. Type /help for the format.",
        kind.label()
    )));
}

/// Applies one typed line to the app state.
pub fn handle_input(
    app: &mut AppState,
    text: &str,
    tx: &mpsc::UnboundedSender<Action>,
) -> Result<Flow> {
    let cmd = match SlashCommand::parse(text) {
        Some(cmd) => cmd,
        None => {
            if app.send_chat(text, tx)? {
                return Ok(Flow::Nothing);
            }
            if app.chat.is_waiting() {
                return Ok(hint("Still waiting on the last answer."));
            }
            return Ok(Flow::Nothing);
        }
    };

    if cmd.is_quit() {
        return Ok(Flow::Quit);
    }

    if cmd.is_help() {
        return Ok(Flow::Print(Tone::Plain, help_text()));
    }

    if cmd.is_view() {
        let view = match cmd.first_arg().and_then(View::parse) {
            Some(view) => view,
            None => return Ok(hint("Usage: /view landing|stats|chat|coach")),
        };
        app.navigate(view, tx)?;
        let (tone, body) = render::view(app);
        return Ok(Flow::Print(tone, body));
    }

    if cmd.is_sport() {
        let sport = match cmd.first_arg().and_then(Sport::parse) {
            Some(sport) => sport,
            None => {
                return Ok(hint(&format!("Usage: /sport {}", Sport::VARIANTS.join("|"))));
            }
        };
        app.select_sport(sport, tx)?;
        if app.router.active() == View::Stats {
            return Ok(Flow::Print(Tone::Plain, render::stats(&app.stats)));
        }
        return Ok(hint(&format!("Sport set to {}.", sport.label())));
    }

    if cmd.is_retry() {
        if app.retry(tx)? {
            return Ok(hint("Retrying..."));
        }
        return Ok(hint("Nothing to retry."));
    }

    if cmd.is_login() {
        if app.session.is_authenticated() {
            return Ok(Flow::Print(Tone::Success, render::session(&app.session)));
        }
        if app.login(cmd.rest(), tx)? {
            return Ok(hint("Signing in..."));
        }
        if app.session.is_pending() {
            return Ok(hint("Already signing in."));
        }
        return Ok(hint("Usage: /login PASSWORD"));
    }

    if cmd.is_logout() {
        app.logout();
        return Ok(Flow::Print(Tone::Plain, render::session(&app.session)));
    }

    if cmd.is_dashboard() {
        if app.refresh_dashboard(tx)? {
            return Ok(hint("Loading coach dashboard..."));
        }
        return Ok(hint("Sign in with /login PASSWORD to open the coach portal."));
    }

    if cmd.is_note() {
        return submit_form(app, FormKind::Note, &cmd.fields(), tx);
    }

    if cmd.is_injury() {
        return submit_form(app, FormKind::Injury, &cmd.fields(), tx);
    }

    if cmd.is_scout() {
        return submit_form(app, FormKind::Scouting, &cmd.fields(), tx);
    }

    return Ok(Flow::Nothing);
}

fn paint(tone: Tone, text: &str) -> String {
    match tone {
        Tone::Plain => return text.to_string(),
        Tone::Assistant => {
            return text
                .if_supports_color(Stream::Stdout, |e| return e.cyan())
                .to_string();
        }
        Tone::Success => {
            return text
                .if_supports_color(Stream::Stdout, |e| return e.green())
                .to_string();
        }
        Tone::Error => {
            return text
                .if_supports_color(Stream::Stdout, |e| return e.red())
                .to_string();
        }
        Tone::Muted => {
            return text
                .if_supports_color(Stream::Stdout, |e| return e.dimmed())
                .to_string();
        }
    }
}

fn print(tone: Tone, text: &str) {
    println!("{}\n", paint(tone, text));
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut app = AppState::new(
        Config::sport()?,
        &Config::get(ConfigKey::CoachName),
        Config::feedback_timeout()?,
    );
    let mut events = EventsService::new(BufReader::new(tokio::io::stdin()), rx);

    print(Tone::Plain, &render::landing());

    while let Some(event) = events.next().await? {
        match event {
            Event::Input(line) => match handle_input(&mut app, &line, &tx)? {
                Flow::Quit => break,
                Flow::Print(tone, text) => print(tone, &text),
                Flow::Nothing => (),
            },
            Event::InputClosed => tracing::debug!("input closed"),
            event => {
                let refresh = app.handle_event(event, &tx)?;
                if let Some((tone, text)) = render::refresh(&app, refresh) {
                    print(tone, &text);
                }
            }
        }

        // Piped input ends before its replies arrive; wait them out.
        if !events.is_input_open() && !app.is_busy() {
            break;
        }
    }

    return Ok(());
}
