#[cfg(test)]
#[path = "slash_commands_test.rs"]
mod tests;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /view (/v) [landing,stats,chat,coach] - Switches the active view. Entering stats or coach loads their data the first time.
- /sport (/s) [SPORT] - Switches the active sport and reloads its stats.
- /retry (/r) - Retries a failed stats or dashboard load.
- /login [PASSWORD] - Signs in to the coach portal.
- /logout - Signs out of the coach portal.
- /dashboard (/d) - Refreshes the coach dashboard.
- /note (/n) [CATEGORY |] TEXT - Saves a coach note.
- /injury (/i) PLAYER | DESCRIPTION [| EXPECTED_RETURN] - Saves an injury report.
- /scout OPPONENT [| STRENGTHS | WEAKNESSES | KEY_PLAYERS | TACTICAL_NOTES | GAME_PLAN] - Saves a scouting report.
- /quit /exit (/q) - Exit.
- /help (/h) - Provides this help menu.

Anything else you type is sent to the team assistant. Signed in coaches get answers that include coach-only data.
        "#;

    return text.trim().to_string();
}

pub struct SlashCommand {
    command: String,
    pub args: Vec<String>,
    rest: String,
}

impl SlashCommand {
    pub fn parse(text: &str) -> Option<SlashCommand> {
        let mut args = text
            .trim()
            .split(' ')
            .filter(|e| return !e.is_empty())
            .map(|e| return e.to_string())
            .collect::<Vec<String>>();
        if args.is_empty() {
            return None;
        }

        let prefix = args[0].to_string();
        args.remove(0);

        // Everything after the single space that ends the command, untouched.
        let rest = match text.trim_start().split_once(' ') {
            Some((_, rest)) => rest.to_string(),
            None => "".to_string(),
        };

        let cmd = SlashCommand {
            command: prefix,
            args,
            rest,
        };
        if cmd.is_quit()
            || cmd.is_help()
            || cmd.is_view()
            || cmd.is_sport()
            || cmd.is_retry()
            || cmd.is_login()
            || cmd.is_logout()
            || cmd.is_dashboard()
            || cmd.is_note()
            || cmd.is_injury()
            || cmd.is_scout()
        {
            return Some(cmd);
        }

        return None;
    }

    /// Arguments joined back together and split on `|`, for the form commands.
    pub fn fields(&self) -> Vec<String> {
        if self.args.is_empty() {
            return vec![];
        }

        return self
            .args
            .join(" ")
            .split('|')
            .map(|e| return e.trim().to_string())
            .collect();
    }

    /// The raw text after the command, with its spacing kept.
    pub fn rest(&self) -> &str {
        return &self.rest;
    }

    pub fn first_arg(&self) -> Option<&str> {
        return self.args.first().map(|e| return e.as_str());
    }

    pub fn is_quit(&self) -> bool {
        return ["/q", "/quit", "/exit"].contains(&self.command.as_str());
    }

    pub fn is_help(&self) -> bool {
        return ["/h", "/help"].contains(&self.command.as_str());
    }

    pub fn is_view(&self) -> bool {
        return ["/v", "/view"].contains(&self.command.as_str());
    }

    pub fn is_sport(&self) -> bool {
        return ["/s", "/sport"].contains(&self.command.as_str());
    }

    pub fn is_retry(&self) -> bool {
        return ["/r", "/retry"].contains(&self.command.as_str());
    }

    pub fn is_login(&self) -> bool {
        return self.command == "/login";
    }

    pub fn is_logout(&self) -> bool {
        return self.command == "/logout";
    }

    pub fn is_dashboard(&self) -> bool {
        return ["/d", "/dashboard"].contains(&self.command.as_str());
    }

    pub fn is_note(&self) -> bool {
        return ["/n", "/note"].contains(&self.command.as_str());
    }

    pub fn is_injury(&self) -> bool {
        return ["/i", "/injury"].contains(&self.command.as_str());
    }

    pub fn is_scout(&self) -> bool {
        return self.command == "/scout";
    }
}
