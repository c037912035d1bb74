/// The coach session for this client instance. Held in memory only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    pub coach_name: String,
    pub last_auth_error: Option<String>,
}

impl Session {
    pub fn token(&self) -> Option<&str> {
        return self.token.as_deref();
    }

    pub fn authenticated(&self) -> bool {
        return self.token.is_some();
    }

    /// Stores the credential issued by a successful login.
    pub fn establish(&mut self, token: &str, coach_name: &str) {
        self.token = Some(token.to_string());
        self.coach_name = coach_name.to_string();
        self.last_auth_error = None;
    }

    pub fn clear(&mut self) {
        *self = Session::default();
    }
}

/// Login form fields as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub password: String,
    pub requested_name: String,
}

pub fn bearer(token: &str) -> String {
    return format!("Bearer {token}");
}
