/// Failures observed at the network boundary.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The request could not be completed, or its body could not be decoded.
    #[error("could not reach {endpoint}: {reason}")]
    Transport { endpoint: String, reason: String },

    /// The backend answered with a non-success status.
    #[error("{endpoint} responded with status {status}")]
    Status { endpoint: String, status: u16 },

    /// A coach-only call was attempted without a session token.
    #[error("coach session is not signed in")]
    Unauthenticated,
}

impl ClientError {
    pub fn transport(endpoint: &str, reason: impl ToString) -> ClientError {
        return ClientError::Transport {
            endpoint: endpoint.to_string(),
            reason: reason.to_string(),
        };
    }

    pub fn status(endpoint: &str, status: u16) -> ClientError {
        return ClientError::Status {
            endpoint: endpoint.to_string(),
            status,
        };
    }
}

/// Login failures, worded for display next to the login form.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Incorrect password. Please try again.")]
    InvalidPassword,

    #[error("Unable to sign in right now ({0}).")]
    Unavailable(String),
}

impl From<ClientError> for AuthError {
    fn from(err: ClientError) -> AuthError {
        match err {
            ClientError::Status { status, .. } if status == 401 || status == 403 => {
                return AuthError::InvalidPassword;
            }
            other => return AuthError::Unavailable(other.to_string()),
        }
    }
}
