use thiserror::Error;

/// Everything that can go wrong talking to the waitlist server.
///
/// `NotFound` is a normal branch for lookups (it drives the visitor into
/// registration) and for position fetches (the user is not ranked yet).
/// `BadRequest` carries the server's validation message so forms can show
/// it verbatim. `Transport` covers timeouts, 5xx and network loss;
/// `Decode` a response body that does not match the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("not found")]
    NotFound,
    #[error("{0}")]
    BadRequest(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("malformed server response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-2xx response. `message` is the body's `message`
    /// field when the server sent one.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            404 => ApiError::NotFound,
            400 => ApiError::BadRequest(
                message.unwrap_or_else(|| "Request rejected by the server".to_string()),
            ),
            _ => ApiError::Transport(match message {
                Some(msg) => format!("status {status}: {msg}"),
                None => format!("status {status}"),
            }),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_404_is_not_found() {
        assert_eq!(ApiError::from_status(404, None), ApiError::NotFound);
        assert!(ApiError::from_status(404, Some("User not found".into())).is_not_found());
    }

    #[test]
    fn status_400_keeps_the_server_message() {
        let err = ApiError::from_status(400, Some("Invalid referral code".into()));
        assert_eq!(err, ApiError::BadRequest("Invalid referral code".into()));
        assert_eq!(err.to_string(), "Invalid referral code");
    }

    #[test]
    fn status_400_without_a_body_gets_a_generic_message() {
        let err = ApiError::from_status(400, None);
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn other_statuses_are_transport_failures() {
        for status in [500, 502, 503] {
            assert!(matches!(
                ApiError::from_status(status, None),
                ApiError::Transport(_)
            ));
        }
    }
}
