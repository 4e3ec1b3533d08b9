use mintdesk_common::DeskError;

#[derive(Debug, thiserror::Error)]
pub enum GithubError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout")]
    Timeout,
    #[error("Rate limited")]
    RateLimited,
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Parse error: {0}")]
    Parse(String),
}

impl GithubError {
    /// Whether a retry may succeed: network failures, timeouts and 5xx.
    pub fn is_transient(&self) -> bool {
        match self {
            GithubError::Network(_) | GithubError::Timeout => true,
            GithubError::Status { status, .. } => *status >= 500,
            GithubError::RateLimited | GithubError::Parse(_) => false,
        }
    }
}

impl From<reqwest::Error> for GithubError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GithubError::Timeout
        } else if e.is_decode() {
            GithubError::Parse(e.to_string())
        } else {
            GithubError::Network(e.to_string())
        }
    }
}

impl From<GithubError> for DeskError {
    fn from(e: GithubError) -> Self {
        DeskError::Github(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(GithubError::Timeout.to_string(), "Timeout");
        assert_eq!(GithubError::RateLimited.to_string(), "Rate limited");
        let err = GithubError::Status {
            status: 404,
            body: "Not Found".into(),
        };
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
    }

    #[test]
    fn transient_classification() {
        assert!(GithubError::Network("reset".into()).is_transient());
        assert!(GithubError::Timeout.is_transient());
        assert!(GithubError::Status {
            status: 502,
            body: String::new()
        }
        .is_transient());
        assert!(!GithubError::Status {
            status: 404,
            body: String::new()
        }
        .is_transient());
        assert!(!GithubError::RateLimited.is_transient());
        assert!(!GithubError::Parse("eof".into()).is_transient());
    }

    #[test]
    fn converts_into_desk_error() {
        let err: DeskError = GithubError::RateLimited.into();
        assert!(matches!(err, DeskError::Github(_)));
        assert_eq!(err.to_string(), "github error: Rate limited");
    }
}
