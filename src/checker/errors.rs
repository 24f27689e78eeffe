// Standard library
use std::time::Duration;

// 3rd party crates
use thiserror::Error;

/// Failure to obtain a status code from an endpoint.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("HTTP client error: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("request timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    #[error("connection failed: {message}")]
    Connect { url: String, message: String },

    #[error("request failed: {message}")]
    Request { url: String, message: String },
}

impl CheckError {
    /// Classifies a reqwest failure for `url`.
    pub fn from_reqwest(url: &str, timeout: Duration, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            CheckError::Timeout {
                url: url.to_string(),
                timeout,
            }
        } else if error.is_connect() {
            CheckError::Connect {
                url: url.to_string(),
                message: describe(&error),
            }
        } else {
            CheckError::Request {
                url: url.to_string(),
                message: describe(&error),
            }
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            CheckError::ClientBuild(_) => None,
            CheckError::Timeout { url, .. }
            | CheckError::Connect { url, .. }
            | CheckError::Request { url, .. } => Some(url),
        }
    }
}

/// Flattens an error and its sources into `outer: inner: root`.
fn describe(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Layer(&'static str, Option<Box<Layer>>);

    impl std::fmt::Display for Layer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.0)
        }
    }

    impl std::error::Error for Layer {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            self.1
                .as_deref()
                .map(|e| e as &(dyn std::error::Error + 'static))
        }
    }

    #[test]
    fn describe_joins_source_chain() {
        let error = Layer(
            "error sending request",
            Some(Box::new(Layer(
                "client error (Connect)",
                Some(Box::new(Layer("Connection refused", None))),
            ))),
        );
        assert_eq!(
            describe(&error),
            "error sending request: client error (Connect): Connection refused"
        );
    }

    #[test]
    fn describe_skips_repeated_causes() {
        let error = Layer(
            "dns error: no record found",
            Some(Box::new(Layer("no record found", None))),
        );
        assert_eq!(describe(&error), "dns error: no record found");
    }

    #[test]
    fn timeout_message_names_the_limit() {
        let error = CheckError::Timeout {
            url: "http://lb/service1".into(),
            timeout: Duration::from_secs(5),
        };
        assert_eq!(error.to_string(), "request timed out after 5s");
        assert_eq!(error.url(), Some("http://lb/service1"));
    }
}
