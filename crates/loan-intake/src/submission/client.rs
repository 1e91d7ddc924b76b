//! HTTP client for the loan decision endpoint.

use std::time::Duration;

use tracing::debug;
use url::Url;

use super::classifier::{classify, SubmissionFailure, TransportCode};
use super::payload::{DecisionPayload, NormalizedPayload};

/// Connection settings injected at construction so tests can point the
/// client anywhere deterministic.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// e.g. `http://localhost:8080`; a trailing slash is tolerated.
    pub base_url: String,
    /// e.g. `api/loan-applications/apply`; a leading slash is tolerated.
    pub endpoint: String,
    pub timeout_secs: u64,
}

/// Failure to construct the client from its configuration.
#[derive(Debug, thiserror::Error)]
pub enum ClientBuildError {
    #[error("invalid decision endpoint URL {value:?}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to initialize HTTP client")]
    Http(#[source] reqwest::Error),
}

/// The single error type raised by [`SubmissionClient::submit`]. Carries
/// only the classified, display-ready message; the raw transport failure
/// is logged, never re-exposed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SubmissionError {
    pub message: String,
}

/// One-shot submitter for normalized application payloads. No retry and
/// no cancellation: each call is a single POST that runs to completion.
#[derive(Debug, Clone)]
pub struct SubmissionClient {
    http: reqwest::Client,
    url: Url,
}

impl SubmissionClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientBuildError> {
        let joined = format!(
            "{}/{}",
            config.base_url.trim_end_matches('/'),
            config.endpoint.trim_start_matches('/')
        );
        let url = Url::parse(&joined).map_err(|source| ClientBuildError::InvalidUrl {
            value: joined,
            source,
        })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ClientBuildError::Http)?;

        Ok(Self { http, url })
    }

    /// The resolved decision endpoint after slash normalization.
    pub fn endpoint_url(&self) -> &Url {
        &self.url
    }

    /// Submit a normalized payload and return the decoded decision
    /// unchanged. Any failure comes back as one classified message.
    pub async fn submit(
        &self,
        payload: &NormalizedPayload,
    ) -> Result<DecisionPayload, SubmissionError> {
        debug!(url = %self.url, "submitting loan application");

        let response = match self.http.post(self.url.clone()).json(payload).send().await {
            Ok(response) => response,
            Err(err) => return Err(classified(transport_failure(&err))),
        };

        let status = response.status();
        if !status.is_success() {
            let server_message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("message")
                        .and_then(serde_json::Value::as_str)
                        .map(str::to_string)
                });
            return Err(classified(SubmissionFailure {
                status: Some(status.as_u16()),
                code: None,
                server_message,
            }));
        }

        match response.json::<DecisionPayload>().await {
            Ok(decision) => Ok(decision),
            Err(err) => {
                // A malformed success body still carries the status it
                // arrived with, so it classifies as unexpected rather
                // than as a network failure.
                let mut failure = transport_failure(&err);
                failure.status.get_or_insert(status.as_u16());
                Err(classified(failure))
            }
        }
    }
}

fn classified(failure: SubmissionFailure) -> SubmissionError {
    SubmissionError {
        message: classify(&failure),
    }
}

fn transport_failure(err: &reqwest::Error) -> SubmissionFailure {
    let code = if err.is_timeout() {
        TransportCode::TimedOut
    } else if err.is_connect() {
        TransportCode::ConnectionFailed
    } else {
        TransportCode::Other
    };

    SubmissionFailure {
        status: err.status().map(|status| status.as_u16()),
        code: Some(code),
        server_message: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str, endpoint: &str) -> SubmissionClient {
        SubmissionClient::new(&ClientConfig {
            base_url: base_url.to_string(),
            endpoint: endpoint.to_string(),
            timeout_secs: 5,
        })
        .expect("client builds")
    }

    #[test]
    fn joining_normalizes_to_exactly_one_separator() {
        let expected = "http://localhost:8080/api/loan-applications/apply";
        for (base, endpoint) in [
            ("http://localhost:8080", "api/loan-applications/apply"),
            ("http://localhost:8080/", "api/loan-applications/apply"),
            ("http://localhost:8080", "/api/loan-applications/apply"),
            ("http://localhost:8080/", "/api/loan-applications/apply"),
        ] {
            assert_eq!(client(base, endpoint).endpoint_url().as_str(), expected);
        }
    }

    #[test]
    fn accepts_an_https_decision_service() {
        let client = client("https://decisions.example.com/", "api/loan-applications/apply");
        let url = client.endpoint_url();
        assert_eq!(url.scheme(), "https");
        assert_eq!(
            url.as_str(),
            "https://decisions.example.com/api/loan-applications/apply"
        );
    }

    #[test]
    fn rejects_an_unparseable_base_url() {
        let result = SubmissionClient::new(&ClientConfig {
            base_url: "not a url".to_string(),
            endpoint: "apply".to_string(),
            timeout_secs: 5,
        });
        assert!(matches!(result, Err(ClientBuildError::InvalidUrl { .. })));
    }
}
