//! Maps transport/response failures to a single user-facing message.

use tracing::error;

/// Transport-level failure category observed by the submission client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportCode {
    TimedOut,
    ConnectionFailed,
    Other,
}

/// A failed decision-service call, reduced to the facts classification
/// needs: the HTTP status (if a response arrived), the transport failure
/// category (if the request never completed), and any message the server
/// chose to send back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionFailure {
    pub status: Option<u16>,
    pub code: Option<TransportCode>,
    pub server_message: Option<String>,
}

const INVALID_DATA: &str =
    "Your application contains invalid data. Please review and try again.";
const UNAUTHORIZED: &str = "You're not authorized to perform this action.";
const NOT_FOUND: &str = "Requested resource not found.";
const SERVER_ERROR: &str = "Server error occurred. Please try again later.";
const TIMED_OUT: &str = "Request timed out. Please check your connection.";
const NO_RESPONSE: &str = "Network error — unable to connect to the server.";
const UNEXPECTED: &str = "Unexpected error occurred. Please try again.";

type Predicate = fn(&SubmissionFailure) -> bool;

/// Precedence order is load-bearing: evaluated top to bottom, first match
/// wins. A server-supplied message outranks all of these and is handled
/// before the table is consulted.
const RULES: &[(Predicate, &str)] = &[
    (|f| f.status == Some(400), INVALID_DATA),
    (|f| f.status == Some(401), UNAUTHORIZED),
    (|f| f.status == Some(404), NOT_FOUND),
    (|f| f.status == Some(500), SERVER_ERROR),
    (|f| f.code == Some(TransportCode::TimedOut), TIMED_OUT),
    (|f| f.status.is_none(), NO_RESPONSE),
];

/// Classify a failed call into one display-ready string. The raw failure
/// is logged before classification returns; this function never panics.
pub fn classify(failure: &SubmissionFailure) -> String {
    error!(
        status = ?failure.status,
        code = ?failure.code,
        server_message = ?failure.server_message,
        "decision service call failed"
    );

    if let Some(message) = &failure.server_message {
        return message.clone();
    }

    for (applies, message) in RULES {
        if applies(failure) {
            return (*message).to_string();
        }
    }

    UNEXPECTED.to_string()
}
