//! Outbound submission pipeline: payload construction, the HTTP client,
//! and failure classification.

pub mod classifier;
pub mod client;
pub mod payload;

pub use classifier::{classify, SubmissionFailure, TransportCode};
pub use client::{ClientBuildError, ClientConfig, SubmissionClient, SubmissionError};
pub use payload::{Decision, DecisionPayload, LoanOffer, NormalizedPayload, PayloadError};
