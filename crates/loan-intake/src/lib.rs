//! Client-side intake pipeline for loan applications.
//!
//! The pipeline runs user input through field validation, normalizes the
//! draft into a wire payload, submits it to the external decision service,
//! and classifies any failure into a single user-facing message. The
//! [`controller::ApplicationController`] state machine ties the stages
//! together and guarantees at most one request in flight per form.

pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod submission;
pub mod telemetry;

pub use controller::{
    ApplicationController, ControllerState, Resolution, SubmissionOutcome, SubmissionTicket,
    SubmitError,
};
pub use error::AppError;
pub use form::{validate, ApplicationForm, FieldErrorMap, FormField};
pub use submission::{
    ClientConfig, Decision, DecisionPayload, LoanOffer, NormalizedPayload, SubmissionClient,
    SubmissionError,
};
