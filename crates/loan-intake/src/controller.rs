//! Form lifecycle state machine: owns the draft, orchestrates validation
//! before submission, and tracks the request lifecycle so invalid
//! combinations (in-flight *and* settled, for instance) cannot be
//! represented.

use tracing::info;

use crate::form::{validate, ApplicationForm, FieldErrorMap, FormField};
use crate::submission::{
    Decision, DecisionPayload, LoanOffer, NormalizedPayload, PayloadError, SubmissionClient,
    SubmissionError,
};

/// Lifecycle of a single application draft.
#[derive(Debug, Clone, PartialEq)]
pub enum ControllerState {
    Idle,
    /// Synchronous transient inside the submit trigger; observable only
    /// if validation itself is interrupted, which it never is.
    Validating,
    Submitting,
    Settled(SubmissionOutcome),
}

/// Terminal result of a submission attempt. Exactly one outcome is
/// current at a time; each new attempt supersedes the previous one.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Approved {
        credit_lines: u32,
        offer: Option<LoanOffer>,
    },
    Denied {
        credit_lines: u32,
        reason: Option<String>,
    },
    Failed {
        message: String,
    },
}

impl From<DecisionPayload> for SubmissionOutcome {
    fn from(payload: DecisionPayload) -> Self {
        match payload.decision {
            Decision::Approved => SubmissionOutcome::Approved {
                credit_lines: payload.credit_lines,
                offer: payload.offer,
            },
            Decision::Denied => SubmissionOutcome::Denied {
                credit_lines: payload.credit_lines,
                reason: payload.reason,
            },
        }
    }
}

/// Why a submit trigger did not start a request.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    AlreadySubmitting,
    #[error("the form failed validation")]
    Invalid,
    #[error(transparent)]
    Payload(#[from] PayloadError),
}

/// Handle for one in-flight attempt. Carries the frozen payload and the
/// generation it was issued under, so a resolution arriving after a
/// reset identifies itself as stale.
#[derive(Debug, Clone)]
pub struct SubmissionTicket {
    payload: NormalizedPayload,
    generation: u64,
}

impl SubmissionTicket {
    pub fn payload(&self) -> &NormalizedPayload {
        &self.payload
    }
}

/// What `resolve` did with a settled request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// The controller was reset (or already settled) after the ticket
    /// was issued; the result is dropped instead of resurrecting stale
    /// state.
    DiscardedStale,
}

/// Owns the draft, its error map, and the submission lifecycle. One
/// controller per form instance; at most one request in flight.
pub struct ApplicationController {
    client: SubmissionClient,
    form: ApplicationForm,
    errors: FieldErrorMap,
    state: ControllerState,
    generation: u64,
}

impl ApplicationController {
    pub fn new(client: SubmissionClient) -> Self {
        Self {
            client,
            form: ApplicationForm::default(),
            errors: FieldErrorMap::default(),
            state: ControllerState::Idle,
            generation: 0,
        }
    }

    pub fn form(&self) -> &ApplicationForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrorMap {
        &self.errors
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// True while a request is in flight; the submit affordance must be
    /// disabled whenever this holds.
    pub fn is_submitting(&self) -> bool {
        matches!(self.state, ControllerState::Submitting)
    }

    /// Update one field of the draft. Accepted in every state; during an
    /// in-flight submission the edit simply feeds the *next* attempt.
    /// Clears any error entry for the edited field without re-validating.
    pub fn edit(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set_field(field, value);
        self.errors.clear_field(field);
    }

    /// Run validation and, if the draft is clean, freeze a payload and
    /// move to `Submitting`. On validation failure the error map is
    /// exposed and the state returns to `Idle`; no request is started.
    pub fn begin_submit(&mut self) -> Result<SubmissionTicket, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::AlreadySubmitting);
        }

        self.state = ControllerState::Validating;
        self.errors = validate(&self.form);
        if !self.errors.is_empty() {
            self.state = ControllerState::Idle;
            return Err(SubmitError::Invalid);
        }

        let payload = match NormalizedPayload::from_form(&self.form) {
            Ok(payload) => payload,
            Err(err) => {
                self.state = ControllerState::Idle;
                return Err(SubmitError::Payload(err));
            }
        };

        self.state = ControllerState::Submitting;
        Ok(SubmissionTicket {
            payload,
            generation: self.generation,
        })
    }

    /// Apply the result of an attempt started by [`begin_submit`]. Stale
    /// tickets (issued before a reset, or for a request that already
    /// settled) are discarded without touching current state.
    pub fn resolve(
        &mut self,
        ticket: &SubmissionTicket,
        result: Result<DecisionPayload, SubmissionError>,
    ) -> Resolution {
        if ticket.generation != self.generation || !self.is_submitting() {
            info!("discarding stale submission result");
            return Resolution::DiscardedStale;
        }

        self.state = ControllerState::Settled(outcome_from(result));
        Resolution::Applied
    }

    /// Validate, submit, and settle in one call. Holding `&mut self`
    /// across the await means no edit or reset can interleave here; the
    /// `begin_submit`/`resolve` pair is the surface for event loops that
    /// need that interleaving.
    pub async fn submit(&mut self) -> Result<SubmissionOutcome, SubmitError> {
        let ticket = self.begin_submit()?;
        let result = self.client.submit(ticket.payload()).await;
        let outcome = outcome_from(result);
        self.state = ControllerState::Settled(outcome.clone());
        Ok(outcome)
    }

    /// Clear the draft, errors, and outcome, returning to `Idle`. Bumps
    /// the generation so any still-pending resolution is discarded.
    pub fn reset(&mut self) {
        self.form.clear();
        self.errors.clear();
        self.state = ControllerState::Idle;
        self.generation = self.generation.wrapping_add(1);
    }
}

fn outcome_from(result: Result<DecisionPayload, SubmissionError>) -> SubmissionOutcome {
    match result {
        Ok(decision) => SubmissionOutcome::from(decision),
        Err(err) => SubmissionOutcome::Failed {
            message: err.message,
        },
    }
}
