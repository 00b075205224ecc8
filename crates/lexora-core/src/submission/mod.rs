//! Contact form submission
//!
//! [`FormSession`] is the state machine of one mounted form. [`deliver`]
//! runs the two-phase delivery protocol against a [`Transport`]. The
//! [`SubmissionCoordinator`] glues them together for native callers; the
//! site does the same with reactive signals and a server function.
//!
//! [`Transport`]: crate::transport::Transport

mod delivery;
mod policy;

#[cfg(feature = "runtime")]
mod coordinator;

#[cfg(test)]
pub(crate) mod testing;

pub use delivery::{deliver, DeliveryOutcome, SubmissionFailed};
pub use policy::{AckPolicy, Acknowledgment, DeliveryPhase};

#[cfg(feature = "runtime")]
pub use coordinator::{SubmissionCoordinator, SubmitOutcome};

use crate::form::{Field, FormData};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    /// Submit is disabled only while a delivery is in flight.
    pub fn accepts_submit(&self) -> bool {
        !matches!(self, SubmissionStatus::Submitting)
    }
}

/// Field values and submission status of one contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSession {
    data: FormData,
    status: SubmissionStatus,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Record one edit. Status is unaffected.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.data.set(field, value);
    }

    /// Enter `Submitting` and hand back the values to deliver.
    ///
    /// Returns `None` when a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<FormData> {
        if !self.status.accepts_submit() {
            return None;
        }
        self.status = SubmissionStatus::Submitting;
        Some(self.data.clone())
    }

    /// Apply the result of the in-flight delivery.
    pub fn settle(&mut self, outcome: &DeliveryOutcome) -> SubmissionStatus {
        match outcome {
            Ok(_) => self.succeed(),
            Err(_) => self.fail(),
        }
    }

    /// Delivery acknowledged: clear every field at once.
    pub fn succeed(&mut self) -> SubmissionStatus {
        if self.status == SubmissionStatus::Submitting {
            self.data.clear();
            self.status = SubmissionStatus::Success;
        } else {
            tracing::debug!(status = ?self.status, "ignoring success with no submission in flight");
        }
        self.status
    }

    /// Delivery failed: keep the values so the user can resubmit.
    pub fn fail(&mut self) -> SubmissionStatus {
        if self.status == SubmissionStatus::Submitting {
            self.status = SubmissionStatus::Error;
        } else {
            tracing::debug!(status = ?self.status, "ignoring failure with no submission in flight");
        }
        self.status
    }
}
