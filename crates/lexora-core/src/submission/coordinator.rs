//! Form state plus delivery for native hosts

use super::{deliver, AckPolicy, FormSession, SubmissionStatus};
use crate::config::DeliveryConfig;
use crate::form::{Field, FormData};
use crate::transport::{FormRequest, Transport};
use crate::CoreResult;
use parking_lot::Mutex;
use url::Url;

/// Result of a submit action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission was already in flight; nothing was sent.
    Ignored,
    Settled(SubmissionStatus),
}

/// Owns one contact form and drives its delivery.
///
/// The session lock is never held across the network call, so field edits
/// stay possible while a submission is in flight.
pub struct SubmissionCoordinator<T> {
    transport: T,
    endpoint: Url,
    policy: AckPolicy,
    session: Mutex<FormSession>,
}

impl<T: Transport> SubmissionCoordinator<T> {
    pub fn new(transport: T, endpoint: Url, policy: AckPolicy) -> Self {
        Self {
            transport,
            endpoint,
            policy,
            session: Mutex::new(FormSession::new()),
        }
    }

    pub fn from_config(transport: T, config: &DeliveryConfig) -> CoreResult<Self> {
        Ok(Self::new(transport, config.endpoint_url()?, config.ack_policy))
    }

    pub fn policy(&self) -> AckPolicy {
        self.policy
    }

    pub fn status(&self) -> SubmissionStatus {
        self.session.lock().status()
    }

    pub fn form(&self) -> FormData {
        self.session.lock().data().clone()
    }

    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        self.session.lock().set_field(field, value);
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let begun = self.session.lock().begin_submit();
        let Some(snapshot) = begun else {
            tracing::debug!("submit ignored, delivery already in flight");
            return SubmitOutcome::Ignored;
        };

        let request = FormRequest::new(self.endpoint.clone(), &snapshot);
        let outcome = deliver(&self.transport, &request, self.policy).await;

        let status = self.session.lock().settle(&outcome);
        SubmitOutcome::Settled(status)
    }
}
