//! Two-phase delivery pipeline

use super::policy::{AckPolicy, Acknowledgment, DeliveryPhase};
use crate::transport::{FormRequest, RequestMode, Transport, TransportError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A submission that could not be acknowledged.
///
/// Users only ever see "submission failed"; the variants exist for logs.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionFailed {
    #[error("endpoint rejected the submission with status {status}")]
    Rejected { status: u16 },

    #[error("endpoint response could not be confirmed")]
    Unconfirmed { primary: Option<TransportError> },

    #[error("endpoint unreachable (primary: {primary}; fallback: {fallback})")]
    Unreachable {
        primary: TransportError,
        fallback: TransportError,
    },
}

pub type DeliveryOutcome = Result<Acknowledgment, SubmissionFailed>;

/// Deliver one inquiry.
///
/// 1. Send in standard mode. If it completes, the policy classifies the
///    response and that is final: a readable rejection is not retried.
/// 2. If the transport itself fails, send once more in fire-and-forget
///    mode. Completion counts as an unreadable acknowledgment when the
///    policy allows it; a second transport failure fails the submission.
///
/// Under [`AckPolicy::RequireConfirmation`] step 2 is skipped: a blind
/// fallback can never be confirmed, so a primary transport failure ends
/// as [`SubmissionFailed::Unconfirmed`] after a single request.
pub async fn deliver<T: Transport + ?Sized>(
    transport: &T,
    request: &FormRequest,
    policy: AckPolicy,
) -> DeliveryOutcome {
    let host = request.endpoint().host_str().unwrap_or_default().to_string();

    let primary = match transport.send(request, RequestMode::Standard).await {
        Ok(response) => {
            let outcome = policy.classify(response);
            match &outcome {
                Ok(ack) => tracing::info!(%host, ?ack, "inquiry delivered"),
                Err(err) => tracing::warn!(%host, %err, "inquiry not acknowledged"),
            }
            return outcome;
        }
        Err(err) => err,
    };

    tracing::warn!(%host, error = %primary, "primary delivery failed");

    if !policy.allows_blind_fallback() {
        return Err(SubmissionFailed::Unconfirmed {
            primary: Some(primary),
        });
    }

    match transport.send(request, RequestMode::FireAndForget).await {
        Ok(_) => {
            tracing::info!(%host, "inquiry sent without acknowledgment");
            Ok(Acknowledgment::Unreadable {
                phase: DeliveryPhase::Fallback,
            })
        }
        Err(fallback) => {
            tracing::error!(%host, error = %fallback, "fallback delivery failed");
            Err(SubmissionFailed::Unreachable { primary, fallback })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormData;
    use crate::submission::testing::{endpoint, inquiry, ScriptedTransport};
    use crate::transport::TransportResponse;

    fn request() -> FormRequest {
        FormRequest::new(endpoint(), &inquiry())
    }

    fn refused() -> TransportError {
        TransportError::Connect("connection refused".to_string())
    }

    #[tokio::test]
    async fn test_explicit_success_needs_one_request() {
        let transport = ScriptedTransport::new([Ok(TransportResponse::Readable { status: 200 })]);

        let outcome = deliver(&transport, &request(), AckPolicy::default()).await;
        assert_eq!(outcome, Ok(Acknowledgment::Confirmed { status: 200 }));
        assert_eq!(transport.modes(), vec![RequestMode::Standard]);
    }

    #[tokio::test]
    async fn test_opaque_primary_is_acknowledged() {
        let transport = ScriptedTransport::new([Ok(TransportResponse::Opaque)]);

        let outcome = deliver(&transport, &request(), AckPolicy::default()).await;
        assert_eq!(
            outcome,
            Ok(Acknowledgment::Unreadable {
                phase: DeliveryPhase::Primary
            })
        );
        assert_eq!(transport.modes().len(), 1);
    }

    #[tokio::test]
    async fn test_rejection_skips_fallback() {
        let transport = ScriptedTransport::new([Ok(TransportResponse::Readable { status: 500 })]);

        let outcome = deliver(&transport, &request(), AckPolicy::default()).await;
        assert_eq!(outcome, Err(SubmissionFailed::Rejected { status: 500 }));
        assert_eq!(transport.modes(), vec![RequestMode::Standard]);
    }

    #[tokio::test]
    async fn test_transport_failure_falls_back_once() {
        let transport = ScriptedTransport::new([Err(refused()), Ok(TransportResponse::Opaque)]);

        let outcome = deliver(&transport, &request(), AckPolicy::default()).await;
        assert_eq!(
            outcome,
            Ok(Acknowledgment::Unreadable {
                phase: DeliveryPhase::Fallback
            })
        );
        assert_eq!(
            transport.modes(),
            vec![RequestMode::Standard, RequestMode::FireAndForget]
        );
    }

    #[tokio::test]
    async fn test_fallback_reuses_payload() {
        let transport = ScriptedTransport::new([Err(TransportError::Timeout), Ok(TransportResponse::Opaque)]);
        let request = request();

        deliver(&transport, &request, AckPolicy::default()).await.unwrap();
        let bodies = transport.bodies();
        assert_eq!(bodies.len(), 2);
        assert_eq!(bodies[0], bodies[1]);
        assert_eq!(bodies[0], request.encode());
    }

    #[tokio::test]
    async fn test_both_attempts_failing() {
        let transport = ScriptedTransport::new([
            Err(refused()),
            Err(TransportError::Other("dns".to_string())),
        ]);

        let outcome = deliver(&transport, &request(), AckPolicy::default()).await;
        assert_eq!(
            outcome,
            Err(SubmissionFailed::Unreachable {
                primary: refused(),
                fallback: TransportError::Other("dns".to_string()),
            })
        );
        assert_eq!(transport.modes().len(), 2);
    }

    #[tokio::test]
    async fn test_strict_policy_never_sends_blind() {
        let transport = ScriptedTransport::new([Err(refused()), Ok(TransportResponse::Opaque)]);

        let outcome = deliver(&transport, &request(), AckPolicy::RequireConfirmation).await;
        assert_eq!(
            outcome,
            Err(SubmissionFailed::Unconfirmed {
                primary: Some(refused())
            })
        );
        assert_eq!(transport.modes(), vec![RequestMode::Standard]);
    }

    #[tokio::test]
    async fn test_empty_form_still_sends_every_key() {
        let transport = ScriptedTransport::new([Ok(TransportResponse::Readable { status: 200 })]);
        let request = FormRequest::new(endpoint(), &FormData::default());

        deliver(&transport, &request, AckPolicy::default()).await.unwrap();
        assert_eq!(transport.bodies(), vec!["name=&email=&phone=&message=".to_string()]);
    }
}
