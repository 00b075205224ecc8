//! Acknowledgment policy

use super::delivery::SubmissionFailed;
use crate::transport::TransportResponse;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which delivery attempt produced an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryPhase {
    Primary,
    Fallback,
}

/// Why a submission counts as received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Acknowledgment {
    /// The endpoint answered with a readable 2xx status.
    Confirmed { status: u16 },
    /// The request completed but nothing could be read back.
    Unreadable { phase: DeliveryPhase },
}

/// How responses whose status cannot be read are treated.
///
/// The collection endpoint is a cross-origin script deployment that often
/// hides its status. `OptimisticOnUnreadable` ("optimistic acknowledgment
/// on unreadable response") counts those as received and allows the blind
/// fire-and-forget fallback. `RequireConfirmation` only accepts a readable
/// 2xx, which also makes the fallback pointless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AckPolicy {
    #[default]
    OptimisticOnUnreadable,
    RequireConfirmation,
}

impl AckPolicy {
    /// Classify the response of a completed primary attempt.
    pub fn classify(&self, response: TransportResponse) -> Result<Acknowledgment, SubmissionFailed> {
        match response {
            TransportResponse::Readable { status } if response.is_success() => {
                Ok(Acknowledgment::Confirmed { status })
            }
            TransportResponse::Readable { status } => Err(SubmissionFailed::Rejected { status }),
            TransportResponse::Opaque => match self {
                AckPolicy::OptimisticOnUnreadable => Ok(Acknowledgment::Unreadable {
                    phase: DeliveryPhase::Primary,
                }),
                AckPolicy::RequireConfirmation => {
                    Err(SubmissionFailed::Unconfirmed { primary: None })
                }
            },
        }
    }

    /// Whether a fallback whose response is never read may count as success.
    pub fn allows_blind_fallback(&self) -> bool {
        matches!(self, AckPolicy::OptimisticOnUnreadable)
    }
}

impl fmt::Display for AckPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AckPolicy::OptimisticOnUnreadable => f.write_str("optimistic-on-unreadable"),
            AckPolicy::RequireConfirmation => f.write_str("require-confirmation"),
        }
    }
}

impl FromStr for AckPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "optimistic" | "optimistic-on-unreadable" => Ok(AckPolicy::OptimisticOnUnreadable),
            "strict" | "require-confirmation" => Ok(AckPolicy::RequireConfirmation),
            other => Err(format!("unknown acknowledgment policy: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readable_success_is_confirmed() {
        for policy in [AckPolicy::OptimisticOnUnreadable, AckPolicy::RequireConfirmation] {
            let ack = policy.classify(TransportResponse::Readable { status: 200 }).unwrap();
            assert_eq!(ack, Acknowledgment::Confirmed { status: 200 });
        }
    }

    #[test]
    fn test_readable_failure_is_rejected() {
        let err = AckPolicy::default()
            .classify(TransportResponse::Readable { status: 403 })
            .unwrap_err();
        assert_eq!(err, SubmissionFailed::Rejected { status: 403 });
    }

    #[test]
    fn test_opaque_depends_on_policy() {
        let ack = AckPolicy::OptimisticOnUnreadable
            .classify(TransportResponse::Opaque)
            .unwrap();
        assert_eq!(ack, Acknowledgment::Unreadable { phase: DeliveryPhase::Primary });

        assert!(AckPolicy::RequireConfirmation
            .classify(TransportResponse::Opaque)
            .is_err());
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("optimistic".parse::<AckPolicy>(), Ok(AckPolicy::OptimisticOnUnreadable));
        assert_eq!(" Strict ".parse::<AckPolicy>(), Ok(AckPolicy::RequireConfirmation));
        for policy in [AckPolicy::OptimisticOnUnreadable, AckPolicy::RequireConfirmation] {
            assert_eq!(policy.to_string().parse::<AckPolicy>(), Ok(policy));
        }
        assert!("sometimes".parse::<AckPolicy>().is_err());
    }
}
