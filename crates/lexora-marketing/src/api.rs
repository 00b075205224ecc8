//! Server functions

use leptos::*;
use lexora_core::{DeliveryOutcome, FormData};

/// Relay one contact-form inquiry to the collection endpoint.
///
/// The outer `Result` only fails when the relay itself is broken; the
/// delivery verdict travels inside it.
#[server(SubmitInquiry, "/api")]
pub async fn submit_inquiry(inquiry: FormData) -> Result<DeliveryOutcome, ServerFnError> {
    use crate::state::SiteState;

    let site = use_context::<SiteState>()
        .ok_or_else(|| ServerFnError::<server_fn::error::NoCustomError>::ServerError("inquiry delivery is not configured".into()))?;

    Ok(site.relay(&inquiry).await)
}
