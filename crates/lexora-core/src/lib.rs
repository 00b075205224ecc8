//! Lexora Core - interactive logic behind the marketing site
//!
//! This crate holds everything the site does beyond markup: the showcase
//! slideshow and its auto-advance timer, the contact form record, and the
//! two-phase delivery of inquiries to the external form endpoint. It has no
//! UI framework dependency so the same types run in the browser, on the
//! server, and in tests.

pub mod config;
pub mod form;
pub mod slideshow;
pub mod submission;
pub mod transport;

use thiserror::Error;

pub use config::{DeliveryConfig, SlideshowConfig};
pub use form::{Field, FormData};
pub use slideshow::{Slide, Slideshow, SlideshowState, DEFAULT_SLIDE_INTERVAL, SHOWCASE_SLIDES};
pub use submission::{
    deliver, AckPolicy, Acknowledgment, DeliveryOutcome, DeliveryPhase, FormSession,
    SubmissionFailed, SubmissionStatus,
};
pub use transport::{FormRequest, RequestMode, Transport, TransportError, TransportResponse};

#[cfg(feature = "runtime")]
pub use slideshow::{AutoAdvance, SlideshowController};
#[cfg(feature = "runtime")]
pub use submission::{SubmissionCoordinator, SubmitOutcome};
#[cfg(feature = "runtime")]
pub use transport::HttpTransport;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("slideshow needs at least one slide")]
    EmptySlideshow,

    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[cfg(feature = "runtime")]
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;
