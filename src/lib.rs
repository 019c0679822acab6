//! Portfolio Contact Relay - the contact form pipeline of the portfolio site.
//!
//! A visitor's message travels from the form ([`submission`]) to
//! `POST /api/contact` ([`server`]), is validated ([`domain`]), rendered
//! ([`template`]) and forwarded to a transactional email provider
//! ([`client`]). Nothing is stored unless an archive is configured
//! ([`repositories`]).
//!
//! # Architecture
//!
//! - **config**: Configuration loaded once from environment variables
//! - **domain**: Validated value objects (contact message, email address)
//! - **models**: Provider and archive wire formats
//! - **template**: Subject and HTML body of the notification email
//! - **client**: Email provider HTTP client
//! - **repositories**: Optional message archive
//! - **services**: The relay pipeline
//! - **server**: axum router and handlers
//! - **submission**: Browser-side submission handler and status banner
//! - **metrics**: Counters for provider calls and relay outcomes

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;
pub mod submission;
pub mod template;

pub use client::{AsyncEmailProvider, AsyncEmailProviderImpl, EmailProviderClient};
pub use config::Config;
pub use domain::{ContactMessage, ContactSubmission, EmailAddress, ValidationError};
pub use error::{
    ArchiveError, ConfigError, ProviderError, RelayError, SubmitError, GENERIC_SEND_ERROR,
};
pub use metrics::{HttpTimer, Metrics, MetricsSummary, RelayOutcome};
pub use models::{ArchivedMessage, SendEmailRequest, SendEmailResponse};
pub use repositories::{DocumentStoreArchive, MessageArchive};
pub use server::{create_router, AppState};
pub use services::ContactRelayService;
pub use submission::{
    CelebrationEffect, ConfettiBurst, ContactEndpoint, ContactForm, HttpContactEndpoint,
    SubmissionHandler, SubmitOutcome, SubmitStatus,
};
pub use template::EmailTemplate;
