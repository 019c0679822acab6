//! Browser-side half of the contact pipeline.
//!
//! [`SubmissionHandler`] owns the three form fields, posts them to the relay
//! endpoint and drives the `idle | success | error` banner, resetting it to
//! idle [`RESET_DELAY`] after every submission.

mod effect;
mod endpoint;
mod form;
mod handler;
mod status;

pub use effect::{CelebrationEffect, ConfettiBurst, NoCelebration};
pub use endpoint::{ContactEndpoint, HttpContactEndpoint};
pub use form::ContactForm;
pub use handler::{SubmissionHandler, SubmitOutcome};
pub use status::{SubmitStatus, ERROR_MESSAGE, RESET_DELAY, SUCCESS_MESSAGE};
