//! Domain value objects and types.
//!
//! The contact message and the email address it carries are validated at
//! construction time, so a relay handler holding a [`ContactMessage`] never
//! needs to re-check its fields.

pub mod contact_message;
pub mod email;
pub mod errors;

pub use contact_message::{ContactMessage, ContactSubmission};
pub use email::EmailAddress;
pub use errors::ValidationError;
