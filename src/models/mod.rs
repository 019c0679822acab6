//! Wire models exchanged with the email provider and the message archive.

pub mod archived_message;
pub mod send_email;

pub use archived_message::ArchivedMessage;
pub use send_email::{ProviderErrorBody, SendEmailRequest, SendEmailResponse};
