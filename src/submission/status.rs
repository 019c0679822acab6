use std::time::Duration;

/// How long a success or error banner stays up.
pub const RESET_DELAY: Duration = Duration::from_secs(5);

pub const SUCCESS_MESSAGE: &str = "Message envoyé avec succès !";

/// Shown for every failure, whatever the server said.
pub const ERROR_MESSAGE: &str = "Une erreur est survenue. Veuillez réessayer.";

/// Banner state of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

impl SubmitStatus {
    /// Banner text, `None` while idle.
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Success => Some(SUCCESS_MESSAGE),
            Self::Error => Some(ERROR_MESSAGE),
        }
    }
}
