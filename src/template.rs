//! Rendering of the notification email sent to the site owner.

use crate::domain::{ContactMessage, EmailAddress};
use crate::models::SendEmailRequest;

/// Escape the five HTML-significant characters.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Subject line of the notification. Plain text, so not escaped.
pub fn subject(message: &ContactMessage) -> String {
    format!("Nouveau message de {}", message.name())
}

/// HTML body of the notification. Every user field goes through [`escape_html`].
pub fn html_body(message: &ContactMessage) -> String {
    let name = escape_html(message.name());
    let email = escape_html(message.email().as_str());
    let text = escape_html(message.message());

    format!(
        r#"
        <div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
          <h2 style="color: #6d28d9;">Nouveau message du portfolio</h2>
          <div style="background: #f3f4f6; padding: 20px; border-radius: 8px;">
            <p><strong>Nom:</strong> {name}</p>
            <p><strong>Email:</strong> {email}</p>
            <p><strong>Message:</strong></p>
            <p style="white-space: pre-wrap;">{text}</p>
          </div>
        </div>
      "#
    )
}

/// Fixed envelope (sender and recipient) applied to every submission.
#[derive(Debug, Clone)]
pub struct EmailTemplate {
    sender: EmailAddress,
    recipient: EmailAddress,
}

impl EmailTemplate {
    pub fn new(sender: EmailAddress, recipient: EmailAddress) -> Self {
        Self { sender, recipient }
    }

    /// Build the provider send request for one message.
    pub fn render(&self, message: &ContactMessage) -> SendEmailRequest {
        SendEmailRequest {
            from: self.sender.to_string(),
            to: vec![self.recipient.to_string()],
            subject: subject(message),
            html: html_body(message),
            reply_to: vec![message.email().to_string()],
        }
    }
}
