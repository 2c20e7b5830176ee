//! Contact-form service
//!
//! Validates the form fields and delivers the message by email. Without a
//! configured recipient the message is only logged (demo mode), mirroring
//! the newsletter service.

use std::sync::Arc;

use crate::app::text::is_valid_email;
use crate::domain::ports::Mailer;
use crate::error::AppError;
use crate::render::html::escape;

pub struct ContactService<M: Mailer> {
    mailer: Arc<M>,
    recipient: Option<String>,
}

impl<M: Mailer> ContactService<M> {
    pub fn new(mailer: Arc<M>, recipient: Option<String>) -> Self {
        Self { mailer, recipient }
    }

    pub async fn send(&self, name: &str, email: &str, message: &str) -> Result<String, AppError> {
        if name.trim().is_empty() || email.trim().is_empty() || message.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Please fill in all fields".to_string(),
            ));
        }
        if !is_valid_email(email) {
            return Err(AppError::BadRequest(
                "Please provide a valid email address".to_string(),
            ));
        }

        let Some(recipient) = &self.recipient else {
            tracing::info!("Contact message received (demo mode, not delivered)");
            return Ok("Thanks for reaching out! (Demo mode - configure the email provider \
                       for delivery.)"
                .to_string());
        };

        let subject = format!("New message from {}", name.trim());
        let html = format!(
            "<div style=\"font-family: sans-serif; max-width: 600px; margin: 0 auto;\">\
             <h2>New contact form message</h2>\
             <p><strong>From:</strong> {} &lt;{}&gt;</p>\
             <p style=\"white-space: pre-wrap;\">{}</p>\
             </div>",
            escape(name.trim()),
            escape(email.trim()),
            escape(message.trim()),
        );

        self.mailer
            .send_message(recipient, email.trim(), &subject, &html)
            .await?;

        tracing::info!("Contact message delivered");
        Ok("Thanks for reaching out! I'll get back to you soon.".to_string())
    }
}
