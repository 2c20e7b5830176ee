//! Email-provider port trait

use async_trait::async_trait;

use crate::error::MailerError;

/// Port trait for the email provider (Resend)
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Add an email address to a marketing audience.
    ///
    /// Returns `MailerError::AlreadySubscribed` when the provider reports the
    /// contact as already present.
    async fn add_audience_contact(
        &self,
        audience_id: &str,
        email: &str,
    ) -> Result<(), MailerError>;

    /// Send a transactional email (used by the contact form).
    async fn send_message(
        &self,
        to: &str,
        reply_to: &str,
        subject: &str,
        html: &str,
    ) -> Result<(), MailerError>;
}
