//! Resend API client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::ports::Mailer;
use crate::error::MailerError;

const RESEND_API_BASE: &str = "https://api.resend.com";

/// Implementation of the email-provider port backed by Resend
pub struct ResendClient {
    http: Client,
    base_url: String,
    api_key: String,
    /// Verified sender, e.g. "Framelight <onboarding@resend.dev>"
    from: String,
}

#[derive(Serialize)]
struct CreateContactRequest<'a> {
    email: &'a str,
    unsubscribed: bool,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    reply_to: &'a str,
    html: &'a str,
}

#[derive(Deserialize, Default)]
struct ResendErrorResponse {
    #[serde(default)]
    message: String,
}

impl ResendClient {
    pub fn new(api_key: String, from: String) -> Self {
        Self::with_base_url(api_key, from, RESEND_API_BASE.to_string())
    }

    pub fn with_base_url(api_key: String, from: String, base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            from,
        }
    }

    async fn handle_error(&self, response: reqwest::Response) -> MailerError {
        let status = response.status().as_u16();
        let body: ResendErrorResponse = response.json().await.unwrap_or_default();

        // Resend reports duplicate audience contacts in the error message
        // rather than with a dedicated status code.
        if body.message.contains("already exists") {
            return MailerError::AlreadySubscribed;
        }

        MailerError::Api {
            status,
            message: body.message,
        }
    }
}

#[async_trait]
impl Mailer for ResendClient {
    async fn add_audience_contact(
        &self,
        audience_id: &str,
        email: &str,
    ) -> Result<(), MailerError> {
        let response = self
            .http
            .post(format!(
                "{}/audiences/{}/contacts",
                self.base_url, audience_id
            ))
            .bearer_auth(&self.api_key)
            .json(&CreateContactRequest {
                email,
                unsubscribed: false,
            })
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(self.handle_error(response).await)
        }
    }

    async fn send_message(
        &self,
        to: &str,
        reply_to: &str,
        subject: &str,
        html: &str,
    ) -> Result<(), MailerError> {
        let response = self
            .http
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&SendEmailRequest {
                from: &self.from,
                to,
                subject,
                reply_to,
                html,
            })
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(self.handle_error(response).await)
        }
    }
}
