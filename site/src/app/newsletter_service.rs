//! Newsletter service
//!
//! Validates signup requests and forwards them to the email provider's
//! audience API. Without provider credentials it runs in demo mode, keeping
//! subscribers in an in-memory set so the form still works locally.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use crate::domain::ports::Mailer;
use crate::error::{AppError, MailerError};

pub struct NewsletterService<M: Mailer> {
    mailer: Arc<M>,
    audience_id: Option<String>,
    demo_subscribers: RwLock<HashSet<String>>,
}

impl<M: Mailer> NewsletterService<M> {
    pub fn new(mailer: Arc<M>, audience_id: Option<String>) -> Self {
        Self {
            mailer,
            audience_id,
            demo_subscribers: RwLock::new(HashSet::new()),
        }
    }

    /// Subscribe an address. Returns the confirmation message to show the
    /// visitor; duplicates are a conflict.
    pub async fn subscribe(&self, email: &str) -> Result<String, AppError> {
        if !crate::app::text::is_valid_email(email) {
            return Err(AppError::BadRequest(
                "Please provide a valid email address".to_string(),
            ));
        }

        let email = email.to_lowercase();

        if let Some(audience_id) = &self.audience_id {
            match self.mailer.add_audience_contact(audience_id, &email).await {
                Ok(()) => {
                    tracing::info!("New newsletter subscriber");
                    Ok("Thanks for subscribing! You'll receive updates soon.".to_string())
                }
                Err(MailerError::AlreadySubscribed) => Err(AppError::Conflict(
                    "This email is already subscribed".to_string(),
                )),
                Err(e) => Err(AppError::Mailer(e)),
            }
        } else {
            let mut subscribers = self
                .demo_subscribers
                .write()
                .map_err(|_| AppError::Internal("subscriber set poisoned".to_string()))?;

            if !subscribers.insert(email) {
                return Err(AppError::Conflict(
                    "This email is already subscribed".to_string(),
                ));
            }

            tracing::info!(
                "New subscriber (demo mode), total: {}",
                subscribers.len()
            );
            Ok("Thanks for subscribing! (Demo mode - configure the email provider for \
                production.)"
                .to_string())
        }
    }

    /// Demo-mode subscriber count.
    pub fn subscriber_count(&self) -> usize {
        self.demo_subscribers
            .read()
            .map(|s| s.len())
            .unwrap_or(0)
    }
}
