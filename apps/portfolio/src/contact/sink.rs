//! Where validated contact messages go.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::contact::validation::ValidContact;
use crate::errors::AppError;

#[derive(Debug, Clone, Serialize)]
pub struct ContactReceipt {
    pub id: Uuid,
    pub message: String,
    pub received_at: DateTime<Utc>,
}

pub fn success_message(contact: &ValidContact) -> String {
    format!(
        "Thank you, {}! Your message has been received. I'll get back to you soon at {}.",
        contact.name, contact.email
    )
}

/// Delivery backend for the contact form. Swap the implementation in `AppState`.
#[async_trait]
pub trait ContactSink: Send + Sync {
    async fn submit(&self, contact: ValidContact) -> Result<ContactReceipt, AppError>;
}

/// Accepts every message after an artificial delay. Nothing leaves the process.
#[derive(Debug, Clone)]
pub struct SimulatedContactSink {
    delay: Duration,
}

impl SimulatedContactSink {
    pub fn new(delay: Duration) -> Self {
        SimulatedContactSink { delay }
    }
}

#[async_trait]
impl ContactSink for SimulatedContactSink {
    async fn submit(&self, contact: ValidContact) -> Result<ContactReceipt, AppError> {
        tokio::time::sleep(self.delay).await;

        let receipt = ContactReceipt {
            id: Uuid::new_v4(),
            message: success_message(&contact),
            received_at: Utc::now(),
        };
        info!(
            id = %receipt.id,
            subject = %contact.subject,
            length = contact.message.len(),
            "Contact message received"
        );
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> ValidContact {
        ValidContact {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_success_message() {
        assert_eq!(
            success_message(&contact()),
            "Thank you, Ada! Your message has been received. I'll get back to you soon at ada@example.com."
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_sink_waits_for_delay() {
        let sink = SimulatedContactSink::new(Duration::from_millis(1500));
        let started = tokio::time::Instant::now();

        let receipt = sink.submit(contact()).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert!(receipt.message.starts_with("Thank you, Ada!"));
    }
}
