// src/backend/adapter/mailer.rs
//
// Outbound email seam. Signup needs exactly one send; everything about the
// transport lives behind the trait so hosts and tests can swap it.
use crate::error::ServiceError;
use serde_json::json;
use tracing::info;

pub trait Mailer: Send + Sync {
    /// Sends one HTML email. Errors propagate to the caller; no retries.
    fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), ServiceError>;
}

/// Delivers through an HTTP mail API (Resend/Mailgun style): one JSON POST
/// with a bearer key.
pub struct HttpMailer {
    endpoint: String,
    api_key: String,
    from: String,
}

impl HttpMailer {
    pub fn new(endpoint: String, api_key: String, from: String) -> Self {
        HttpMailer {
            endpoint,
            api_key,
            from,
        }
    }
}

impl Mailer for HttpMailer {
    fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), ServiceError> {
        let body = json!({
            "from": self.from,
            "to": [to],
            "subject": subject,
            "html": html_body,
        });

        let response = ureq::post(&self.endpoint)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .send_json(body)
            .map_err(|e| ServiceError::MailError(e.to_string()))?;

        info!(to, status = response.status(), "verification email dispatched");
        Ok(())
    }
}

/// Logs and drops. For hosts running without a configured mail endpoint.
pub struct NoopMailer;

impl Mailer for NoopMailer {
    fn send(&self, to: &str, subject: &str, _html_body: &str) -> Result<(), ServiceError> {
        info!(to, subject, "mail transport not configured, dropping email");
        Ok(())
    }
}

/// Captures sent mail for assertions.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: std::sync::Mutex<Vec<SentEmail>>,
    pub fail: bool,
}

#[derive(Clone, Debug)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        RecordingMailer {
            sent: std::sync::Mutex::new(Vec::new()),
            fail: true,
        }
    }
}

impl Mailer for RecordingMailer {
    fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), ServiceError> {
        if self.fail {
            return Err(ServiceError::MailError("transport down".to_string()));
        }
        self.sent
            .lock()
            .map_err(|_| ServiceError::MailError("recorder lock poisoned".to_string()))?
            .push(SentEmail {
                to: to.to_string(),
                subject: subject.to_string(),
                html_body: html_body.to_string(),
            });
        Ok(())
    }
}
