use crate::config::RelayCredentials;
use crate::logging::Logger;
use crate::notifications::NotificationKind;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

pub const FIELD_NAMES: [&str; 3] = ["name", "email", "message"];
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again or contact me directly.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a message (at least {0} characters)")]
    MessageTooShort(usize),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RelayError {
    #[error("email relay is not configured")]
    NotConfigured,
    #[error("email relay request failed: {0}")]
    Network(String),
    #[error("email relay rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ContactError),
    #[error(transparent)]
    Relay(#[from] RelayError),
}

impl SubmitError {
    /// What the visitor sees. Relay details stay in the log.
    pub fn user_message(&self) -> String {
        match self {
            Self::Invalid(error) => error.to_string(),
            Self::Relay(_) => FAILURE_MESSAGE.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            from_name: name.trim().to_string(),
            from_email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    pub fn validate(&self, min_message_chars: usize) -> Result<(), ContactError> {
        if self.from_name.is_empty() {
            return Err(ContactError::MissingName);
        }

        if !is_valid_email(&self.from_email) {
            return Err(ContactError::InvalidEmail);
        }

        if self.message.chars().count() < min_message_chars {
            return Err(ContactError::MessageTooShort(min_message_chars));
        }

        Ok(())
    }

    pub fn template_params(&self, owner_name: &str) -> TemplateParams {
        TemplateParams {
            from_name: self.from_name.clone(),
            from_email: self.from_email.clone(),
            message: self.message.clone(),
            to_name: owner_name.to_string(),
            reply_to: self.from_email.clone(),
        }
    }
}

/// `local@domain.tld`: one `@`, no whitespace, and a dot inside the domain
/// with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(index, ch)| ch == '.' && index > 0 && index + 1 < domain.len())
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub to_name: String,
    pub reply_to: String,
}

/// Body of the EmailJS REST send call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RelayRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a TemplateParams,
}

impl<'a> RelayRequest<'a> {
    pub fn new(credentials: &'a RelayCredentials, template_params: &'a TemplateParams) -> Self {
        Self {
            service_id: &credentials.service_id,
            template_id: &credentials.template_id,
            user_id: &credentials.public_key,
            template_params,
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait EmailRelay {
    async fn send(&self, params: &TemplateParams) -> Result<(), RelayError>;
}

/// Validates, relays and logs one form submission.
pub async fn submit<R>(
    relay: &R,
    submission: &ContactSubmission,
    min_message_chars: usize,
    owner_name: &str,
    logger: Logger,
) -> Result<(), SubmitError>
where
    R: EmailRelay,
{
    submission.validate(min_message_chars)?;

    let params = submission.template_params(owner_name);
    match relay.send(&params).await {
        Ok(()) => {
            logger.info("contact_sent", json!({ "messageChars": submission.message.chars().count() }));
            Ok(())
        }
        Err(error) => {
            logger.error("contact_relay_failed", json!({ "reason": error.to_string() }));
            Err(error.into())
        }
    }
}

pub fn outcome_notification(outcome: &Result<(), SubmitError>) -> (NotificationKind, String) {
    match outcome {
        Ok(()) => (NotificationKind::Success, SUCCESS_MESSAGE.to_string()),
        Err(error) => (NotificationKind::Error, error.user_message()),
    }
}

pub fn draft_key(field: &str) -> String {
    format!("form_{field}")
}
