//! Form submission seam.
//!
//! # Responsibility
//! - Define the async `FormSubmitter` contract.
//! - Provide the mock submitter that resolves after a fixed delay.
//! - Validate, submit and map failures to user-facing messages.
//!
//! # Invariants
//! - Invalid forms are never handed to a submitter.
//! - Payload field values are never logged.

use super::{FieldErrors, FormModel, FormPayload, GENERIC_SUBMIT_ERROR, INVALID_FORM_MESSAGE};
use async_trait::async_trait;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use uuid::Uuid;

/// Acknowledgement of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub reference: String,
}

impl SubmitReceipt {
    /// Receipt with a fresh `IJAREI-XXXXXXXX` reference.
    pub fn generate() -> Self {
        let simple = Uuid::new_v4().simple().to_string();
        Self {
            reference: format!("IJAREI-{}", simple[..8].to_ascii_uppercase()),
        }
    }
}

/// Outcome of an accepted `submit_form` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSuccess {
    pub receipt: SubmitReceipt,
    /// The form's `SUCCESS_MESSAGE`, shown in place of the form.
    pub message: &'static str,
}

/// Transport-level submit failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Target endpoint is still the placeholder.
    NotConfigured(String),
    /// Endpoint answered with a non-success status.
    Rejected { status: u16 },
    /// Request could not be built or delivered.
    Transport(String),
}

impl Display for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotConfigured(endpoint) => {
                write!(f, "submit endpoint is not configured: {endpoint}")
            }
            Self::Rejected { status } => write!(f, "submit rejected with status {status}"),
            Self::Transport(message) => write!(f, "submit transport failure: {message}"),
        }
    }
}

impl Error for SubmitError {}

/// Form-level failure returned by [`submit_form`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    Invalid(FieldErrors),
    SubmitFailed(SubmitError),
}

impl FormError {
    /// Message shown to the visitor.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Invalid(_) => INVALID_FORM_MESSAGE,
            Self::SubmitFailed(_) => GENERIC_SUBMIT_ERROR,
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::SubmitFailed(_) => None,
        }
    }
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(errors) => write!(f, "invalid form: {errors}"),
            Self::SubmitFailed(err) => write!(f, "{err}"),
        }
    }
}

impl Error for FormError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::SubmitFailed(err) => Some(err),
        }
    }
}

/// Async destination of validated form payloads.
#[async_trait]
pub trait FormSubmitter: Send + Sync {
    async fn submit(&self, payload: FormPayload) -> Result<SubmitReceipt, SubmitError>;
}

/// Accepts every payload after a fixed delay.
#[derive(Debug, Clone)]
pub struct MockSubmitter {
    delay: Duration,
    failure: Option<SubmitError>,
}

impl MockSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            failure: None,
        }
    }

    /// Makes every submit fail with `error` after the delay.
    pub fn failing(mut self, error: SubmitError) -> Self {
        self.failure = Some(error);
        self
    }
}

#[async_trait]
impl FormSubmitter for MockSubmitter {
    async fn submit(&self, _payload: FormPayload) -> Result<SubmitReceipt, SubmitError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(SubmitReceipt::generate()),
        }
    }
}

/// Validates `form`, submits its payload and pairs the receipt with the
/// form's success message.
///
/// # Errors
/// - `FormError::Invalid` when local validation fails; nothing is sent.
/// - `FormError::SubmitFailed` when the submitter fails.
pub async fn submit_form<F: FormModel>(
    submitter: &dyn FormSubmitter,
    form: &F,
) -> Result<FormSuccess, FormError> {
    if let Err(errors) = form.validate() {
        info!(
            "event=form_submit module=forms status=invalid form={} fields={}",
            F::FORM_NAME,
            errors.fields().collect::<Vec<_>>().join(",")
        );
        return Err(FormError::Invalid(errors));
    }

    let payload = form.payload();
    let field_count = payload.fields.len();
    match submitter.submit(payload).await {
        Ok(receipt) => {
            info!(
                "event=form_submit module=forms status=ok form={} field_count={} reference={}",
                F::FORM_NAME,
                field_count,
                receipt.reference
            );
            Ok(FormSuccess {
                receipt,
                message: F::SUCCESS_MESSAGE,
            })
        }
        Err(err) => {
            warn!(
                "event=form_submit module=forms status=error form={} error={}",
                F::FORM_NAME,
                err
            );
            Err(FormError::SubmitFailed(err))
        }
    }
}
