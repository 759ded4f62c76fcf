//! Site form models.
//!
//! # Responsibility
//! - Define the controlled forms of the public site and admin login.
//! - Validate input locally and report field-keyed messages.
//! - Hand validated payloads to a `FormSubmitter`.
//!
//! # Invariants
//! - Validation never trims or rewrites the caller's values; payloads carry
//!   trimmed copies.
//! - Submit failures collapse to one generic user-facing message.

pub mod account;
pub mod contact;
pub mod editorial;
pub mod manuscript;
pub mod submit;

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9 \-]{6,18}[0-9]$").expect("valid phone regex"));

/// Shown for any failed submit, whatever the cause.
pub const GENERIC_SUBMIT_ERROR: &str = "Something went wrong. Please try again later.";
/// Shown when local validation rejects the form.
pub const INVALID_FORM_MESSAGE: &str = "Please correct the highlighted fields.";

/// Field name → message map produced by form validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the first error of `field`; later errors for it are ignored.
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.keys().copied()
    }

    /// `Ok(())` when no field failed.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{joined}")
    }
}

impl Error for FieldErrors {}

/// Uploaded file carried by a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FileAttachment {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Lowercased extension without the dot.
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.file_name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}

/// Validated form data ready for submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPayload {
    pub form: &'static str,
    pub fields: Vec<(String, String)>,
    pub attachment: Option<FileAttachment>,
}

impl FormPayload {
    pub fn new(form: &'static str) -> Self {
        Self {
            form,
            fields: Vec::new(),
            attachment: None,
        }
    }

    /// Appends a trimmed text field.
    pub fn field(mut self, name: &str, value: &str) -> Self {
        self.fields.push((name.to_string(), value.trim().to_string()));
        self
    }

    pub fn attachment(mut self, attachment: Option<FileAttachment>) -> Self {
        self.attachment = attachment;
        self
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }
}

/// A form that validates locally and produces a submit payload.
pub trait FormModel {
    /// Stable form name used in payloads and logs.
    const FORM_NAME: &'static str;
    /// Message shown after a successful submit.
    const SUCCESS_MESSAGE: &'static str;

    fn validate(&self) -> Result<(), FieldErrors>;
    fn payload(&self) -> FormPayload;
}

pub(crate) fn require(errors: &mut FieldErrors, field: &'static str, label: &str, value: &str) {
    if value.trim().is_empty() {
        errors.insert(field, format!("{label} is required"));
    }
}

pub(crate) fn require_email(errors: &mut FieldErrors, field: &'static str, value: &str) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.insert(field, "Email is required");
    } else if !is_valid_email(trimmed) {
        errors.insert(field, "Please enter a valid email address");
    }
}

pub(crate) fn require_length(
    errors: &mut FieldErrors,
    field: &'static str,
    label: &str,
    value: &str,
    min: usize,
    max: usize,
) {
    let count = value.trim().chars().count();
    if count == 0 {
        errors.insert(field, format!("{label} is required"));
    } else if count < min {
        errors.insert(field, format!("{label} must be at least {min} characters"));
    } else if count > max {
        errors.insert(field, format!("{label} must be at most {max} characters"));
    }
}

pub(crate) fn require_attachment(
    errors: &mut FieldErrors,
    field: &'static str,
    label: &str,
    attachment: Option<&FileAttachment>,
    allowed_extensions: &[&str],
    max_bytes: usize,
) {
    let Some(file) = attachment else {
        errors.insert(field, format!("{label} is required"));
        return;
    };

    let allowed = file
        .extension()
        .is_some_and(|ext| allowed_extensions.contains(&ext.as_str()));
    if !allowed {
        errors.insert(
            field,
            format!("{label} must be one of: {}", allowed_extensions.join(", ")),
        );
    } else if file.bytes.is_empty() {
        errors.insert(field, format!("{label} is empty"));
    } else if file.bytes.len() > max_bytes {
        errors.insert(
            field,
            format!("{label} must be at most {} MB", max_bytes / (1024 * 1024)),
        );
    }
}

/// Returns whether `value` looks like `local@domain.tld`.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Returns whether `value` looks like a phone number.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}
