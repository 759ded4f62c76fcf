//! Manuscript submission form (`/manuscript`) and its multipart submitter.
//!
//! # Responsibility
//! - Validate manuscript metadata and the uploaded file.
//! - Post the payload as `multipart/form-data` to the configured endpoint.
//!
//! # Invariants
//! - Nothing is sent while the endpoint is the placeholder URL.

use super::submit::{FormSubmitter, SubmitError, SubmitReceipt};
use super::{
    require, require_attachment, require_email, require_length, FieldErrors, FileAttachment,
    FormModel, FormPayload,
};
use async_trait::async_trait;
use log::info;
use reqwest::multipart::{Form, Part};

/// Endpoint shipped in the site build; submissions to it are refused.
pub const PLACEHOLDER_MANUSCRIPT_ENDPOINT: &str = "https://example.com/api/manuscripts";

const TITLE_MAX_CHARS: usize = 300;
const ABSTRACT_MIN_CHARS: usize = 100;
const ABSTRACT_MAX_CHARS: usize = 3000;
const MANUSCRIPT_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];
const MANUSCRIPT_MAX_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManuscriptSubmission {
    pub title: String,
    /// Comma-separated author names.
    pub authors: String,
    pub corresponding_email: String,
    pub affiliation: String,
    pub abstract_text: String,
    /// Comma-separated keywords.
    pub keywords: String,
    pub research_area: String,
    pub manuscript: Option<FileAttachment>,
}

impl ManuscriptSubmission {
    /// Trimmed, non-empty author names.
    pub fn author_list(&self) -> Vec<String> {
        split_list(&self.authors)
    }

    /// Trimmed, non-empty keywords.
    pub fn keyword_list(&self) -> Vec<String> {
        split_list(&self.keywords)
    }
}

impl FormModel for ManuscriptSubmission {
    const FORM_NAME: &'static str = "manuscript_submission";
    const SUCCESS_MESSAGE: &'static str =
        "Your manuscript has been submitted successfully. A confirmation will follow by email.";

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_length(&mut errors, "title", "Title", &self.title, 1, TITLE_MAX_CHARS);
        if self.author_list().is_empty() {
            errors.insert("authors", "At least one author is required");
        }
        require_email(&mut errors, "corresponding_email", &self.corresponding_email);
        require(&mut errors, "affiliation", "Affiliation", &self.affiliation);
        require_length(
            &mut errors,
            "abstract",
            "Abstract",
            &self.abstract_text,
            ABSTRACT_MIN_CHARS,
            ABSTRACT_MAX_CHARS,
        );
        if self.keyword_list().is_empty() {
            errors.insert("keywords", "At least one keyword is required");
        }
        require(&mut errors, "research_area", "Research area", &self.research_area);
        require_attachment(
            &mut errors,
            "manuscript",
            "Manuscript file",
            self.manuscript.as_ref(),
            MANUSCRIPT_EXTENSIONS,
            MANUSCRIPT_MAX_BYTES,
        );
        errors.into_result()
    }

    fn payload(&self) -> FormPayload {
        FormPayload::new(Self::FORM_NAME)
            .field("title", &self.title)
            .field("authors", &self.author_list().join(", "))
            .field("corresponding_email", &self.corresponding_email)
            .field("affiliation", &self.affiliation)
            .field("abstract", &self.abstract_text)
            .field("keywords", &self.keyword_list().join(", "))
            .field("research_area", &self.research_area)
            .attachment(self.manuscript.clone())
    }
}

/// Posts payloads as `multipart/form-data`.
pub struct MultipartSubmitter {
    endpoint: String,
    http: reqwest::Client,
}

impl MultipartSubmitter {
    pub fn new(endpoint: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            http,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn is_configured(&self) -> bool {
        let endpoint = self.endpoint.trim();
        !endpoint.is_empty() && endpoint != PLACEHOLDER_MANUSCRIPT_ENDPOINT
    }
}

#[async_trait]
impl FormSubmitter for MultipartSubmitter {
    async fn submit(&self, payload: FormPayload) -> Result<SubmitReceipt, SubmitError> {
        if !self.is_configured() {
            return Err(SubmitError::NotConfigured(self.endpoint.clone()));
        }

        let form = multipart_form(payload)?;
        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|err| SubmitError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
            });
        }

        info!(
            "event=manuscript_post module=forms status=ok http_status={}",
            status.as_u16()
        );
        Ok(SubmitReceipt::generate())
    }
}

fn multipart_form(payload: FormPayload) -> Result<Form, SubmitError> {
    let mut form = Form::new().text("form", payload.form);
    for (name, value) in payload.fields {
        form = form.text(name, value);
    }

    if let Some(file) = payload.attachment {
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.content_type)
            .map_err(|err| SubmitError::Transport(err.to_string()))?;
        form = form.part("file", part);
    }

    Ok(form)
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::split_list;

    #[test]
    fn split_list_drops_blank_entries() {
        assert_eq!(
            split_list(" Anil Kumar, ,Priya Sharma ,"),
            vec!["Anil Kumar".to_string(), "Priya Sharma".to_string()]
        );
        assert!(split_list(" , ").is_empty());
    }
}
