//! Contact page form.

use super::{require, require_email, require_length, FieldErrors, FormModel, FormPayload};

const MESSAGE_MIN_CHARS: usize = 10;
const MESSAGE_MAX_CHARS: usize = 2000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormModel for ContactForm {
    const FORM_NAME: &'static str = "contact";
    const SUCCESS_MESSAGE: &'static str =
        "Thank you for contacting us. We will get back to you soon.";

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", "Name", &self.name);
        require_email(&mut errors, "email", &self.email);
        require(&mut errors, "subject", "Subject", &self.subject);
        require_length(
            &mut errors,
            "message",
            "Message",
            &self.message,
            MESSAGE_MIN_CHARS,
            MESSAGE_MAX_CHARS,
        );
        errors.into_result()
    }

    fn payload(&self) -> FormPayload {
        FormPayload::new(Self::FORM_NAME)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("subject", &self.subject)
            .field("message", &self.message)
    }
}
