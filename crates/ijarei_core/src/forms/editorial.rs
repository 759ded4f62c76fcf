//! Editorial board membership application (`/editorialboardform`).

use super::{
    is_valid_phone, require, require_attachment, require_email, FieldErrors, FileAttachment,
    FormModel, FormPayload,
};

const CV_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];
const CV_MAX_BYTES: usize = 5 * 1024 * 1024;
const MAX_EXPERIENCE_YEARS: u32 = 60;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorialBoardApplication {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub designation: String,
    pub institution: String,
    pub country: String,
    pub specialization: String,
    /// Years of academic experience, as typed.
    pub experience_years: String,
    pub cv: Option<FileAttachment>,
}

impl FormModel for EditorialBoardApplication {
    const FORM_NAME: &'static str = "editorial_board_application";
    const SUCCESS_MESSAGE: &'static str =
        "Your application has been submitted. The editorial office will contact you.";

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "full_name", "Full name", &self.full_name);
        require_email(&mut errors, "email", &self.email);

        let phone = self.phone.trim();
        if phone.is_empty() {
            errors.insert("phone", "Phone number is required");
        } else if !is_valid_phone(phone) {
            errors.insert("phone", "Please enter a valid phone number");
        }

        require(&mut errors, "designation", "Designation", &self.designation);
        require(&mut errors, "institution", "Institution", &self.institution);
        require(&mut errors, "country", "Country", &self.country);
        require(
            &mut errors,
            "specialization",
            "Area of specialization",
            &self.specialization,
        );

        match self.experience_years.trim().parse::<u32>() {
            Ok(years) if years <= MAX_EXPERIENCE_YEARS => {}
            Ok(_) => errors.insert(
                "experience_years",
                format!("Experience must be at most {MAX_EXPERIENCE_YEARS} years"),
            ),
            Err(_) => errors.insert(
                "experience_years",
                "Experience must be a whole number of years",
            ),
        }

        require_attachment(
            &mut errors,
            "cv",
            "CV",
            self.cv.as_ref(),
            CV_EXTENSIONS,
            CV_MAX_BYTES,
        );
        errors.into_result()
    }

    fn payload(&self) -> FormPayload {
        FormPayload::new(Self::FORM_NAME)
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("designation", &self.designation)
            .field("institution", &self.institution)
            .field("country", &self.country)
            .field("specialization", &self.specialization)
            .field("experience_years", &self.experience_years)
            .attachment(self.cv.clone())
    }
}
