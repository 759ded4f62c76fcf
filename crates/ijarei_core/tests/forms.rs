use ijarei_core::forms::account::{LoginForm, SignupForm};
use ijarei_core::forms::contact::ContactForm;
use ijarei_core::forms::editorial::EditorialBoardApplication;
use ijarei_core::forms::manuscript::{ManuscriptSubmission, PLACEHOLDER_MANUSCRIPT_ENDPOINT};
use ijarei_core::forms::{GENERIC_SUBMIT_ERROR, INVALID_FORM_MESSAGE};
use ijarei_core::{
    submit_form, AppContext, FileAttachment, FormError, FormModel, MemoryStorage, MockSubmitter,
    SiteConfig, SubmitError,
};
use std::time::Duration;

fn contact() -> ContactForm {
    ContactForm {
        name: "Priya Sharma".to_string(),
        email: "priya@example.org".to_string(),
        subject: "Indexing".to_string(),
        message: "Is the journal indexed in Scopus yet?".to_string(),
    }
}

fn pdf(name: &str, size: usize) -> Option<FileAttachment> {
    Some(FileAttachment::new(name, "application/pdf", vec![0x25; size]))
}

fn manuscript() -> ManuscriptSubmission {
    ManuscriptSubmission {
        title: "Corrosion Behaviour of Rebar in Recycled Aggregate Concrete".to_string(),
        authors: "Anil Kumar, Lakshmi Iyer".to_string(),
        corresponding_email: "anil@example.edu".to_string(),
        affiliation: "National Institute of Technology".to_string(),
        abstract_text: "a".repeat(150),
        keywords: "corrosion, recycled aggregate".to_string(),
        research_area: "Civil Engineering".to_string(),
        manuscript: pdf("paper.pdf", 2048),
    }
}

fn application() -> EditorialBoardApplication {
    EditorialBoardApplication {
        full_name: "Dr. Kavita Joshi".to_string(),
        email: "kavita@example.ac.in".to_string(),
        phone: "+91 98765 43210".to_string(),
        designation: "Associate Professor".to_string(),
        institution: "University of Pune".to_string(),
        country: "India".to_string(),
        specialization: "Natural Language Processing".to_string(),
        experience_years: "12".to_string(),
        cv: pdf("cv.docx", 1024),
    }
}

#[test]
fn contact_form_requires_every_field() {
    let errors = ContactForm::default().validate().unwrap_err();
    for field in ["name", "email", "subject", "message"] {
        assert!(errors.contains(field), "{field} should be reported");
    }
    assert!(contact().validate().is_ok());
}

#[test]
fn contact_message_length_is_bounded() {
    let short = ContactForm {
        message: "Hi".to_string(),
        ..contact()
    };
    let errors = short.validate().unwrap_err();
    assert_eq!(
        errors.get("message"),
        Some("Message must be at least 10 characters")
    );

    let long = ContactForm {
        message: "x".repeat(2001),
        ..contact()
    };
    assert!(long.validate().unwrap_err().contains("message"));
}

#[test]
fn payload_values_are_trimmed() {
    let padded = ContactForm {
        name: "  Priya Sharma ".to_string(),
        ..contact()
    };
    assert_eq!(padded.payload().value("name"), Some("Priya Sharma"));
    assert_eq!(padded.payload().form, "contact");
}

#[test]
fn login_form_checks_email_shape() {
    let form = LoginForm {
        email: "author@".to_string(),
        password: "whatever".to_string(),
    };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.get("email"), Some("Please enter a valid email address"));
    assert!(!errors.contains("password"));
}

#[test]
fn signup_form_checks_password_rules_and_terms() {
    let form = SignupForm {
        full_name: "Rahul Verma".to_string(),
        email: "rahul@example.com".to_string(),
        affiliation: "IIT Delhi".to_string(),
        password: "short".to_string(),
        confirm_password: "shorter".to_string(),
        accept_terms: false,
    };
    let errors = form.validate().unwrap_err();
    assert!(errors.contains("password"));
    assert!(errors.contains("confirm_password"));
    assert!(errors.contains("accept_terms"));

    let valid = SignupForm {
        password: "longenough".to_string(),
        confirm_password: "longenough".to_string(),
        accept_terms: true,
        ..form
    };
    assert!(valid.validate().is_ok());
}

#[test]
fn editorial_application_validates_phone_experience_and_cv() {
    assert!(application().validate().is_ok());

    let invalid = EditorialBoardApplication {
        phone: "call me".to_string(),
        experience_years: "seventy".to_string(),
        cv: Some(FileAttachment::new("cv.exe", "application/octet-stream", vec![1])),
        ..application()
    };
    let errors = invalid.validate().unwrap_err();
    assert!(errors.contains("phone"));
    assert!(errors.contains("experience_years"));
    assert_eq!(errors.get("cv"), Some("CV must be one of: pdf, doc, docx"));

    let too_experienced = EditorialBoardApplication {
        experience_years: "61".to_string(),
        ..application()
    };
    assert!(too_experienced
        .validate()
        .unwrap_err()
        .contains("experience_years"));
}

#[test]
fn editorial_cv_size_is_capped() {
    let oversized = EditorialBoardApplication {
        cv: pdf("cv.pdf", 5 * 1024 * 1024 + 1),
        ..application()
    };
    assert_eq!(
        oversized.validate().unwrap_err().get("cv"),
        Some("CV must be at most 5 MB")
    );
}

#[test]
fn manuscript_requires_abstract_length_and_file() {
    assert!(manuscript().validate().is_ok());

    let invalid = ManuscriptSubmission {
        abstract_text: "Too short.".to_string(),
        authors: " , ".to_string(),
        manuscript: None,
        ..manuscript()
    };
    let errors = invalid.validate().unwrap_err();
    assert!(errors.contains("abstract"));
    assert!(errors.contains("authors"));
    assert_eq!(errors.get("manuscript"), Some("Manuscript file is required"));
}

#[test]
fn manuscript_payload_normalizes_lists() {
    let form = ManuscriptSubmission {
        keywords: " corrosion ,, recycled aggregate ,".to_string(),
        ..manuscript()
    };
    let payload = form.payload();
    assert_eq!(payload.value("keywords"), Some("corrosion, recycled aggregate"));
    assert_eq!(
        payload.attachment.as_ref().map(|file| file.file_name.as_str()),
        Some("paper.pdf")
    );
}

#[tokio::test]
async fn valid_form_is_submitted_with_reference() {
    let config = SiteConfig {
        mock_delay: Duration::ZERO,
        ..SiteConfig::default()
    };
    let submitter = AppContext::new(config, MemoryStorage::new()).form_submitter();

    let success = submit_form(&submitter, &contact()).await.unwrap();

    assert!(success.receipt.reference.starts_with("IJAREI-"));
    assert_eq!(success.receipt.reference.len(), "IJAREI-".len() + 8);
    assert_eq!(success.message, ContactForm::SUCCESS_MESSAGE);
}

#[tokio::test]
async fn success_message_follows_the_submitted_form() {
    let submitter = MockSubmitter::new(Duration::ZERO);

    let success = submit_form(&submitter, &application()).await.unwrap();

    assert_eq!(success.message, EditorialBoardApplication::SUCCESS_MESSAGE);
    assert_ne!(success.message, ContactForm::SUCCESS_MESSAGE);
}

#[tokio::test]
async fn invalid_form_is_not_submitted() {
    let submitter = MockSubmitter::new(Duration::ZERO).failing(SubmitError::Transport(
        "submitter must not be reached".to_string(),
    ));

    let err = submit_form(&submitter, &ContactForm::default())
        .await
        .unwrap_err();

    assert!(matches!(err, FormError::Invalid(_)));
    assert_eq!(err.user_message(), INVALID_FORM_MESSAGE);
    assert!(err.field_errors().unwrap().contains("email"));
}

#[tokio::test]
async fn submit_failure_maps_to_generic_message() {
    let submitter =
        MockSubmitter::new(Duration::ZERO).failing(SubmitError::Rejected { status: 503 });

    let err = submit_form(&submitter, &application()).await.unwrap_err();

    assert_eq!(
        err,
        FormError::SubmitFailed(SubmitError::Rejected { status: 503 })
    );
    assert_eq!(err.user_message(), GENERIC_SUBMIT_ERROR);
}

#[tokio::test]
async fn placeholder_manuscript_endpoint_is_refused() {
    let context = AppContext::new(SiteConfig::default(), MemoryStorage::new());
    let submitter = context.manuscript_submitter().unwrap();
    assert!(!submitter.is_configured());

    let err = submit_form(&submitter, &manuscript()).await.unwrap_err();

    assert_eq!(
        err,
        FormError::SubmitFailed(SubmitError::NotConfigured(
            PLACEHOLDER_MANUSCRIPT_ENDPOINT.to_string()
        ))
    );
    assert_eq!(err.user_message(), GENERIC_SUBMIT_ERROR);
}
