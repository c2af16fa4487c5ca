//! Server-rendered contact page.
//!
//! Works without JavaScript: the form posts back to the server, which runs
//! the same validation and submission flow as the other front ends and
//! re-renders the page with per-field states and a status banner.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use serde::Deserialize;

use crate::domain::controller::{Banner, SubmissionController, SubmitOutcome};
use crate::domain::entities::FieldValues;
use crate::domain::form::ContactForm;
use crate::domain::validation::FieldName;
use crate::infrastructure::relay::LocalRelayTransport;
use crate::state::AppState;

/// One form field as rendered.
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub multiline: bool,
    pub value: String,
    pub status_class: &'static str,
    pub has_error: bool,
    pub error: String,
}

/// Template for the contact page.
///
/// Renders `templates/contact.html`.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactPage {
    pub fields: Vec<FieldView>,
    pub show_banner: bool,
    pub banner_class: &'static str,
    pub banner_text: String,
}

impl ContactPage {
    fn from_form(form: &ContactForm, banner: Option<&Banner>) -> Self {
        let fields = FieldName::ALL
            .into_iter()
            .map(|field| {
                let state = form.state(field);
                FieldView {
                    name: field.as_str(),
                    label: field.label(),
                    input_type: if field == FieldName::Email {
                        "email"
                    } else {
                        "text"
                    },
                    multiline: field == FieldName::Message,
                    value: form.value(field).to_string(),
                    status_class: state.status.css_class(),
                    has_error: state.error.is_some(),
                    error: state.error.unwrap_or_default(),
                }
            })
            .collect();

        match banner.filter(|b| b.is_visible(Utc::now())) {
            Some(banner) => Self {
                fields,
                show_banner: true,
                banner_class: banner.kind.css_class(),
                banner_text: banner.text.clone(),
            },
            None => Self {
                fields,
                show_banner: false,
                banner_class: "",
                banner_text: String::new(),
            },
        }
    }
}

/// Contact form fields as posted by the browser.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactFormInput {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl From<ContactFormInput> for FieldValues {
    fn from(input: ContactFormInput) -> Self {
        Self {
            name: input.name,
            email: input.email,
            subject: input.subject,
            message: input.message,
        }
    }
}

/// Renders an empty contact form.
///
/// # Endpoint
///
/// `GET /contact`
pub async fn contact_page_handler() -> impl IntoResponse {
    ContactPage::from_form(&ContactForm::new(), None)
}

/// Validates and relays a posted contact form.
///
/// # Endpoint
///
/// `POST /contact` (`application/x-www-form-urlencoded`)
///
/// # Response Codes
///
/// - **200 OK**: Submission relayed (fields cleared, success banner) or relay
///   failed (fields kept, error banner)
/// - **422 Unprocessable Entity**: At least one field invalid; nothing sent
pub async fn contact_submit_handler(
    State(state): State<AppState>,
    Form(input): Form<ContactFormInput>,
) -> impl IntoResponse {
    let mut form = ContactForm::with_values(input.into());

    let transport = LocalRelayTransport::new(state.relay_service.clone());
    let mut controller =
        SubmissionController::new(transport).with_fallback_contact(state.fallback_contact.clone());

    let status = match controller.submit(&mut form).await {
        SubmitOutcome::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::OK,
    };

    (status, ContactPage::from_form(&form, controller.banner()))
}
