// Contact form model: field bookkeeping, validation and submission

use gloo::net::http::Request;
use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Address,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Phone, Field::Address, Field::Message];

    /// Element id and form control name
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Phone => "Phone Number",
            Self::Address => "Service Address",
            Self::Message => "Tell Us About Your Project",
        }
    }

    pub fn required_message(self) -> &'static str {
        match self {
            Self::Name => "Name is required",
            Self::Phone => "Phone number is required",
            Self::Address => "Address is required",
            Self::Message => "Message is required",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Address => &self.address,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Address => &mut self.address,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Every field must hold something other than whitespace.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let errors = FieldErrors(
            Field::ALL
                .into_iter()
                .filter(|field| self.get(*field).trim().is_empty())
                .collect(),
        );
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Fields that failed validation, in form order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<Field>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.0
            .contains(&field)
            .then(|| field.required_message())
    }

    /// Editing a field clears its error until the next submit.
    pub fn clear(&mut self, field: Field) {
        self.0.retain(|f| *f != field);
    }

    pub fn fields(&self) -> &[Field] {
        &self.0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

impl FormStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_submitting() {
            "Sending..."
        } else {
            "Submit Request"
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not reach the form service: {0}")]
    Transport(#[from] gloo::net::Error),
    #[error("the form service rejected the request (HTTP {0})")]
    Rejected(u16),
}

impl SubmitError {
    /// Text shown under the form; the details only go to the log.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Transport(_) => {
                "We couldn't send your request. Please check your connection and try again."
            }
            Self::Rejected(_) => "Something went wrong on our end. Please call us or try again later.",
        }
    }
}

/// POSTs the form as JSON to `endpoint`.
pub async fn submit_to(endpoint: &str, form: &ContactForm) -> Result<(), SubmitError> {
    let response = Request::post(endpoint)
        .header("Accept", "application/json")
        .json(form)?
        .send()
        .await?;

    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Rejected(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Dana K.".into(),
            address: "12 Shore Rd".into(),
            phone: "555-0134".into(),
            message: "Driveway sealing".into(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.fields(), &Field::ALL);
        assert_eq!(errors.message(Field::Name), Some("Name is required"));
        assert_eq!(errors.message(Field::Address), Some("Address is required"));
        assert_eq!(errors.message(Field::Phone), Some("Phone number is required"));
        assert_eq!(errors.message(Field::Message), Some("Message is required"));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut form = filled();
        form.set(Field::Phone, "   \t".into());

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.fields(), &[Field::Phone]);
        assert_eq!(errors.message(Field::Name), None);
    }

    #[test]
    fn clearing_an_error_leaves_the_rest() {
        let mut errors = ContactForm::default().validate().unwrap_err();
        errors.clear(Field::Message);

        assert_eq!(errors.message(Field::Message), None);
        assert_eq!(errors.fields().len(), 3);
    }

    #[test]
    fn set_and_get_address_the_same_field() {
        let mut form = ContactForm::default();
        for field in Field::ALL {
            form.set(field, field.id().to_uppercase());
        }
        for field in Field::ALL {
            assert_eq!(form.get(field), field.id().to_uppercase());
        }
    }

    #[test]
    fn payload_shape() {
        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Dana K.",
                "address": "12 Shore Rd",
                "phone": "555-0134",
                "message": "Driveway sealing",
            })
        );
    }

    #[test]
    fn button_label_follows_status() {
        assert_eq!(FormStatus::Idle.button_label(), "Submit Request");
        assert_eq!(FormStatus::Submitting.button_label(), "Sending...");
        assert_eq!(
            FormStatus::Error("x".into()).button_label(),
            "Submit Request"
        );
    }

    #[test]
    fn rejected_status_is_in_the_error_text() {
        let err = SubmitError::Rejected(422);
        assert_eq!(
            err.to_string(),
            "the form service rejected the request (HTTP 422)"
        );
        assert!(err.user_message().contains("try again later"));
    }
}
