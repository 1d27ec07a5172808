use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request DTO for registering a user
///
/// Both fields are optional at the deserialization layer so that a missing
/// field reaches the validator and produces a field-level message instead
/// of a body-level deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserDto {
    /// Display name of the user (required)
    #[validate(
        required(message = "Le champ nom est obligatoire."),
        length(min = 1, message = "Le champ nom ne peut pas être vide.")
    )]
    pub name: Option<String>,

    /// Email address, unique across registered users (required)
    #[validate(
        required(message = "Le champ email est obligatoire."),
        email(message = "Le champ email doit être une adresse e-mail valide.")
    )]
    pub email: Option<String>,
}

/// Response DTO acknowledging a queued registration
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationAckDto {
    /// Confirmation shown to the user
    pub message: String,
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;
    use crate::shared::validation::FieldErrors;

    fn dto(name: Option<&str>, email: Option<&str>) -> RegisterUserDto {
        RegisterUserDto {
            name: name.map(String::from),
            email: email.map(String::from),
        }
    }

    #[test]
    fn test_valid_registration_passes() {
        assert!(dto(Some("Alice"), Some("alice@example.com"))
            .validate()
            .is_ok());
    }

    #[test]
    fn test_missing_name_is_reported_per_field() {
        let err = dto(None, Some("alice@example.com")).validate().unwrap_err();
        let errors = FieldErrors::from(err);

        assert!(errors.contains("name"));
        assert!(!errors.contains("email"));
        assert_eq!(
            errors.messages("name"),
            Some(&vec!["Le champ nom est obligatoire.".to_string()])
        );
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let err = dto(Some(""), Some("alice@example.com"))
            .validate()
            .unwrap_err();
        let errors = FieldErrors::from(err);

        assert_eq!(
            errors.messages("name"),
            Some(&vec!["Le champ nom ne peut pas être vide.".to_string()])
        );
    }

    #[test]
    fn test_missing_email_is_reported_per_field() {
        let err = dto(Some("Alice"), None).validate().unwrap_err();
        let errors = FieldErrors::from(err);

        assert_eq!(
            errors.messages("email"),
            Some(&vec!["Le champ email est obligatoire.".to_string()])
        );
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        let err = dto(Some("Alice"), Some("not-an-email"))
            .validate()
            .unwrap_err();
        let errors = FieldErrors::from(err);

        assert_eq!(
            errors.messages("email"),
            Some(&vec![
                "Le champ email doit être une adresse e-mail valide.".to_string()
            ])
        );
    }

    #[test]
    fn test_both_fields_missing_reports_both() {
        let err = dto(None, None).validate().unwrap_err();
        let errors = FieldErrors::from(err);

        assert!(errors.contains("name"));
        assert!(errors.contains("email"));
    }
}
