// API request/response contract types

use serde::{Deserialize, Serialize};

/// A demo user record
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: &'static str,
    pub email: &'static str,
}

/// The fixed demo user directory.
///
/// Loaded once at compile time, never mutated, identical across all
/// requests for the process lifetime. Serialized in this order.
pub const USERS: [User; 3] = [
    User {
        id: 1,
        name: "Jan Kowalski",
        email: "jan@example.com",
    },
    User {
        id: 2,
        name: "Anna Nowak",
        email: "anna@example.com",
    },
    User {
        id: 3,
        name: "Piotr Wiśniewski",
        email: "piotr@example.com",
    },
];

/// Incoming contact-form submission.
///
/// All fields are optional at the deserialization boundary so that a
/// missing key, a JSON `null`, and an empty string can all be reported
/// with the same validation error.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl ContactForm {
    /// All three fields present and non-empty
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|field| field.as_deref().is_some_and(|value| !value.is_empty()))
    }
}

/// Health check response body
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
}

/// Contact submission acknowledgement
#[derive(Debug, Serialize)]
pub struct ContactAck {
    pub success: bool,
    pub message: &'static str,
}

/// Uniform error body for every failure path
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: Option<&str>, email: Option<&str>, message: Option<&str>) -> ContactForm {
        ContactForm {
            name: name.map(ToString::to_string),
            email: email.map(ToString::to_string),
            message: message.map(ToString::to_string),
        }
    }

    #[test]
    fn test_complete_form() {
        assert!(form(Some("Jan"), Some("jan@example.com"), Some("Hello")).is_complete());
    }

    #[test]
    fn test_missing_field() {
        assert!(!form(Some("Jan"), Some("jan@example.com"), None).is_complete());
        assert!(!form(None, None, None).is_complete());
    }

    #[test]
    fn test_empty_string_counts_as_absent() {
        assert!(!form(Some("Jan"), Some(""), Some("Hello")).is_complete());
    }

    #[test]
    fn test_null_field_deserializes_as_absent() {
        let form: ContactForm =
            serde_json::from_str(r#"{"name":"Jan","email":null,"message":"Hi"}"#).unwrap();
        assert!(!form.is_complete());
    }

    #[test]
    fn test_users_are_fixed() {
        assert_eq!(USERS.len(), 3);
        assert_eq!(USERS[0].id, 1);
        assert_eq!(USERS[0].name, "Jan Kowalski");
        assert_eq!(USERS[2].email, "piotr@example.com");
    }
}
