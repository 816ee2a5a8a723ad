//! User credentials for the ALEX server.

use serde::Serialize;

use crate::domain::errors::{RunError, RunResult};

/// Email and password pair sent to `POST /rest/users/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Parse a single `email:password` token as passed to `--user`.
    ///
    /// Splits on the first `:` so passwords may contain colons. Both
    /// halves must be non-empty.
    pub fn parse(token: &str) -> RunResult<Self> {
        let (email, password) = token.split_once(':').ok_or_else(|| {
            RunError::ConfigValidation(format!(
                "--user must be of the form email:password, got {token:?}"
            ))
        })?;

        if email.is_empty() {
            return Err(RunError::ConfigValidation(
                "--user has an empty email".to_string(),
            ));
        }
        if password.is_empty() {
            return Err(RunError::ConfigValidation(
                "--user has an empty password".to_string(),
            ));
        }

        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let creds = Credentials::parse("admin@alex.example:admin").unwrap();
        assert_eq!(creds.email, "admin@alex.example");
        assert_eq!(creds.password, "admin");
    }

    #[test]
    fn test_parse_password_with_colon() {
        let creds = Credentials::parse("a@b.c:p:ss:word").unwrap();
        assert_eq!(creds.email, "a@b.c");
        assert_eq!(creds.password, "p:ss:word");
    }

    #[test]
    fn test_parse_missing_separator() {
        let err = Credentials::parse("admin").unwrap_err();
        assert!(matches!(err, RunError::ConfigValidation(_)));
    }

    #[test]
    fn test_parse_empty_email() {
        let err = Credentials::parse(":secret").unwrap_err();
        assert!(err.to_string().contains("empty email"));
    }

    #[test]
    fn test_parse_empty_password() {
        let err = Credentials::parse("a@b.c:").unwrap_err();
        assert!(err.to_string().contains("empty password"));
    }

    #[test]
    fn test_serializes_to_login_body() {
        let creds = Credentials::parse("a@b.c:secret").unwrap();
        let json = serde_json::to_value(&creds).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "email": "a@b.c", "password": "secret" })
        );
    }
}
