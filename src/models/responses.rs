use serde::{Deserialize, Deserializer};

/// Envelope returned by the auth endpoints
///
/// Success looks like `{"success": true, "userId": ..., "name": ...}`; a
/// body without the success flag is a denial. The backend serializes
/// `userId` as a JSON number today, but the identifier is opaque to this
/// client, so both number and string forms are accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(rename = "userId", default, deserialize_with = "opaque_id")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Error body attached to non-2xx responses (`{"error": "..."}`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Accepts an id that arrives as either a JSON number or a string
fn opaque_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Num(i64),
        Str(String),
    }

    let repr = Option::<Repr>::deserialize(deserializer)?;
    Ok(repr.map(|id| match id {
        Repr::Num(n) => n.to_string(),
        Repr::Str(s) => s,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_numeric_user_id() {
        let body: AuthResponse =
            serde_json::from_str(r#"{"success": true, "userId": 42, "name": "Ann"}"#).unwrap();
        assert!(body.success);
        assert_eq!(body.user_id.as_deref(), Some("42"));
        assert_eq!(body.name.as_deref(), Some("Ann"));
    }

    #[test]
    fn test_auth_response_string_user_id() {
        let body: AuthResponse =
            serde_json::from_str(r#"{"success": true, "userId": "u1"}"#).unwrap();
        assert_eq!(body.user_id.as_deref(), Some("u1"));
        assert_eq!(body.name, None);
    }

    #[test]
    fn test_auth_response_denial_has_no_success_flag() {
        let body: AuthResponse =
            serde_json::from_str(r#"{"error": "Invalid credentials"}"#).unwrap();
        assert!(!body.success);
        assert_eq!(body.user_id, None);
        assert_eq!(body.error.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn test_auth_response_ignores_unknown_fields() {
        let body: AuthResponse =
            serde_json::from_str(r#"{"success": true, "userId": 1, "sessionToken": "abc"}"#)
                .unwrap();
        assert_eq!(body.user_id.as_deref(), Some("1"));
    }
}
