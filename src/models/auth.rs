// ============================================================================
// AUTH - DTOs de autenticación (login y registro)
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Respuesta de autenticación del backend.
/// Solo el token es obligatorio; el resto de campos se toleran si faltan.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(rename = "userId", default)]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub roles: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_only_response() {
        let json = r#"{"token":"abc"}"#;
        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token, "abc");
        assert_eq!(response.user_id, None);
        assert_eq!(response.roles, None);
    }

    #[test]
    fn test_parse_full_response() {
        let json = r#"{
            "token": "eyJhbGc.xyz",
            "userId": 7,
            "name": "Ana",
            "email": "ana@cafe.com",
            "roles": ["ROLE_USER"]
        }"#;
        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token, "eyJhbGc.xyz");
        assert_eq!(response.user_id, Some(7));
        assert_eq!(response.roles, Some(vec!["ROLE_USER".to_string()]));
    }

    #[test]
    fn test_response_without_token_is_error() {
        // Cuerpo malformado (sin token) se trata como fallo de login
        let json = r#"{"userId": 7}"#;
        assert!(serde_json::from_str::<AuthResponse>(json).is_err());
    }

    #[test]
    fn test_serialize_login_request() {
        let request = LoginRequest {
            email: "ana@cafe.com".to_string(),
            password: "secreto".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["email"], "ana@cafe.com");
        assert_eq!(json["password"], "secreto");
    }
}
