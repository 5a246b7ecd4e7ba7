//! Authentication DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Login request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Login name
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub user_name: String,
    /// Password
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    /// Signed bearer token
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_rejects_empty_fields() {
        let request = LoginRequest {
            user_name: String::new(),
            password: String::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_login_request_wire_shape() {
        let request: LoginRequest =
            serde_json::from_str(r#"{"userName": "billy", "password": "test"}"#).unwrap();
        assert_eq!(request.user_name, "billy");
        assert!(request.validate().is_ok());
    }
}
