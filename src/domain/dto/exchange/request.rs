//! 토큰 교환 요청 DTO

use serde::Deserialize;
use validator::Validate;

use crate::utils::string_utils::{
    deserialize_nullable_string, deserialize_optional_string, validate_not_blank,
};

/// `POST /api/v1/auth/{provider}/exchange` 요청 본문
///
/// ```json
/// { "code": "4/0Ab...", "redirectUri": "https://app.example.com/auth/google" }
/// ```
///
/// `code`는 받은 그대로 프로바이더에 전달됩니다. 누락, `null`, 공백뿐인 값은
/// 검증 단계에서 거부됩니다.
/// 공백뿐인 `redirectUri`는 생략된 것으로 취급합니다.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRequest {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(custom(function = "validate_not_blank", message = "Authorization code is required"))]
    pub code: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub redirect_uri: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_code_and_redirect_uri() {
        let json = r#"{"code":"abc","redirectUri":"https://app.example.com/cb"}"#;
        let request: ExchangeRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.code, "abc");
        assert_eq!(request.redirect_uri.as_deref(), Some("https://app.example.com/cb"));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_missing_code_fails_validation() {
        let request: ExchangeRequest = serde_json::from_str("{}").unwrap();

        assert!(request.code.is_empty());
        assert!(request.redirect_uri.is_none());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_blank_code_fails_validation() {
        let request: ExchangeRequest = serde_json::from_str(r#"{"code":"   "}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_code_is_not_trimmed() {
        let request: ExchangeRequest = serde_json::from_str(r#"{"code":" abc "}"#).unwrap();

        assert_eq!(request.code, " abc ");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_null_code_fails_validation() {
        let request: ExchangeRequest = serde_json::from_str(r#"{"code":null}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_blank_redirect_uri_is_treated_as_absent() {
        let request: ExchangeRequest =
            serde_json::from_str(r#"{"code":"abc","redirectUri":""}"#).unwrap();
        assert!(request.redirect_uri.is_none());
    }
}
