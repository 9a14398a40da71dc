//! 토큰 교환 응답 DTO
//!
//! 프로바이더 응답은 고정 스키마가 아니므로 JSON 객체를 그대로 보관합니다.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 프로바이더 토큰 응답
///
/// `access_token`, `token_type`, `scope` 등 프로바이더가 돌려준 필드를
/// 가공 없이 전달합니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderTokenResponse(pub Map<String, Value>);

impl ProviderTokenResponse {
    /// 비어 있지 않은 문자열 `access_token`이 있으면 반환합니다.
    pub fn access_token(&self) -> Option<&str> {
        self.0
            .get("access_token")
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
    }

    /// 사용자 프로필을 `user` 필드로 병합합니다.
    pub fn with_user(mut self, user: GoogleUserInfo) -> Self {
        self.0.insert("user".to_string(), user.0);
        self
    }
}

/// Google userinfo 응답
///
/// 프로필 필드는 스코프에 따라 달라지므로 JSON 값을 그대로 보관합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoogleUserInfo(pub Value);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn token_response(value: Value) -> ProviderTokenResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_access_token_lookup() {
        assert_eq!(
            token_response(json!({"access_token": "T", "token_type": "bearer"})).access_token(),
            Some("T")
        );
        assert_eq!(token_response(json!({"access_token": ""})).access_token(), None);
        assert_eq!(token_response(json!({"access_token": 42})).access_token(), None);
        assert_eq!(token_response(json!({"error": "bad_verification_code"})).access_token(), None);
    }

    #[test]
    fn test_with_user_merges_profile() {
        let merged = token_response(json!({"access_token": "T"}))
            .with_user(GoogleUserInfo(json!({"email": "a@b.com"})));

        assert_eq!(
            serde_json::to_value(&merged).unwrap(),
            json!({"access_token": "T", "user": {"email": "a@b.com"}})
        );
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        let result: Result<ProviderTokenResponse, _> = serde_json::from_str("[1,2,3]");
        assert!(result.is_err());
    }
}
