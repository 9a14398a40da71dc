//! # 문자열 유틸리티
//!
//! 요청 본문 문자열 정리와 관련된 공통 유틸리티 함수들입니다.

use serde::Deserialize;
use validator::ValidationError;

/// 옵셔널 문자열을 정리합니다
///
/// 앞뒤 공백을 제거하고, 결과가 빈 문자열이면 `None`을 반환합니다.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(clean_optional_string(Some("  hi  ".to_string())), Some("hi".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// serde 역직렬화 시 옵셔널 문자열을 정리합니다
///
/// `null`, 빈 문자열, 공백 문자열은 모두 `None`이 됩니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// serde 역직렬화 시 `null`을 빈 문자열로 바꿉니다
///
/// 값 자체는 손대지 않고 그대로 보존합니다. 빈 값은 이후 검증 단계에서 걸러집니다.
pub fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// 공백만으로 이루어진 문자열을 거부하는 `validator` 커스텀 규칙
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
