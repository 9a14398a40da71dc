//! # OAuth Provider Configuration Module
//!
//! GitHub, Google OAuth 클라이언트 자격 증명과 엔드포인트 설정을 관리합니다.
//! 자격 증명은 반드시 환경 변수로만 주입되며 소스 코드에 하드코딩하지 않습니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### GitHub OAuth 설정
//! ```bash
//! export GITHUB_CLIENT_ID="your-github-client-id"
//! export GITHUB_CLIENT_SECRET="your-github-client-secret"
//! # 선택: 토큰 엔드포인트 재정의
//! export GITHUB_TOKEN_URI="https://github.com/login/oauth/access_token"
//! ```
//!
//! ### Google OAuth 설정
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! # 선택: 엔드포인트 재정의
//! export GOOGLE_TOKEN_URI="https://oauth2.googleapis.com/token"
//! export GOOGLE_USERINFO_URI="https://www.googleapis.com/oauth2/v3/userinfo"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{GitHubOAuthConfig, GoogleOAuthConfig};
//!
//! let github = GitHubOAuthConfig::from_env()?;
//! let google = GoogleOAuthConfig::from_env()?;
//! ```

use std::fmt;

use super::data_config::{optional_var, process_env, required_var, ConfigError, VarLookup};

/// GitHub 토큰 교환 엔드포인트 기본값
pub const GITHUB_TOKEN_URI: &str = "https://github.com/login/oauth/access_token";

/// Google 토큰 교환 엔드포인트 기본값
pub const GOOGLE_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Google 사용자 정보 엔드포인트 기본값
pub const GOOGLE_USERINFO_URI: &str = "https://www.googleapis.com/oauth2/v3/userinfo";

/// 민감한 문자열 래퍼
///
/// `Debug`/`Display` 출력에서 값을 가려 로그에 비밀값이 남지 않도록 합니다.
#[derive(Clone, PartialEq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// 원본 값을 노출합니다. 아웃바운드 요청 본문을 만들 때만 사용하세요.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// GitHub OAuth App 설정
///
/// GitHub Developer Settings > OAuth Apps 에서 발급한 클라이언트 정보를 보관합니다.
///
/// ## 보안 고려사항
///
/// - `client_secret`은 절대 클라이언트 사이드에 노출되어서는 안 됩니다
/// - 이 값을 로그에 출력하지 마세요 (`Secret`이 출력을 가립니다)
#[derive(Debug, Clone, PartialEq)]
pub struct GitHubOAuthConfig {
    pub client_id: String,
    pub client_secret: Secret,
    pub token_uri: String,
}

impl GitHubOAuthConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    ///
    /// # Errors
    ///
    /// `GITHUB_CLIENT_ID` 또는 `GITHUB_CLIENT_SECRET`이 없으면 `ConfigError::MissingVar`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&process_env)
    }

    pub fn from_vars(lookup: &impl VarLookup) -> Result<Self, ConfigError> {
        Ok(Self {
            client_id: required_var(lookup, "GITHUB_CLIENT_ID")?,
            client_secret: Secret::new(required_var(lookup, "GITHUB_CLIENT_SECRET")?),
            token_uri: optional_var(lookup, "GITHUB_TOKEN_URI", GITHUB_TOKEN_URI),
        })
    }
}

/// Google OAuth 2.0 클라이언트 설정
///
/// Google Cloud Console 에서 생성한 OAuth 2.0 클라이언트 정보를 관리합니다.
///
/// ## Google Cloud Console 설정 가이드
///
/// 1. [Google Cloud Console](https://console.cloud.google.com/) 접속
/// 2. APIs & Services > Credentials로 이동
/// 3. OAuth 2.0 Client IDs 생성
/// 4. 승인된 리디렉션 URI 추가: `https://yourdomain.com/auth/google`
#[derive(Debug, Clone, PartialEq)]
pub struct GoogleOAuthConfig {
    pub client_id: String,
    pub client_secret: Secret,
    pub token_uri: String,
    pub userinfo_uri: String,
}

impl GoogleOAuthConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    ///
    /// # Errors
    ///
    /// `GOOGLE_CLIENT_ID` 또는 `GOOGLE_CLIENT_SECRET`이 없으면 `ConfigError::MissingVar`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&process_env)
    }

    pub fn from_vars(lookup: &impl VarLookup) -> Result<Self, ConfigError> {
        Ok(Self {
            client_id: required_var(lookup, "GOOGLE_CLIENT_ID")?,
            client_secret: Secret::new(required_var(lookup, "GOOGLE_CLIENT_SECRET")?),
            token_uri: optional_var(lookup, "GOOGLE_TOKEN_URI", GOOGLE_TOKEN_URI),
            userinfo_uri: optional_var(lookup, "GOOGLE_USERINFO_URI", GOOGLE_USERINFO_URI),
        })
    }
}

/// 지원하는 OAuth 프로바이더
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    GitHub,
    Google,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::GitHub => "github",
            AuthProvider::Google => "google",
        }
    }

    /// redirectUri가 없을 때 요청 오리진 뒤에 붙는 콜백 경로
    pub fn callback_path(&self) -> &'static str {
        match self {
            AuthProvider::GitHub => "/auth-github-copy",
            AuthProvider::Google => "/auth/google",
        }
    }
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_github_config_uses_default_token_uri() {
        let config = GitHubOAuthConfig::from_vars(&lookup_from(&[
            ("GITHUB_CLIENT_ID", "gh-id"),
            ("GITHUB_CLIENT_SECRET", "gh-secret"),
        ]))
        .unwrap();

        assert_eq!(config.client_id, "gh-id");
        assert_eq!(config.client_secret.expose(), "gh-secret");
        assert_eq!(config.token_uri, GITHUB_TOKEN_URI);
    }

    #[test]
    fn test_github_config_requires_secret() {
        let result = GitHubOAuthConfig::from_vars(&lookup_from(&[("GITHUB_CLIENT_ID", "gh-id")]));
        assert_eq!(result, Err(ConfigError::MissingVar("GITHUB_CLIENT_SECRET")));
    }

    #[test]
    fn test_google_config_overrides() {
        let config = GoogleOAuthConfig::from_vars(&lookup_from(&[
            ("GOOGLE_CLIENT_ID", "g-id"),
            ("GOOGLE_CLIENT_SECRET", "g-secret"),
            ("GOOGLE_TOKEN_URI", "http://127.0.0.1:9000/token"),
        ]))
        .unwrap();

        assert_eq!(config.token_uri, "http://127.0.0.1:9000/token");
        assert_eq!(config.userinfo_uri, GOOGLE_USERINFO_URI);
    }

    #[test]
    fn test_google_config_requires_client_id() {
        let result = GoogleOAuthConfig::from_vars(&lookup_from(&[]));
        assert_eq!(result, Err(ConfigError::MissingVar("GOOGLE_CLIENT_ID")));
    }

    #[test]
    fn test_secret_is_redacted_in_debug_output() {
        let config = GitHubOAuthConfig {
            client_id: "gh-id".to_string(),
            client_secret: Secret::new("super-secret"),
            token_uri: GITHUB_TOKEN_URI.to_string(),
        };

        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("Secret(***)"));
    }

    #[test]
    fn test_callback_paths() {
        assert_eq!(AuthProvider::GitHub.callback_path(), "/auth-github-copy");
        assert_eq!(AuthProvider::Google.callback_path(), "/auth/google");
    }

    #[test]
    fn test_auth_provider_serialization() {
        assert_eq!(serde_json::to_string(&AuthProvider::GitHub).unwrap(), "\"github\"");
        assert_eq!(serde_json::to_string(&AuthProvider::Google).unwrap(), "\"google\"");
        assert_eq!(AuthProvider::Google.to_string(), "google");
    }
}
