//! # Server & Runtime Configuration
//!
//! 서버 바인딩, CORS, 아웃바운드 HTTP 클라이언트 등 런타임 관련 설정을 관리합니다.
//! 모든 설정은 시작 시점에 환경 변수에서 한 번 읽혀 값 구조체로 보관됩니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="production"        # development, test, staging, production
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export SERVER_WORKERS="4"
//! export CORS_ALLOWED_ORIGINS="https://app.example.com,https://admin.example.com"
//! export HTTP_CLIENT_TIMEOUT_SECS="10"
//! ```

use std::env;
use std::time::Duration;
use thiserror::Error;

/// 설정 로딩 실패
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// 필수 환경 변수 누락
    #[error("{0} must be set")]
    MissingVar(&'static str),

    /// 숫자 등 형식이 맞지 않는 값
    #[error("{name} has an invalid value: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// 환경 변수 조회 함수
///
/// 테스트에서는 `HashMap` 기반 조회 함수를 넘겨 전역 환경을 건드리지 않습니다.
pub trait VarLookup: Fn(&str) -> Option<String> {}

impl<F: Fn(&str) -> Option<String>> VarLookup for F {}

/// 프로세스 환경 변수 조회
pub fn process_env(name: &str) -> Option<String> {
    env::var(name).ok()
}

/// 값이 비어 있지 않은 필수 변수를 읽습니다.
pub(crate) fn required_var(lookup: &impl VarLookup, name: &'static str) -> Result<String, ConfigError> {
    lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingVar(name))
}

/// 선택 변수를 읽고, 없거나 비어 있으면 기본값을 사용합니다.
pub(crate) fn optional_var(lookup: &impl VarLookup, name: &str, default: &str) -> String {
    lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parsed_var<T: std::str::FromStr>(
    lookup: &impl VarLookup,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue { name, value: raw }),
        None => Ok(default),
    }
}

/// 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수에서 현재 환경을 결정합니다.
    ///
    /// 값이 없거나 알 수 없는 값이면 `Production`으로 간주합니다.
    pub fn current() -> Self {
        Self::from_name(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 개발용 기본 로그 필터
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development | Environment::Test => "debug,actix_web=info",
            Environment::Staging | Environment::Production => "info,actix_web=info",
        }
    }
}

/// HTTP 서버 바인딩 설정
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&process_env)
    }

    pub fn from_vars(lookup: &impl VarLookup) -> Result<Self, ConfigError> {
        Ok(Self {
            host: optional_var(lookup, "HOST", "0.0.0.0"),
            port: parsed_var(lookup, "PORT", 8080)?,
            workers: parsed_var(lookup, "SERVER_WORKERS", 4)?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS 허용 오리진 설정
#[derive(Debug, Clone, PartialEq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost:3000,http://127.0.0.1:3000,http://localhost:8080,http://127.0.0.1:8080";

impl CorsConfig {
    pub fn from_env() -> Self {
        Self::from_vars(&process_env)
    }

    pub fn from_vars(lookup: &impl VarLookup) -> Self {
        let raw = optional_var(lookup, "CORS_ALLOWED_ORIGINS", DEFAULT_CORS_ORIGINS);
        let allowed_origins = raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Self { allowed_origins }
    }
}

/// 아웃바운드 HTTP 클라이언트 설정
///
/// 프로바이더 호출 전체에 적용되는 요청 타임아웃입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpClientConfig {
    pub timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
        }
    }
}

impl HttpClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&process_env)
    }

    pub fn from_vars(lookup: &impl VarLookup) -> Result<Self, ConfigError> {
        let secs = parsed_var(lookup, "HTTP_CLIENT_TIMEOUT_SECS", 10u64)?;
        Ok(Self {
            timeout: Duration::from_secs(secs),
        })
    }

    /// 설정된 타임아웃으로 `reqwest::Client`를 생성합니다.
    pub fn build_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder().timeout(self.timeout).build()
    }
}
