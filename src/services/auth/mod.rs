//! 인증 코드 교환 서비스 모듈
//!
//! 프로바이더별 토큰 교환 서비스를 제공합니다. 모든 서비스는 상태가 없으며
//! 생성 이후 불변이므로 `web::Data`로 워커 간에 공유됩니다.
//!
//! # Providers
//!
//! - [`GitHubExchangeService`] - JSON 본문으로 GitHub 토큰 엔드포인트 호출
//! - [`GoogleExchangeService`] - form 본문으로 토큰 교환 후 userinfo 병합
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{CodeExchangeService, GitHubExchangeService};
//!
//! let service = GitHubExchangeService::new(GitHubOAuthConfig::from_env()?, &HttpClientConfig::default())?;
//! let token = service.exchange_code("code", "https://app.example.com/auth-github-copy").await?;
//! ```

pub mod code_exchange;
pub mod github_exchange_service;
pub mod google_exchange_service;

pub use code_exchange::*;
pub use github_exchange_service::*;
pub use google_exchange_service::*;
