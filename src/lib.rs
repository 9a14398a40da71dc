//! OAuth 토큰 교환 서비스
//!
//! 브라우저 SPA가 OAuth 리디렉션으로 받은 authorization code를 서버 측에서
//! 프로바이더 토큰으로 교환해 주는 상태 없는 프록시입니다. client secret은
//! 환경변수로만 주입되며 브라우저에 노출되지 않습니다.
//!
//! # Features
//!
//! - **GitHub**: code → access token 교환, 응답 본문 그대로 전달
//! - **Google**: code → token 교환 후 사용자 프로필을 `user` 필드로 병합
//! - **UI**: 색상 토큰 기반 스타일 셀렉트 컴포넌트와 정적 스타일시트
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 파싱/검증, redirect_uri 결정
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← CodeExchangeService 구현체
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ GitHub / Google │ ← 프로바이더 토큰 엔드포인트
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use oauth_exchange_service::config::{GitHubOAuthConfig, HttpClientConfig};
//! use oauth_exchange_service::services::auth::{CodeExchangeService, GitHubExchangeService};
//!
//! let service = GitHubExchangeService::new(GitHubOAuthConfig::from_env()?, &HttpClientConfig::from_env()?)?;
//! let token = service.exchange_code("abc123", "http://localhost:3000/auth-github-copy").await?;
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod testing;
