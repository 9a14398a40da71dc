//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 외부 OAuth 프로바이더와의 통신을 담당합니다.
//!
//! # Features
//!
//! - GitHub authorization code → 액세스 토큰 교환
//! - Google authorization code → 토큰 교환 + 사용자 정보 병합
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{GitHubExchangeService, GoogleExchangeService};
//! ```

pub mod auth;
