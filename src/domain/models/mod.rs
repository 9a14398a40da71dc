//! # Domain Models
//!
//! 외부 시스템 통합 모델 (OAuth 프로바이더 요청 본문 등)

pub mod oauth;

pub use oauth::*;
