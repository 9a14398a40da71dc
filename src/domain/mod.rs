//! # Domain Layer Module
//!
//! 토큰 교환 서비스가 다루는 데이터 모델을 정의합니다.
//! 영속 상태는 없으며 모든 값은 한 번의 요청 동안만 존재합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── DTOs         - API 요청/응답 계약 (ExchangeRequest, ProviderTokenResponse)
//! └── Models       - 프로바이더로 보내는 아웃바운드 요청 본문
//!      │
//!      ▼
//! Application Layer (Services)
//! ```

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
