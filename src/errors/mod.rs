//! # Errors Module
//!
//! 핸들러 경계에서 사용하는 `AppError`와 관련 헬퍼를 제공합니다.

pub mod errors;

pub use errors::*;
