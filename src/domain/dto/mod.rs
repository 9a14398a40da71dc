//! # Data Transfer Objects
//!
//! HTTP API 계약을 정의하는 요청/응답 구조체 모음입니다.
//!
//! - [`exchange`] - 인증 코드 → 토큰 교환 요청과 프로바이더 응답

pub mod exchange;

pub use exchange::*;
