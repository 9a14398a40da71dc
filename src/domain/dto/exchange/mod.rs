//! # Exchange DTOs
//!
//! 토큰 교환 엔드포인트의 요청/응답 계약입니다.

pub mod request;
pub mod response;

pub use request::ExchangeRequest;
pub use response::{GoogleUserInfo, ProviderTokenResponse};
