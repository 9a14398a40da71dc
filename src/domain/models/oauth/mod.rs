//! # OAuth Integration Models
//!
//! 외부 OAuth 프로바이더와 주고받는 모델을 정의합니다.

pub mod token_request;

pub use token_request::{GitHubTokenRequest, GoogleTokenRequest};
