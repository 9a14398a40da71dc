//! # Configuration Module
//!
//! 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 시작 시점에 한 번 읽어 값 구조체로 보관합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, CORS, HTTP 클라이언트, 환경 관련 설정
//! - [`auth_config`] - GitHub/Google OAuth 클라이언트 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 보안 우선 (Security First)
//!
//! - OAuth 자격 증명은 환경 변수로만 제공
//! - 필수 값 누락 시 서버가 시작되지 않음 (`ConfigError`)
//! - 비밀값은 `Secret`으로 감싸 로그 출력에서 가려짐
//!
//! ### 2. 테스트 가능성 (Testability)
//!
//! 모든 설정 구조체는 `from_vars`로 임의의 조회 함수를 받을 수 있어
//! 테스트가 전역 환경 변수를 수정하지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{ServerConfig, GitHubOAuthConfig};
//!
//! let server = ServerConfig::from_env()?;
//! println!("Server will bind to {}", server.bind_address());
//!
//! let github = GitHubOAuthConfig::from_env()?;
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
