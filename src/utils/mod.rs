//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 요청 본문 문자열 정리
//! - [`request_origin`] - 요청 오리진과 기본 리디렉션 URI 계산
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들

pub mod string_utils;
pub mod request_origin;
pub mod display_terminal;
