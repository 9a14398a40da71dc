//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (SPA 프론트엔드)
//! └─────────────────────┬───────────────────────┘
//!                       │ POST {code, redirectUri?}
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 요청 파싱/검증, 응답 변환   ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 프로바이더 토큰 교환                ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   GitHub / Google OAuth 엔드포인트              ← Upstream
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 서비스를 `web::Data`로 주입받으며, 모든 실패는 [`AppError`]로
//! 변환되어 `{"error": "..."}` 본문으로 응답됩니다.
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 토큰 교환 엔드포인트
//!   - `POST /api/v1/auth/github/exchange`
//!   - `POST /api/v1/auth/google/exchange`
//! - **`ui`**: 셀렉트 컴포넌트 스타일시트 (`GET /ui/select.css`)
//!
//! [`AppError`]: crate::errors::AppError

pub mod auth;
pub mod ui;
