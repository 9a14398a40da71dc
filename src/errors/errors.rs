//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 토큰 교환 핸들러를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 에러를
//! 핸들러 경계에서 `{"error": "..."}` 형태의 JSON 응답으로 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 응답 메시지 |
//! |----------|-------------|-------------|
//! | `InvalidRequest` | 400 Bad Request | 검증 메시지 그대로 |
//! | `MethodNotAllowed` | 405 Method Not Allowed | `Method not allowed` |
//! | `UpstreamError` | 400 Bad Request | 고정 메시지 (프로바이더 본문은 로그로만) |
//! | `InternalError` | 500 Internal Server Error | `Internal server error` |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! fn require_code(code: &str) -> Result<(), AppError> {
//!     if code.is_empty() {
//!         return Err(AppError::InvalidRequest("Authorization code is required".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// 클라이언트에 노출되는 405 응답 메시지
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";

/// 클라이언트에 노출되는 500 응답 메시지
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// 애플리케이션 전역 에러 타입
///
/// 토큰 교환 요청 처리 중 발생할 수 있는 모든 실패를 포괄합니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 클라이언트 요청 오류 (400 Bad Request)
    #[error("{0}")]
    InvalidRequest(String),

    /// POST 이외의 메서드 (405 Method Not Allowed)
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// 프로바이더가 코드 교환을 거부함 (400 Bad Request)
    #[error("{0}")]
    UpstreamError(String),

    /// 예상하지 못한 실패 (500 Internal Server Error)
    ///
    /// 내부 메시지는 로그에만 남고 응답 본문에는 고정 문구만 담깁니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 본문의 `error` 필드에 들어갈 메시지
    pub fn public_message(&self) -> String {
        match self {
            AppError::InvalidRequest(msg) | AppError::UpstreamError(msg) => msg.clone(),
            AppError::MethodNotAllowed => METHOD_NOT_ALLOWED_MESSAGE.to_string(),
            AppError::InternalError(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) | AppError::UpstreamError(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> HttpResponse {
        if let AppError::InternalError(detail) = self {
            log::error!("요청 처리 중 내부 오류: {}", detail);
        }

        HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.public_message()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 `InternalError`로 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
