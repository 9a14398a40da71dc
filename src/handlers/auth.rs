//! Token Exchange HTTP Handlers
//!
//! 프론트엔드가 OAuth 리디렉션으로 받은 authorization code를
//! 서버에서 프로바이더 토큰으로 교환하는 엔드포인트입니다.
//!
//! # Endpoints
//!
//! - `POST /api/v1/auth/github/exchange` - GitHub 토큰 교환
//! - `POST /api/v1/auth/google/exchange` - Google 토큰 교환 + 사용자 정보
//!
//! 두 엔드포인트 모두 POST 이외의 메서드에는 405를 반환하며,
//! 어떤 실패든 `{"error": "..."}` JSON으로 응답합니다.
use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::domain::ExchangeRequest;
use crate::errors::{AppError, ErrorContext};
use crate::services::auth::{CodeExchangeService, GitHubExchangeService, GoogleExchangeService};
use crate::utils::request_origin::resolve_redirect_uri;

/// 교환 요청 본문 크기 한도 (256 KiB)
pub const MAX_BODY_BYTES: usize = 256 * 1024;

const BODY_TOO_LARGE_MESSAGE: &str = "Request body too large";

/// GitHub 토큰 교환 핸들러
///
/// # Endpoint
/// `POST /api/v1/auth/github/exchange`
///
/// `redirectUri`가 없으면 `{origin}/auth-github-copy`를 사용합니다.
pub async fn github_exchange(
    req: HttpRequest,
    payload: web::Payload,
    service: web::Data<GitHubExchangeService>,
) -> Result<HttpResponse, AppError> {
    let body = read_body(payload).await?;
    exchange(&req, &body, service.get_ref()).await
}

/// Google 토큰 교환 핸들러
///
/// # Endpoint
/// `POST /api/v1/auth/google/exchange`
///
/// `redirectUri`가 없으면 `{origin}/auth/google`을 사용합니다.
/// 응답에는 가능한 경우 `user` 필드로 프로필이 병합됩니다.
pub async fn google_exchange(
    req: HttpRequest,
    payload: web::Payload,
    service: web::Data<GoogleExchangeService>,
) -> Result<HttpResponse, AppError> {
    let body = read_body(payload).await?;
    exchange(&req, &body, service.get_ref()).await
}

/// 교환 엔드포인트에 POST 이외의 메서드로 접근한 경우
pub async fn method_not_allowed() -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed)
}

/// 요청 본문을 최대 [`MAX_BODY_BYTES`]까지 읽습니다.
///
/// `web::Bytes` 추출기는 한도 초과 시 평문 413을 돌려주므로, 본문을 직접 읽어
/// 한도 초과는 400, 스트림 오류는 500의 JSON 응답이 되도록 합니다.
async fn read_body(payload: web::Payload) -> Result<web::Bytes, AppError> {
    payload
        .to_bytes_limited(MAX_BODY_BYTES)
        .await
        .map_err(|_| AppError::InvalidRequest(BODY_TOO_LARGE_MESSAGE.to_string()))?
        .context("요청 본문 수신 실패")
}

async fn exchange(
    req: &HttpRequest,
    body: &[u8],
    service: &dyn CodeExchangeService,
) -> Result<HttpResponse, AppError> {
    let payload = parse_exchange_request(body)?;
    let provider = service.provider();

    let redirect_uri = resolve_redirect_uri(req, payload.redirect_uri.as_deref(), provider);
    log::info!("{} 토큰 교환 요청 - redirect_uri: {}", provider, redirect_uri);

    let token = service.exchange_code(&payload.code, &redirect_uri).await?;

    Ok(HttpResponse::Ok().json(token))
}

/// 요청 본문을 파싱하고 검증합니다.
///
/// JSON 문법 오류는 예상하지 못한 실패(500)로, 필드 누락/형식 오류는
/// 잘못된 요청(400)으로 분류합니다.
fn parse_exchange_request(body: &[u8]) -> Result<ExchangeRequest, AppError> {
    let value: serde_json::Value =
        serde_json::from_slice(body).context("요청 본문 JSON 파싱 실패")?;

    let payload: ExchangeRequest = serde_json::from_value(value)
        .map_err(|e| AppError::InvalidRequest(format!("Invalid request body: {}", e)))?;

    payload.validate().map_err(|_| {
        AppError::InvalidRequest("Authorization code is required".to_string())
    })?;

    Ok(payload)
}
