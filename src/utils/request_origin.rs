//! 요청 오리진 / 리디렉션 URI 헬퍼
//!
//! 클라이언트가 `redirectUri`를 보내지 않으면 요청이 들어온 오리진에
//! 프로바이더별 고정 콜백 경로를 붙여 리디렉션 URI를 만듭니다.

use actix_web::HttpRequest;

use crate::config::AuthProvider;

/// 요청의 오리진 (`scheme://host[:port]`)
///
/// `ConnectionInfo`를 사용하므로 `Forwarded` / `X-Forwarded-*` 헤더가 반영됩니다.
pub fn request_origin(req: &HttpRequest) -> String {
    let info = req.connection_info();
    format!("{}://{}", info.scheme(), info.host())
}

/// 오리진과 콜백 경로로 기본 리디렉션 URI를 만듭니다.
pub fn default_redirect_uri(origin: &str, provider: AuthProvider) -> String {
    format!("{}{}", origin.trim_end_matches('/'), provider.callback_path())
}

/// 요청에 명시된 URI가 있으면 그대로, 없으면 기본 URI를 사용합니다.
pub fn resolve_redirect_uri(
    req: &HttpRequest,
    requested: Option<&str>,
    provider: AuthProvider,
) -> String {
    match requested {
        Some(uri) => uri.to_string(),
        None => default_redirect_uri(&request_origin(req), provider),
    }
}
