//! UI 정적 리소스 핸들러
//!
//! - `GET /ui/select.css` - 스타일 셀렉트 하이라이트 규칙

use actix_web::http::header::{CacheControl, CacheDirective, ContentType};
use actix_web::{mime, HttpResponse};

use crate::ui::SELECT_STYLESHEET;

/// 셀렉트 스타일시트를 반환합니다.
///
/// 내용이 바이너리에 고정되어 있으므로 하루 동안 캐시를 허용합니다.
pub async fn select_stylesheet() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(ContentType(mime::TEXT_CSS_UTF_8))
        .insert_header(CacheControl(vec![
            CacheDirective::Public,
            CacheDirective::MaxAge(86_400),
        ]))
        .body(SELECT_STYLESHEET)
}
