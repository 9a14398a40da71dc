//! API 라우트 설정 모듈
//!
//! 토큰 교환 엔드포인트, UI 리소스, 헬스체크를 한곳에서 등록합니다.
//!
//! # Routes
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `GET` | `/health` | [`health_check`] |
//! | `POST` | `/api/v1/auth/github/exchange` | [`handlers::auth::github_exchange`] |
//! | `POST` | `/api/v1/auth/google/exchange` | [`handlers::auth::google_exchange`] |
//! | `GET` | `/ui/select.css` | [`handlers::ui::select_stylesheet`] |
//!
//! 교환 엔드포인트는 `web::resource`로 등록되어, POST 이외의 메서드는
//! 핸들러 기본 서비스에서 JSON 405로 응답합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(github_service))
//!     .app_data(web::Data::new(google_service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::config::AuthProvider;
use crate::handlers;

/// 시작 배너에 출력되는 라우트 목록
pub const ROUTE_TABLE: &[(&str, &str)] = &[
    ("GET", "/health"),
    ("POST", "/api/v1/auth/github/exchange"),
    ("POST", "/api/v1/auth/google/exchange"),
    ("GET", "/ui/select.css"),
];

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_exchange_routes(cfg);
    configure_ui_routes(cfg);
}

/// 토큰 교환 라우트를 설정합니다
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/auth/github/exchange \
///   -H "Content-Type: application/json" \
///   -d '{"code":"abc123"}'
/// ```
fn configure_exchange_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(
                web::resource("/github/exchange")
                    .route(web::post().to(handlers::auth::github_exchange))
                    .default_service(web::to(handlers::auth::method_not_allowed)),
            )
            .service(
                web::resource("/google/exchange")
                    .route(web::post().to(handlers::auth::google_exchange))
                    .default_service(web::to(handlers::auth::method_not_allowed)),
            ),
    );
}

fn configure_ui_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/ui")
            .route("/select.css", web::get().to(handlers::ui::select_stylesheet)),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "oauth_exchange_service",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00+00:00",
///   "providers": ["github", "google"]
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "providers": [AuthProvider::GitHub, AuthProvider::Google],
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "oauth_exchange_service");
        assert_eq!(body["providers"], json!(["github", "google"]));
        assert!(body["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn test_unknown_route_is_not_found() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/api/v1/auth/gitlab/exchange").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_route_table_lists_exchange_endpoints() {
        assert!(ROUTE_TABLE.contains(&("POST", "/api/v1/auth/github/exchange")));
        assert!(ROUTE_TABLE.contains(&("POST", "/api/v1/auth/google/exchange")));
    }
}
