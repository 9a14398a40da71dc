//! 테스트 지원 유틸리티
//!
//! 실제 `reqwest` 호출 경로를 검증하기 위해 `127.0.0.1:0`에 바인딩되는
//! 인프로세스 actix 서버로 프로바이더를 대신합니다.

use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use actix_web::dev::{Service, ServerHandle};
use actix_web::{web, App, HttpServer};

use crate::config::{
    GitHubOAuthConfig, GoogleOAuthConfig, HttpClientConfig, Secret,
};
use crate::services::auth::{GitHubExchangeService, GoogleExchangeService};

/// 연결이 거부되는 주소
///
/// 임시 포트에 바인딩한 뒤 곧바로 리스너를 닫아, 아무도 듣지 않는 포트를 얻습니다.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind(("127.0.0.1", 0)).expect("bind ephemeral port");
    let addr = listener.local_addr().expect("ephemeral port address");
    drop(listener);
    format!("http://{}", addr)
}

/// 실행 중인 스텁 프로바이더
pub struct StubUpstream {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    _handle: ServerHandle,
}

impl StubUpstream {
    /// 주어진 라우트로 스텁 서버를 띄웁니다.
    pub fn start<F>(configure: F) -> Self
    where
        F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
    {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();

        let server = HttpServer::new(move || {
            let counter = counter.clone();
            App::new()
                .wrap_fn(move |req, srv| {
                    counter.fetch_add(1, Ordering::SeqCst);
                    srv.call(req)
                })
                .configure(configure.clone())
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .expect("stub upstream bind");

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        Self {
            base_url: format!("http://{}", addr),
            hits,
            _handle: handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 지금까지 받은 요청 수
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

pub fn github_config(token_uri: &str) -> GitHubOAuthConfig {
    GitHubOAuthConfig {
        client_id: "github-client-id".to_string(),
        client_secret: Secret::new("github-client-secret"),
        token_uri: token_uri.to_string(),
    }
}

pub fn google_config(token_uri: &str, userinfo_uri: &str) -> GoogleOAuthConfig {
    GoogleOAuthConfig {
        client_id: "google-client-id".to_string(),
        client_secret: Secret::new("google-client-secret"),
        token_uri: token_uri.to_string(),
        userinfo_uri: userinfo_uri.to_string(),
    }
}

pub fn github_service(token_uri: &str) -> GitHubExchangeService {
    GitHubExchangeService::new(github_config(token_uri), &HttpClientConfig::default())
        .expect("github service")
}

pub fn google_service(token_uri: &str, userinfo_uri: &str) -> GoogleExchangeService {
    GoogleExchangeService::new(google_config(token_uri, userinfo_uri), &HttpClientConfig::default())
        .expect("google service")
}
