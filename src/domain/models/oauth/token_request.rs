//! # 프로바이더 토큰 요청 모델
//!
//! 각 프로바이더의 토큰 엔드포인트로 보내는 아웃바운드 요청 본문입니다.
//! GitHub는 JSON 본문을, Google은 form-urlencoded 본문을 받습니다.
//! 두 구조체 모두 `serde::Serialize`만 구현하므로 `reqwest`의
//! `.json()` / `.form()`에 그대로 넘길 수 있습니다.

use serde::Serialize;

/// GitHub `POST /login/oauth/access_token` JSON 본문
#[derive(Debug, Serialize)]
pub struct GitHubTokenRequest<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub code: &'a str,
    pub redirect_uri: &'a str,
}

/// Google `POST /token` form 본문
#[derive(Debug, Serialize)]
pub struct GoogleTokenRequest<'a> {
    pub code: &'a str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub redirect_uri: &'a str,
    pub grant_type: &'static str,
}

impl<'a> GoogleTokenRequest<'a> {
    pub const GRANT_TYPE: &'static str = "authorization_code";

    pub fn new(code: &'a str, client_id: &'a str, client_secret: &'a str, redirect_uri: &'a str) -> Self {
        Self {
            code,
            client_id,
            client_secret,
            redirect_uri,
            grant_type: Self::GRANT_TYPE,
        }
    }
}
