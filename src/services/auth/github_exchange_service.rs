//! # GitHub 토큰 교환 서비스
//!
//! GitHub OAuth App의 authorization code를 액세스 토큰으로 교환합니다.
//!
//! ```text
//! 클라이언트 ──POST {code}──► 이 서버 ──POST JSON──► github.com/login/oauth/access_token
//!            ◄──── 토큰 JSON ────────  ◄──── 토큰 JSON ──
//! ```
//!
//! 성공 응답 본문은 가공 없이 그대로 반환됩니다. GitHub는 잘못된 코드에 대해서도
//! 200과 함께 `{"error": "bad_verification_code"}`를 돌려줄 수 있으며, 이 경우에도
//! 본문을 그대로 전달합니다.

use async_trait::async_trait;
use reqwest::header::ACCEPT;

use crate::config::{AuthProvider, GitHubOAuthConfig, HttpClientConfig};
use crate::domain::{GitHubTokenRequest, ProviderTokenResponse};
use crate::errors::{AppError, AppResult, ErrorContext};
use crate::services::auth::code_exchange::{CodeExchangeService, UPSTREAM_REJECTED_MESSAGE};

pub struct GitHubExchangeService {
    config: GitHubOAuthConfig,
    client: reqwest::Client,
}

impl GitHubExchangeService {
    /// 설정된 타임아웃을 가진 HTTP 클라이언트로 서비스를 생성합니다.
    pub fn new(config: GitHubOAuthConfig, http_config: &HttpClientConfig) -> AppResult<Self> {
        let client = http_config
            .build_client()
            .context("GitHub HTTP 클라이언트 생성 실패")?;

        Ok(Self::with_client(config, client))
    }

    pub fn with_client(config: GitHubOAuthConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }
}

#[async_trait]
impl CodeExchangeService for GitHubExchangeService {
    fn provider(&self) -> AuthProvider {
        AuthProvider::GitHub
    }

    async fn exchange_code(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> AppResult<ProviderTokenResponse> {
        let body = GitHubTokenRequest {
            client_id: &self.config.client_id,
            client_secret: self.config.client_secret.expose(),
            code,
            redirect_uri,
        };

        let response = self
            .client
            .post(&self.config.token_uri)
            .header(ACCEPT, "application/json")
            .json(&body)
            .send()
            .await
            .context("GitHub 토큰 요청 실패")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            log::error!("GitHub 토큰 교환 실패 ({}): {}", status, error_text);
            return Err(AppError::UpstreamError(UPSTREAM_REJECTED_MESSAGE.to_string()));
        }

        let token = response
            .json::<ProviderTokenResponse>()
            .await
            .context("GitHub 토큰 응답 파싱 실패")?;

        log::info!("GitHub 토큰 교환 완료");
        Ok(token)
    }
}
