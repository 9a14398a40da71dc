//! # Google 토큰 교환 서비스
//!
//! Google OAuth 2.0 authorization code를 토큰으로 교환하고,
//! 가능하면 사용자 프로필을 함께 조회해 `user` 필드로 병합합니다.
//!
//! ```text
//! 1. POST oauth2.googleapis.com/token   (form-urlencoded, grant_type=authorization_code)
//! 2. GET  www.googleapis.com/oauth2/v3/userinfo   (Authorization: Bearer <access_token>)
//! ```
//!
//! ## 부분 성공 정책
//!
//! 2단계가 어떤 이유로든 실패하면 경고 로그만 남기고 1단계의 토큰 응답을
//! 그대로 반환합니다. 토큰 교환 자체의 성공 여부는 1단계만으로 결정됩니다.

use async_trait::async_trait;

use crate::config::{AuthProvider, GoogleOAuthConfig, HttpClientConfig};
use crate::domain::{GoogleTokenRequest, GoogleUserInfo, ProviderTokenResponse};
use crate::errors::{AppError, AppResult, ErrorContext};
use crate::services::auth::code_exchange::{CodeExchangeService, UPSTREAM_REJECTED_MESSAGE};

pub struct GoogleExchangeService {
    config: GoogleOAuthConfig,
    client: reqwest::Client,
}

impl GoogleExchangeService {
    /// 설정된 타임아웃을 가진 HTTP 클라이언트로 서비스를 생성합니다.
    ///
    /// 타임아웃은 토큰 교환과 사용자 정보 조회 각각에 적용됩니다.
    pub fn new(config: GoogleOAuthConfig, http_config: &HttpClientConfig) -> AppResult<Self> {
        let client = http_config
            .build_client()
            .context("Google HTTP 클라이언트 생성 실패")?;

        Ok(Self::with_client(config, client))
    }

    pub fn with_client(config: GoogleOAuthConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    async fn request_token(&self, code: &str, redirect_uri: &str) -> AppResult<ProviderTokenResponse> {
        let params = GoogleTokenRequest::new(
            code,
            &self.config.client_id,
            self.config.client_secret.expose(),
            redirect_uri,
        );

        let response = self
            .client
            .post(&self.config.token_uri)
            .form(&params)
            .send()
            .await
            .context("Google 토큰 요청 실패")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            log::error!("Google 토큰 교환 실패 ({}): {}", status, error_text);
            return Err(AppError::UpstreamError(UPSTREAM_REJECTED_MESSAGE.to_string()));
        }

        response
            .json::<ProviderTokenResponse>()
            .await
            .context("Google 토큰 응답 파싱 실패")
    }

    async fn fetch_user_info(&self, access_token: &str) -> Result<GoogleUserInfo, reqwest::Error> {
        self.client
            .get(&self.config.userinfo_uri)
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<GoogleUserInfo>()
            .await
    }
}

#[async_trait]
impl CodeExchangeService for GoogleExchangeService {
    fn provider(&self) -> AuthProvider {
        AuthProvider::Google
    }

    async fn exchange_code(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> AppResult<ProviderTokenResponse> {
        let token = self.request_token(code, redirect_uri).await?;

        let Some(access_token) = token.access_token().map(str::to_string) else {
            log::info!("Google 토큰 응답에 access_token 없음, 사용자 정보 조회 생략");
            return Ok(token);
        };

        match self.fetch_user_info(&access_token).await {
            Ok(user) => {
                log::info!("Google 토큰 교환 및 사용자 정보 조회 완료");
                Ok(token.with_user(user))
            }
            Err(e) => {
                log::warn!("Google 사용자 정보 조회 실패, 토큰 응답만 반환: {}", e);
                Ok(token)
            }
        }
    }
}
