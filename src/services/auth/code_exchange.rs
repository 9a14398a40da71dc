//! 코드 교환 서비스 공통 trait
//!
//! 핸들러는 프로바이더와 무관하게 이 trait 하나로 교환을 수행합니다.

use async_trait::async_trait;

use crate::config::AuthProvider;
use crate::domain::ProviderTokenResponse;
use crate::errors::AppResult;

/// 인증 코드를 프로바이더 토큰으로 교환하는 서비스
#[async_trait]
pub trait CodeExchangeService: Send + Sync {
    /// 이 서비스가 담당하는 프로바이더
    fn provider(&self) -> AuthProvider;

    /// 인증 코드를 토큰 응답으로 교환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::UpstreamError` - 프로바이더가 2xx 이외의 상태를 반환
    /// * `AppError::InternalError` - 네트워크 실패, 응답 파싱 실패
    async fn exchange_code(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> AppResult<ProviderTokenResponse>;
}

/// 프로바이더 거부 시 클라이언트에 돌려주는 메시지
pub const UPSTREAM_REJECTED_MESSAGE: &str = "Failed to exchange code for token";
