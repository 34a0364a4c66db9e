use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ApiResponse, Endpoint, Payload};

/// 账号注册 API 能力
///
/// 平台实现:
/// - [`HttpAccountApi`](crate::HttpAccountApi): reqwest + multipart/form-data
/// - 测试: 内存 mock（见 tpm-core `test_utils`）
#[async_trait]
pub trait AccountApi: Send + Sync {
    /// Submit an account payload to `endpoint`.
    ///
    /// # Returns
    /// * `Ok(response)` - the server answered; the status is not judged here
    /// * `Err(ApiError)` - no response was obtained (transport failure)
    async fn submit_account(&self, endpoint: Endpoint, payload: &Payload) -> Result<ApiResponse>;
}
