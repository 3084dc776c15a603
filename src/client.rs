//! LLM 客户端核心模块
use crate::{
    config::Config,
    error::{ProbeError, Result},
    types::{ApiErrorBody, ChatCompletionRequest, CompletionResponse},
};
use log::{debug, warn};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, StatusCode,
};
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

// ================================================================================================
// 服务端抽象
// ================================================================================================

/// chat completion 服务端
///
/// 连通性测试只依赖这一个操作，测试中可用桩实现替换真实 HTTP 客户端
pub trait ChatCompletion {
    /// 发送一次 chat completion 请求
    fn create(
        &self,
        request: &ChatCompletionRequest,
    ) -> impl Future<Output = Result<CompletionResponse>> + Send;
}

// ================================================================================================
// 核心客户端模块
// ================================================================================================

/// Groq（OpenAI 兼容）HTTP 客户端
///
/// 不做重试，每次调用只发出一个请求
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: Arc<Client>,
    config: Arc<Config>,
}

impl ChatClient {
    /// 创建一个新的 `ChatClient` 实例
    ///
    /// API 密钥为空时返回 `ProbeError::Config`
    pub fn new(config: Config) -> Result<Self> {
        if !config.has_api_key() {
            return Err(ProbeError::Config("API 密钥为空，无法创建客户端".into()));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ProbeError::Config(format!("无法创建 HTTP 客户端: {}", e)))?;

        Ok(Self {
            client: Arc::new(client),
            config: Arc::new(config),
        })
    }

    /// 构建 API 请求所需的 HTTP 标头
    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.config.api_key))
            .map_err(|e| ProbeError::Config(format!("Invalid API key: {}", e)))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    async fn send(&self, request: &ChatCompletionRequest) -> Result<CompletionResponse> {
        let endpoint = format!("{}/chat/completions", self.config.api_base);
        let headers = self.build_headers()?;
        let start_time = Instant::now();
        debug!("POST {} (model={})", endpoint, request.model);

        let response = self
            .client
            .post(&endpoint)
            .headers(headers)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Request failed with status: {}", status);
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!("Failed to read error body: {}", e);
                    String::new()
                }
            };
            return Err(ProbeError::from_status(status, error_message(status, &body)));
        }

        let completion = response.json::<CompletionResponse>().await?;
        debug!(
            "Completion {} received in {} ms ({} tokens)",
            completion.id,
            start_time.elapsed().as_millis(),
            completion.usage.total_tokens
        );

        if completion.choices.is_empty() {
            return Err(ProbeError::NoContent);
        }
        Ok(completion)
    }
}

impl ChatCompletion for ChatClient {
    async fn create(&self, request: &ChatCompletionRequest) -> Result<CompletionResponse> {
        self.send(request).await
    }
}

/// 从错误响应体中提取可读信息
///
/// 优先使用服务端的 `error.message`，其次原始响应体，最后是状态行
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        return parsed.error.message;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("Request failed with status: {}", status)
    } else {
        trimmed.to_string()
    }
}
