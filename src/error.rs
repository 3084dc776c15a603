//! 错误处理模块

use reqwest::StatusCode;
use thiserror::Error;

/// groqcheck 的统一错误类型
///
/// 变体与服务端 SDK 的异常类别一一对应，`kind()` 返回对应的类型名，
/// 便于诊断输出中原样打印
#[derive(Debug, Error)]
pub enum ProbeError {
    /// 配置相关错误（例如缺少 API 密钥）
    #[error("配置错误: {0}")]
    Config(String),

    /// 无法建立连接或传输失败
    #[error("连接失败: {0}")]
    Connection(String),

    /// 请求超时
    #[error("请求超时: {0}")]
    Timeout(String),

    /// 响应体无法解析
    #[error("JSON处理错误: {0}")]
    Json(String),

    /// 400 请求参数无效
    #[error("请求参数无效: {0}")]
    BadRequest(String),

    /// 401 身份验证失败
    #[error("身份验证失败: {0}")]
    Auth(String),

    /// 403 无访问权限
    #[error("没有访问权限: {0}")]
    PermissionDenied(String),

    /// 404 资源或模型不存在
    #[error("资源不存在: {0}")]
    NotFound(String),

    /// 409 请求冲突
    #[error("请求冲突: {0}")]
    Conflict(String),

    /// 422 请求无法处理
    #[error("请求无法处理: {0}")]
    Unprocessable(String),

    /// 429 请求频率限制
    #[error("请求频率超限: {0}")]
    RateLimit(String),

    /// 5xx 服务端错误
    #[error("服务端错误 ({status}): {message}")]
    Server { status: StatusCode, message: String },

    /// 其他非成功状态码
    #[error("API错误 ({status}): {message}")]
    Api { status: StatusCode, message: String },

    /// 响应中没有任何选项
    #[error("响应内容为空")]
    NoContent,
}

/// groqcheck 的 Result 类型别名
pub type Result<T> = std::result::Result<T, ProbeError>;

impl ProbeError {
    /// 根据 HTTP 状态码构造对应的错误
    pub fn from_status(status: StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => ProbeError::BadRequest(message),
            401 => ProbeError::Auth(message),
            403 => ProbeError::PermissionDenied(message),
            404 => ProbeError::NotFound(message),
            409 => ProbeError::Conflict(message),
            422 => ProbeError::Unprocessable(message),
            429 => ProbeError::RateLimit(message),
            s if s >= 500 => ProbeError::Server { status, message },
            _ => ProbeError::Api { status, message },
        }
    }

    /// 错误的类型名
    pub fn kind(&self) -> &'static str {
        match self {
            ProbeError::Config(_) => "ConfigError",
            ProbeError::Connection(_) => "APIConnectionError",
            ProbeError::Timeout(_) => "APITimeoutError",
            ProbeError::Json(_) => "JSONDecodeError",
            ProbeError::BadRequest(_) => "BadRequestError",
            ProbeError::Auth(_) => "AuthenticationError",
            ProbeError::PermissionDenied(_) => "PermissionDeniedError",
            ProbeError::NotFound(_) => "NotFoundError",
            ProbeError::Conflict(_) => "ConflictError",
            ProbeError::Unprocessable(_) => "UnprocessableEntityError",
            ProbeError::RateLimit(_) => "RateLimitError",
            ProbeError::Server { .. } => "InternalServerError",
            ProbeError::Api { .. } => "APIStatusError",
            ProbeError::NoContent => "NoContentError",
        }
    }
}

impl From<reqwest::Error> for ProbeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProbeError::Timeout(e.to_string())
        } else if e.is_decode() {
            ProbeError::Json(e.to_string())
        } else {
            ProbeError::Connection(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ProbeError {
    fn from(e: serde_json::Error) -> Self {
        ProbeError::Json(e.to_string())
    }
}
