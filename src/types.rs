//! API 数据结构模块

use serde::{Deserialize, Deserializer, Serialize};

// ================================================================================================
// API 请求结构
// ================================================================================================

/// 对话消息
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Message {
    /// 角色
    pub role: Role,
    /// 内容，服务端返回 `null` 时视为空字符串
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 角色枚举
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// 系统
    System,
    /// 用户
    #[default]
    User,
    /// 机器人
    Assistant,
}

/// chat completion 请求体
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ChatCompletionRequest {
    /// 模型名称
    pub model: String,
    /// 对话消息
    pub messages: Vec<Message>,
    /// 温度参数
    pub temperature: f32,
    /// 最大生成 token 数
    pub max_tokens: u32,
    /// 是否流式返回
    pub stream: bool,
}

// ================================================================================================
// API 响应结构
// ================================================================================================

/// API 响应体
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CompletionResponse {
    /// 响应 ID
    #[serde(default)]
    pub id: String,
    /// 对话选择
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// 创建时间
    #[serde(default)]
    pub created: u64,
    /// 使用模型
    #[serde(default)]
    pub model: String,
    /// token 使用情况
    #[serde(default)]
    pub usage: Usage,
}

impl CompletionResponse {
    /// 第一个选项的消息文本
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

/// 对话选择
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Choice {
    /// 结束原因
    #[serde(default)]
    pub finish_reason: Option<String>,
    /// 索引
    #[serde(default)]
    pub index: u32,
    /// 消息内容
    #[serde(default)]
    pub message: Message,
}

/// token 使用情况
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Usage {
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

/// 服务端错误响应体，形如 `{"error": {"message": ..., "type": ..., "code": ...}}`
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}
