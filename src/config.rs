//! 配置模块
use crate::error::{ProbeError, Result};
use log::{debug, warn};
use std::collections::HashMap;
use std::env;
use std::path::Path;
use std::time::Duration;

// ===============================================================================================
// 配置模块
// ===============================================================================================

/// 存放 API 密钥的环境变量
pub const API_KEY_VAR: &str = "GROQ_API_KEY";
/// 可选的 API 基础 URL 环境变量
pub const BASE_URL_VAR: &str = "GROQ_BASE_URL";

/// Groq 官方 OpenAI 兼容端点
pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";
/// 连通性测试使用的模型
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
/// 连通性测试发送的消息
pub const DEFAULT_PROMPT: &str = "Hola, esta es una prueba de conexión";

/// 连通性测试配置
///
/// 默认值即为固定的测试请求参数，支持 Builder 模式和环境变量配置
#[derive(Debug, Clone)]
pub struct Config {
    /// 模型名称
    pub(crate) model: String,
    /// 用户消息
    pub(crate) prompt: String,
    /// 温度参数
    pub(crate) temperature: f32,
    /// 最大生成 token 数
    pub(crate) max_tokens: u32,
    /// 请求超时时间，`None` 表示使用 HTTP 客户端默认行为
    pub(crate) timeout: Option<Duration>,
    /// API 基础 URL
    pub(crate) api_base: String,
    /// API 密钥
    pub(crate) api_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.into(),
            prompt: DEFAULT_PROMPT.into(),
            temperature: 1.0,
            max_tokens: 10,
            timeout: None,
            api_base: DEFAULT_API_BASE.into(),
            api_key: String::new(),
        }
    }
}

/// 生成 Config Builder 方法的宏
///
/// 自动生成 `with_field_name` 形式的 builder 方法
macro_rules! config_builder {
    ($field:ident, $type:ty) => {
        paste::paste! {
            #[doc = "设置 `"]
            #[doc = stringify!($field)]
            #[doc = "`"]
            pub fn [<with_ $field>](mut self, $field: $type) -> Self {
                self.$field = $field;
                self
            }
        }
    };
    ($field:ident, $type:ty, option) => {
        paste::paste! {
            #[doc = "设置 `"]
            #[doc = stringify!($field)]
            #[doc = "`"]
            pub fn [<with_ $field>](mut self, $field: $type) -> Self {
                self.$field = Some($field);
                self
            }
        }
    };
}

impl Config {
    pub fn model(&self) -> &str { &self.model }
    pub fn prompt(&self) -> &str { &self.prompt }
    pub fn temperature(&self) -> f32 { self.temperature }
    pub fn max_tokens(&self) -> u32 { self.max_tokens }
    pub fn timeout(&self) -> Option<Duration> { self.timeout }
    pub fn api_base(&self) -> &str { &self.api_base }
    pub fn api_key(&self) -> &str { &self.api_key }

    /// 从环境变量和 `.env` 文件加载配置
    ///
    /// 环境变量会覆盖 `.env` 文件中的设置，`.env` 不会写入进程环境
    pub fn from_env() -> Result<Self> {
        let file_vars = match dotenvy::dotenv_iter() {
            Ok(iter) => collect_dotenv(iter),
            Err(e) => {
                debug!(".env not loaded: {}", e);
                HashMap::new()
            }
        };
        Self::from_sources(&file_vars, |key| env::var(key).ok())
    }

    /// 从指定的 `.env` 文件加载配置，`env_lookup` 中的值优先
    pub fn from_env_file<P, F>(path: P, env_lookup: F) -> Result<Self>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();
        let iter = dotenvy::from_path_iter(path)
            .map_err(|e| ProbeError::Config(format!("无法读取 {}: {}", path.display(), e)))?;
        Self::from_sources(&collect_dotenv(iter), env_lookup)
    }

    fn from_sources<F>(file_vars: &HashMap<String, String>, env_lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup(|key| env_lookup(key).or_else(|| file_vars.get(key).cloned()))
    }

    /// 通过任意键值查询函数加载配置
    ///
    /// 密钥原样保存，不做任何裁剪；缺失或仅含空白时返回 `ProbeError::Config`
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ProbeError::Config(format!("{} 未设置或为空", API_KEY_VAR)))?;

        let api_base = lookup(BASE_URL_VAR)
            .map(|b| b.trim().trim_end_matches('/').to_string())
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Ok(Config {
            api_key,
            api_base,
            ..Default::default()
        })
    }

    /// 是否已设置非空的 API 密钥
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    // 使用宏生成 builder 方法
    config_builder!(api_base, String);
    config_builder!(model, String);
    config_builder!(prompt, String);
    config_builder!(api_key, String);
    config_builder!(temperature, f32);
    config_builder!(max_tokens, u32);
    config_builder!(timeout, Duration, option);
}

/// 收集 `.env` 中的键值，跳过无法解析的行
fn collect_dotenv<I>(iter: I) -> HashMap<String, String>
where
    I: Iterator<Item = std::result::Result<(String, String), dotenvy::Error>>,
{
    iter.filter_map(|item| match item {
        Ok(pair) => Some(pair),
        Err(e) => {
            warn!("Skipping malformed .env entry: {}", e);
            None
        }
    })
    .collect()
}
