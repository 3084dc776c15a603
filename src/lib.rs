//! # groqcheck - Groq API 连通性检查
//!
//! 从环境变量（或 `.env` 文件）读取 `GROQ_API_KEY`，向 Groq 的 OpenAI 兼容接口
//! 发送一次固定的 chat completion 请求，并打印响应文本或错误类型与信息。
//!
//! - 🔑 **密钥安全**：诊断输出只显示密钥长度，从不打印密钥内容。
//! - 🧪 **可测试**：诊断流程依赖 [`client::ChatCompletion`] trait，可用桩实现替换。
//! - 🛡️ **错误分类**：HTTP 状态码映射为具名错误类型，见 [`error::ProbeError::kind`]。
//!
//! ## 快速开始
//!
//! ```rust,no_run
//! use groqcheck::config::Config;
//! use groqcheck::probe;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> std::io::Result<()> {
//!     let mut out = std::io::stdout();
//!     probe::run(Config::from_env(), &mut out).await?;
//!     Ok(())
//! }
//! ```

// 模块定义
pub mod client;
pub mod config;
pub mod error;
pub mod probe;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use client::{ChatClient, ChatCompletion};
pub use config::Config;
pub use error::{ProbeError, Result};
pub use probe::ProbeOutcome;
