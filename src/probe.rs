//! 连通性诊断流程
//!
//! 读取配置、创建客户端、发送一次固定请求，并把结果写到给定的输出中。
//! 任何失败都只会被打印，不会向上传播（输出本身的 IO 错误除外）。
use crate::{
    client::{ChatClient, ChatCompletion},
    config::Config,
    error::{ProbeError, Result},
    types::{ChatCompletionRequest, Role},
    utils::message,
};
use log::{debug, info};
use std::io::{self, Write};

/// 失败时给出的固定提示
pub const REMEDIATION_HINT: &str =
    "请确认你的 API 密钥有效，并已在 https://console.groq.com/ 中启用";

/// 一次诊断的结果
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    /// 未设置密钥，请求没有发出
    MissingCredential { message: String },
    /// 请求成功，`content` 为第一个选项的文本
    Success { content: String },
    /// 请求失败
    Failure { kind: &'static str, message: String },
}

/// 构造固定的连通性测试请求
pub fn connection_test_request(config: &Config) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: config.model.clone(),
        messages: vec![message(Role::User, &config.prompt)],
        temperature: config.temperature,
        max_tokens: config.max_tokens,
        stream: false,
    }
}

/// 描述密钥状态，只暴露长度
pub fn describe_credential(api_key: &str) -> String {
    if api_key.is_empty() {
        "API 密钥: 未设置".to_string()
    } else {
        format!("API 密钥: 已设置（长度 {}）", api_key.chars().count())
    }
}

/// 完整的诊断流程：根据加载结果创建客户端并发送请求
pub async fn run<W: Write>(loaded: Result<Config>, out: &mut W) -> io::Result<ProbeOutcome> {
    let config = match loaded {
        Ok(config) => config,
        Err(err) => return report_missing_credential(&err, out),
    };
    match ChatClient::new(config.clone()) {
        Ok(client) => run_with_provider(&client, &config, out).await,
        Err(err) => report_missing_credential(&err, out),
    }
}

/// 使用给定的服务端执行一次诊断
pub async fn run_with_provider<P, W>(
    provider: &P,
    config: &Config,
    out: &mut W,
) -> io::Result<ProbeOutcome>
where
    P: ChatCompletion,
    W: Write,
{
    if !config.has_api_key() {
        let err = ProbeError::Config(format!("{} 未设置或为空", crate::config::API_KEY_VAR));
        return report_missing_credential(&err, out);
    }

    writeln!(out, "{}", describe_credential(config.api_key()))?;

    let request = connection_test_request(config);
    debug!("Sending connection test to {}", config.api_base());

    match provider.create(&request).await {
        Ok(response) => {
            let content = response.first_content().unwrap_or_default().to_string();
            info!("Connection test succeeded (model={})", response.model);
            writeln!(out, "连接成功!")?;
            writeln!(out, "Groq 响应: {}", content)?;
            Ok(ProbeOutcome::Success { content })
        }
        Err(err) => report_failure(&err, out),
    }
}

fn report_missing_credential<W: Write>(err: &ProbeError, out: &mut W) -> io::Result<ProbeOutcome> {
    writeln!(out, "{}", describe_credential(""))?;
    match report_failure(err, out)? {
        ProbeOutcome::Failure { message, .. } => Ok(ProbeOutcome::MissingCredential { message }),
        other => Ok(other),
    }
}

fn report_failure<W: Write>(err: &ProbeError, out: &mut W) -> io::Result<ProbeOutcome> {
    let message = err.to_string();
    writeln!(out, "连接 Groq API 失败:")?;
    writeln!(out, "错误类型: {}", err.kind())?;
    writeln!(out, "错误信息: {}", message)?;
    writeln!(out, "{}", REMEDIATION_HINT)?;
    Ok(ProbeOutcome::Failure {
        kind: err.kind(),
        message,
    })
}
