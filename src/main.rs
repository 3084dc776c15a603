//! groqcheck 命令行入口
//!
//! 运行一次连通性检查。无论成功与否，进程都正常退出。

use groqcheck::{config::Config, probe};
use log::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let loaded = Config::from_env();
    let mut out = std::io::stdout().lock();
    let outcome = probe::run(loaded, &mut out).await?;
    debug!("Probe finished: {:?}", outcome);

    Ok(())
}
