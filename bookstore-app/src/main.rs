//! # 书店服务
//!
//! 加载设置、装配依赖注入容器并启动 HTTP 服务。

use anyhow::Context;
use clap::Parser;
use config_impl::SettingsLoader;
use infrastructure_composition::Bootstrapper;
use std::path::PathBuf;
use tracing::info;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "bookstore-app")]
#[command(about = "书店图书管理服务")]
struct Args {
    /// 配置文件路径，指定时文件必须存在
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 日志级别，覆盖配置文件和环境变量
    #[arg(long)]
    log_level: Option<String>,

    /// 监听端口，覆盖配置文件和环境变量
    #[arg(short, long)]
    port: Option<u16>,
}

impl Args {
    fn loader(&self) -> SettingsLoader {
        let mut loader = SettingsLoader::new();
        if let Some(path) = &self.config {
            loader = loader.with_file(path);
        }
        if let Some(level) = &self.log_level {
            loader = loader.with_override("logging.level", level.as_str());
        }
        if let Some(port) = self.port {
            loader = loader.with_override("server.port", i64::from(port));
        }
        loader
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let settings = args.loader().load().context("加载配置失败")?;
    let application = Bootstrapper::new(settings)
        .with_logging(true)
        .bootstrap()
        .context("启动书店服务失败")?;

    let settings = application.settings();
    info!(
        "环境: {}, 存储: {}",
        settings.environment,
        settings.storage_backend()
    );
    let address = settings.server.address();
    for (method, path) in web_api::ENDPOINTS {
        info!("  {:<6} http://{}{}", method, address, path);
    }

    application.run().await.context("服务运行失败")?;

    info!("应用已关闭");
    Ok(())
}
