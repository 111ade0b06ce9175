//! 日志初始化

use config_impl::LoggingSettings;
use infrastructure_common::{InfrastructureError, InfrastructureResult};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 安装全局日志订阅器
///
/// `RUST_LOG` 存在时覆盖配置的日志级别。订阅器只能安装一次，
/// 重复调用返回 [`InfrastructureError::BootstrapFailed`]。
pub fn init_logging(settings: &LoggingSettings) -> InfrastructureResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| InfrastructureError::BootstrapFailed {
            message: format!("日志级别无效: {}", e),
        })?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(settings.show_target);

    if settings.json {
        subscriber.json().try_init()
    } else {
        subscriber.try_init()
    }
    .map_err(|e| InfrastructureError::BootstrapFailed {
        message: format!("日志初始化失败: {}", e),
    })?;

    info!("日志系统初始化完成: level={}, json={}", settings.level, settings.json);
    Ok(())
}
