//! 设置验证

use crate::settings::{BookstoreSettings, StorageBackend};
use infrastructure_common::{ConfigError, ConfigResult, ValidationError};
use tracing::{debug, warn};

/// 支持的日志级别
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// 验证设置，收集所有问题后一并返回
pub fn validate_settings(settings: &BookstoreSettings) -> ConfigResult<()> {
    let mut errors = Vec::new();

    if settings.server.host.trim().is_empty() {
        errors.push(ValidationError::required_field_missing("server.host"));
    }

    if settings.server.port == 0 {
        errors.push(ValidationError::invalid_field_value(
            "server.port",
            "0",
            "端口必须大于 0",
        ));
    }

    let level = settings.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::invalid_field_value(
            "logging.level",
            &settings.logging.level,
            "未知的日志级别",
        ));
    }

    if settings.storage_backend() == StorageBackend::Sqlite
        && settings.storage.database_url.trim().is_empty()
    {
        errors.push(ValidationError::required_field_missing("storage.database_url"));
    }

    if errors.is_empty() {
        debug!("设置验证通过");
        Ok(())
    } else {
        warn!("设置验证失败: {} 个问题", errors.len());
        Err(ConfigError::ValidationFailed { errors })
    }
}
