//! 分层设置加载器

use crate::settings::BookstoreSettings;
use config::{Config, Environment, File};
use infrastructure_common::{ConfigError, ConfigResult};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, error, info};

/// 默认配置文件（不含扩展名），不存在时忽略
pub const DEFAULT_CONFIG_FILE: &str = "config/bookstore";

/// 环境变量前缀
pub const ENV_PREFIX: &str = "BOOKSTORE";

/// 环境变量层级分隔符
pub const ENV_SEPARATOR: &str = "__";

/// 设置加载器
///
/// 优先级从低到高：结构体默认值、默认配置文件、显式指定的配置文件、
/// `BOOKSTORE__` 前缀的环境变量、调用方覆盖值。
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    default_file: Option<PathBuf>,
    explicit_file: Option<PathBuf>,
    environment: Option<HashMap<String, String>>,
    overrides: Vec<(String, config::Value)>,
}

impl SettingsLoader {
    /// 创建新的设置加载器
    pub fn new() -> Self {
        Self {
            default_file: Some(PathBuf::from(DEFAULT_CONFIG_FILE)),
            explicit_file: None,
            environment: None,
            overrides: Vec::new(),
        }
    }

    /// 不读取默认配置文件
    pub fn without_default_file(mut self) -> Self {
        self.default_file = None;
        self
    }

    /// 指定必须存在的配置文件
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_file = Some(path.into());
        self
    }

    /// 使用给定的变量表代替进程环境变量
    pub fn with_environment_source(mut self, variables: HashMap<String, String>) -> Self {
        self.environment = Some(variables);
        self
    }

    /// 覆盖单个设置项，例如 `server.port`
    pub fn with_override(mut self, key: impl Into<String>, value: impl Into<config::Value>) -> Self {
        self.overrides.push((key.into(), value.into()));
        self
    }

    /// 加载设置
    pub fn load(&self) -> ConfigResult<BookstoreSettings> {
        let mut builder = Config::builder();

        if let Some(path) = &self.default_file {
            debug!("加载默认配置文件: {}", path.display());
            builder = builder.add_source(File::from(path.as_path()).required(false));
        }

        if let Some(path) = &self.explicit_file {
            if !path.exists() {
                error!("配置文件不存在: {}", path.display());
                return Err(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                });
            }
            info!("加载配置文件: {}", path.display());
            builder = builder.add_source(File::from(path.as_path()).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true)
                .source(self.environment.clone().map(|variables| variables.into_iter().collect())),
        );

        for (key, value) in &self.overrides {
            builder = builder
                .set_override(key.as_str(), value.clone())
                .map_err(|e| ConfigError::ParseError {
                    source: Box::new(e),
                })?;
        }

        let config = builder.build().map_err(|e| {
            error!("配置构建失败: {}", e);
            ConfigError::ParseError {
                source: Box::new(e),
            }
        })?;

        let settings: BookstoreSettings = config.try_deserialize().map_err(|e| {
            error!("配置绑定失败: {}", e);
            ConfigError::TypeConversionError {
                message: e.to_string(),
            }
        })?;

        debug!("配置加载完成: {:?}", settings);
        Ok(settings)
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}
