//! 错误类型定义

use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {path}")]
    FileNotFound { path: String },

    #[error("配置解析失败: {source}")]
    ParseError {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("配置类型转换失败: {message}")]
    TypeConversionError { message: String },

    #[error("配置验证失败: {errors:?}")]
    ValidationFailed { errors: Vec<ValidationError> },
}

/// 依赖注入错误类型
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("令牌未注册: {token}")]
    ComponentNotRegistered { token: String },

    #[error("组件创建失败: {type_name}, 原因: {source}")]
    ComponentCreationFailed {
        type_name: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("循环依赖检测到: {dependency_chain}")]
    CircularDependency { dependency_chain: String },

    #[error("依赖解析失败: {type_name}, 原因: {message}")]
    DependencyResolutionFailed { type_name: String, message: String },

    #[error("类型不匹配: 令牌 {token} 的实例不是 {expected}")]
    TypeMismatch { token: String, expected: String },

    #[error("解析深度超过上限 {max_depth}: {dependency_chain}")]
    ResolutionDepthExceeded {
        max_depth: usize,
        dependency_chain: String,
    },
}

impl DependencyError {
    /// 创建未注册错误
    pub fn not_registered(token: impl Into<String>) -> Self {
        Self::ComponentNotRegistered {
            token: token.into(),
        }
    }

    /// 创建组件构建失败错误
    pub fn creation_failed<E>(type_name: impl Into<String>, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::ComponentCreationFailed {
            type_name: type_name.into(),
            source: source.into(),
        }
    }

    /// 创建类型不匹配错误
    pub fn type_mismatch<T: ?Sized>(token: impl Into<String>) -> Self {
        Self::TypeMismatch {
            token: token.into(),
            expected: std::any::type_name::<T>().to_string(),
        }
    }

    /// 是否为未注册错误
    pub fn is_not_registered(&self) -> bool {
        matches!(self, Self::ComponentNotRegistered { .. })
    }

    /// 是否为循环依赖错误
    pub fn is_circular(&self) -> bool {
        matches!(self, Self::CircularDependency { .. })
    }
}

/// 验证错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("必需字段缺失: {field_name}")]
    RequiredFieldMissing { field_name: String },

    #[error("字段值无效: {field_name}, 值: {value}, 原因: {reason}")]
    InvalidFieldValue {
        field_name: String,
        value: String,
        reason: String,
    },
}

impl ValidationError {
    /// 创建必需字段缺失错误
    pub fn required_field_missing(field_name: impl Into<String>) -> Self {
        Self::RequiredFieldMissing {
            field_name: field_name.into(),
        }
    }

    /// 创建字段值无效错误
    pub fn invalid_field_value(
        field_name: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidFieldValue {
            field_name: field_name.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// 出错字段名称
    pub fn field_name(&self) -> &str {
        match self {
            Self::RequiredFieldMissing { field_name }
            | Self::InvalidFieldValue { field_name, .. } => field_name,
        }
    }
}

/// 基础设施错误类型
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("配置错误: {source}")]
    ConfigError {
        #[from]
        source: ConfigError,
    },

    #[error("依赖注入错误: {source}")]
    DependencyError {
        #[from]
        source: DependencyError,
    },

    #[error("容器验证失败: {errors:?}")]
    ContainerValidationFailed { errors: Vec<DependencyError> },

    #[error("基础设施启动失败: {message}")]
    BootstrapFailed { message: String },

    #[error("服务运行失败: {source}")]
    ServerError {
        #[from]
        source: std::io::Error,
    },
}

/// 结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
/// 依赖注入结果
pub type DependencyResult<T> = Result<T, DependencyError>;
/// 基础设施结果
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;
