//! # Configuration Implementation
//!
//! 书店配置：类型化设置、基于 `config` crate 的分层加载以及设置验证。
//!
//! ## 主要组件
//!
//! - [`BookstoreSettings`] - 书店服务设置
//! - [`SettingsLoader`] - 按默认值、配置文件、环境变量的顺序加载设置
//! - [`validate_settings`] - 设置验证

pub mod binder;
pub mod settings;
pub mod validation;

pub use binder::*;
pub use settings::*;
pub use validation::*;
