//! # Infrastructure Common
//!
//! 这个 crate 提供了 Lorn Bookstore 各层共享的错误类型。
//!
//! ## 核心类型
//!
//! - [`DependencyError`] - 依赖注入错误
//! - [`ConfigError`] - 配置错误
//! - [`ValidationError`] - 验证错误
//! - [`InfrastructureError`] - 基础设施启动和运行错误

pub mod errors;

pub use errors::*;
