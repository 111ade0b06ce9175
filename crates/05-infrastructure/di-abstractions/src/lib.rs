//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义基于字符串令牌的组件注册和依赖解析接口。
//!
//! ## 核心接口
//!
//! - [`Token`] - 服务令牌
//! - [`DependencyManifest`] - 依赖清单，记录构造器所需的令牌序列
//! - [`Injectable`] - 可由容器构造的组件
//! - [`Registration`] - 令牌对应的构造器或工厂
//! - [`ResolveContext`] - 解析上下文，用于检测循环依赖
//! - [`DiContainer`] - 依赖注入容器接口

pub mod container;
pub mod manifest;
pub mod registry;
pub mod resolver;
pub mod token;

pub use container::*;
pub use manifest::*;
pub use registry::*;
pub use resolver::*;
pub use token::*;
