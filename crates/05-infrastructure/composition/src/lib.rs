//! # Infrastructure Composition
//!
//! 组合层：初始化日志，按设置装配依赖注入容器，并启动 HTTP 服务。
//!
//! ## 使用示例
//!
//! ```rust,no_run
//! use config_impl::SettingsLoader;
//! use infrastructure_composition::Bootstrapper;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = SettingsLoader::new().load()?;
//! let application = Bootstrapper::new(settings).with_logging(true).bootstrap()?;
//! application.run().await?;
//! # Ok(())
//! # }
//! ```

pub mod bootstrapper;
pub mod dependencies;
pub mod logging;

pub use bootstrapper::{Application, Bootstrapper};
pub use dependencies::configure_container;
pub use infrastructure_common::InfrastructureError;
pub use logging::init_logging;
