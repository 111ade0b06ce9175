//! 应用启动器

use crate::dependencies::configure_container;
use crate::logging::init_logging;
use axum::Router;
use bookstore_application::tokens;
use config_impl::{validate_settings, BookstoreSettings};
use di_abstractions::{ContainerConfig, DiContainer};
use di_impl::DiContainerImpl;
use infrastructure_common::{InfrastructureError, InfrastructureResult};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use web_api::BookController;

/// 应用启动器
///
/// 按顺序完成：日志初始化、设置验证、容器装配与验证、解析控制器并构建路由。
#[derive(Debug)]
pub struct Bootstrapper {
    settings: BookstoreSettings,
    container_config: ContainerConfig,
    logging_enabled: bool,
}

impl Bootstrapper {
    /// 使用已加载的设置创建启动器
    pub fn new(settings: BookstoreSettings) -> Self {
        Self {
            settings,
            container_config: ContainerConfig::default(),
            logging_enabled: false, // 默认不初始化日志
        }
    }

    /// 设置是否初始化日志系统
    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.logging_enabled = enabled;
        self
    }

    /// 使用指定的容器配置
    pub fn with_container_config(mut self, config: ContainerConfig) -> Self {
        self.container_config = config;
        self
    }

    /// 启动应用
    pub fn bootstrap(self) -> InfrastructureResult<Application> {
        if self.logging_enabled {
            init_logging(&self.settings.logging)?;
        }

        info!("开始启动书店服务");

        // 第一步：验证设置
        validate_settings(&self.settings)?;

        // 第二步：装配容器
        let mut container = DiContainerImpl::with_config(self.container_config);
        configure_container(&mut container, &self.settings);

        if let Err(errors) = container.validate() {
            for e in &errors {
                error!("容器验证失败: {}", e);
            }
            return Err(InfrastructureError::ContainerValidationFailed { errors });
        }

        // 第三步：解析控制器
        let controller = container.resolve::<Arc<BookController>>(tokens::BOOK_CONTROLLER)?;
        let router = web_api::router(controller);

        let stats = container.stats();
        info!(
            "书店服务启动完成: {} 个令牌, {} 个单例",
            stats.registered_components, stats.active_singletons
        );

        Ok(Application {
            settings: self.settings,
            container,
            router,
        })
    }
}

/// 已装配完成的应用
#[derive(Debug)]
pub struct Application {
    settings: BookstoreSettings,
    container: DiContainerImpl,
    router: Router,
}

impl Application {
    /// 生效的设置
    pub fn settings(&self) -> &BookstoreSettings {
        &self.settings
    }

    /// 已装配的依赖注入容器
    pub fn container(&self) -> &DiContainerImpl {
        &self.container
    }

    /// 路由副本
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// 绑定 `host:port` 并运行，直到收到 Ctrl-C
    pub async fn run(self) -> InfrastructureResult<()> {
        let listener = self.bind().await?;
        web_api::serve(listener, self.router).await?;
        Ok(())
    }

    /// 绑定 `host:port` 并运行，直到 `shutdown` 完成
    pub async fn run_until<F>(self, shutdown: F) -> InfrastructureResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = self.bind().await?;
        web_api::serve_with_shutdown(listener, self.router, shutdown).await?;
        Ok(())
    }

    async fn bind(&self) -> InfrastructureResult<TcpListener> {
        let address = self.settings.server.address();
        TcpListener::bind(&address).await.map_err(|e| {
            error!("无法绑定地址 {}: {}", address, e);
            InfrastructureError::ServerError { source: e }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use config_impl::StorageBackend;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_bootstrap_serves_books() {
        let mut settings = BookstoreSettings::default();
        settings.storage.backend = Some(StorageBackend::Memory);

        let application = Bootstrapper::new(settings).bootstrap().unwrap();
        assert!(application.container().is_resolved(tokens::BOOK_CONTROLLER));

        let response = application
            .router()
            .oneshot(Request::builder().uri("/books").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let mut settings = BookstoreSettings::default();
        settings.server.port = 0;

        let error = Bootstrapper::new(settings).bootstrap().unwrap_err();
        assert!(matches!(error, InfrastructureError::ConfigError { .. }));
    }

    #[tokio::test]
    async fn test_run_until_shutdown() {
        let mut application = Bootstrapper::new(BookstoreSettings::default())
            .bootstrap()
            .unwrap();
        application.settings.server.port = 0;

        application.run_until(async {}).await.unwrap();
    }
}
