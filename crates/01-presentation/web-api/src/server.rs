//! HTTP 服务循环

use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;
use tracing::{error, info};

/// 运行服务，直到收到 Ctrl-C
pub async fn serve(listener: TcpListener, router: Router) -> std::io::Result<()> {
    serve_with_shutdown(listener, router, ctrl_c()).await
}

/// 运行服务，直到 `shutdown` 完成
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    router: Router,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let address = listener.local_addr()?;
    info!("服务已启动: http://{}", address);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("服务已停止");
    Ok(())
}

async fn ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("收到关闭信号，正在停止服务"),
        Err(e) => {
            error!("无法监听关闭信号: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
