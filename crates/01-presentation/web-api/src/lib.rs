//! # Web API
//!
//! 书店 HTTP 接口：控制器、路由、错误响应映射以及服务循环。

pub mod controller;
pub mod error;
pub mod registration;
pub mod routes;
pub mod server;

pub use controller::{BookController, CreateBookRequest, PriceInput};
pub use error::{ApiError, ApiResult};
pub use registration::register_controller;
pub use routes::{router, ENDPOINTS};
pub use server::{serve, serve_with_shutdown};
