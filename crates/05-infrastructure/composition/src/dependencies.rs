//! 容器装配

use bookstore_application::{register_use_cases, tokens};
use bookstore_domain::BookRepository;
use config_impl::{BookstoreSettings, StorageBackend};
use data_memory::InMemoryBookRepository;
use data_sqlite::{SqliteBookRepository, SqliteOptions};
use di_abstractions::DiContainer;
use std::sync::Arc;
use tracing::info;
use web_api::register_controller;

/// 按设置注册仓储、用例和控制器
pub fn configure_container<C: DiContainer>(container: &mut C, settings: &BookstoreSettings) {
    let backend = settings.storage_backend();
    info!("配置依赖注入容器: environment={}, storage={}", settings.environment, backend);

    match backend {
        StorageBackend::Memory => {
            container.register_as::<InMemoryBookRepository, _>(tokens::BOOK_REPOSITORY, |repository| {
                repository as Arc<dyn BookRepository>
            });
        }
        StorageBackend::Sqlite => {
            let database_url = settings.storage.database_url.clone();
            container.register_factory(tokens::SQLITE_OPTIONS, move || {
                SqliteOptions::new(database_url.clone())
            });
            container.declare_dependencies::<SqliteBookRepository>([tokens::SQLITE_OPTIONS]);
            container.register_as::<SqliteBookRepository, _>(tokens::BOOK_REPOSITORY, |repository| {
                repository as Arc<dyn BookRepository>
            });
        }
    }

    register_use_cases(container);
    register_controller(container);
}
