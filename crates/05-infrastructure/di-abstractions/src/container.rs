//! 依赖注入容器抽象接口
//!
//! 提供依赖注入容器的核心抽象

use crate::manifest::DependencyManifest;
use crate::registry::{Injectable, Resolvable};
use crate::token::Token;
use infrastructure_common::{DependencyError, DependencyResult};
use std::sync::Arc;

/// 依赖注入容器 trait
///
/// 注册和解析都需要独占访问，调用方负责串行化。
pub trait DiContainer: Send + Sync {
    /// 声明构造器 `C` 的依赖令牌（按构造参数顺序）
    fn declare_dependencies<C: 'static>(
        &mut self,
        tokens: impl IntoIterator<Item = impl Into<Token>>,
    );

    /// 注册构造器，覆盖同名令牌的已有注册
    fn register<C: Injectable>(&mut self, token: impl Into<Token>);

    /// 注册构造器，并把构造结果经 `bind` 转换为接口值
    fn register_as<C, I>(&mut self, token: impl Into<Token>, bind: fn(Arc<C>) -> I)
    where
        C: Injectable,
        I: Resolvable;

    /// 声明依赖并注册构造器
    fn register_with_dependencies<C: Injectable>(
        &mut self,
        token: impl Into<Token>,
        tokens: impl IntoIterator<Item = impl Into<Token>>,
    ) {
        self.declare_dependencies::<C>(tokens);
        self.register::<C>(token);
    }

    /// 注册无参工厂
    fn register_factory<T, F>(&mut self, token: impl Into<Token>, factory: F)
    where
        T: Resolvable,
        F: Fn() -> T + Send + Sync + 'static;

    /// 注册可失败的无参工厂
    fn try_register_factory<T, E, F>(&mut self, token: impl Into<Token>, factory: F)
    where
        T: Resolvable,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
        F: Fn() -> Result<T, E> + Send + Sync + 'static;

    /// 解析令牌，首次解析后返回同一个缓存实例
    fn resolve<T: Resolvable>(&mut self, token: &str) -> DependencyResult<T>;

    /// 令牌是否已注册
    fn is_registered(&self, token: &str) -> bool;

    /// 令牌是否已有缓存实例
    fn is_resolved(&self, token: &str) -> bool;

    /// 所有已注册的令牌（有序）
    fn registered_tokens(&self) -> Vec<Token>;

    /// 依赖清单
    fn manifest(&self) -> &DependencyManifest;

    /// 验证容器状态：依赖令牌均已注册且没有循环依赖
    fn validate(&self) -> Result<(), Vec<DependencyError>>;

    /// 容器统计信息
    fn stats(&self) -> ContainerStats;
}

/// 容器配置
#[derive(Debug, Clone)]
pub struct ContainerConfig {
    /// 是否启用循环依赖检测
    pub enable_circular_dependency_detection: bool,
    /// 最大解析深度
    pub max_resolution_depth: usize,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            enable_circular_dependency_detection: true,
            max_resolution_depth: 100,
        }
    }
}

/// 容器统计信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerStats {
    /// 已注册令牌数量
    pub registered_components: usize,
    /// 活跃单例数量
    pub active_singletons: usize,
    /// 构造器调用次数
    pub constructions: usize,
    /// 工厂调用次数
    pub factory_invocations: usize,
    /// 缓存命中次数
    pub cache_hits: usize,
    /// 解析错误数量
    pub resolution_errors: usize,
}
