//! # 依赖注入具体实现
//!
//! 提供基于令牌的依赖注入容器：构造器和工厂注册、按依赖清单递归解析、
//! 每个令牌一个单例缓存。

use di_abstractions::{
    CircularDependencyDetector, ContainerConfig, ContainerStats, DefaultCircularDependencyDetector,
    Dependencies, DependencyGraphNode, DependencyManifest, DiContainer, Injectable, Instance,
    Registration, ResolveContext, ResolveOptions, Resolvable, Token,
};
use infrastructure_common::{DependencyError, DependencyResult};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 解析计数
#[derive(Debug, Clone, Copy, Default)]
struct ResolutionCounters {
    constructions: usize,
    factory_invocations: usize,
    cache_hits: usize,
    resolution_errors: usize,
}

/// 具体的依赖注入容器实现
pub struct DiContainerImpl {
    /// 令牌注册信息
    registrations: HashMap<Token, Arc<Registration>>,
    /// 单例缓存
    singletons: HashMap<Token, Instance>,
    /// 依赖清单
    manifest: DependencyManifest,
    /// 容器配置
    config: ContainerConfig,
    /// 循环依赖检测器
    detector: DefaultCircularDependencyDetector,
    counters: ResolutionCounters,
}

impl DiContainerImpl {
    /// 创建新的容器
    pub fn new() -> Self {
        Self::with_config(ContainerConfig::default())
    }

    /// 使用指定配置创建容器
    pub fn with_config(config: ContainerConfig) -> Self {
        Self {
            registrations: HashMap::new(),
            singletons: HashMap::new(),
            manifest: DependencyManifest::new(),
            config,
            detector: DefaultCircularDependencyDetector,
            counters: ResolutionCounters::default(),
        }
    }

    /// 使用预先构建的依赖清单
    pub fn with_manifest(mut self, manifest: DependencyManifest) -> Self {
        self.manifest = manifest;
        self
    }

    /// 容器配置
    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    fn insert_registration(&mut self, token: Token, registration: Registration) {
        debug!("注册令牌: {} -> {:?}", token, registration);
        if self
            .registrations
            .insert(token.clone(), Arc::new(registration))
            .is_some()
        {
            warn!("覆盖已存在的注册: {}", token);
        }
    }

    fn resolve_instance(
        &mut self,
        token: &str,
        context: &mut ResolveContext,
    ) -> DependencyResult<Instance> {
        if let Some(instance) = self.singletons.get(token) {
            self.counters.cache_hits += 1;
            debug!("命中单例缓存: {}", token);
            return Ok(Arc::clone(instance));
        }

        let registration = self
            .registrations
            .get(token)
            .cloned()
            .ok_or_else(|| DependencyError::not_registered(token))?;

        let token = Token::from(token);
        context.enter(&token)?;
        let built = self.build(&token, &registration, context);
        context.leave();

        let instance = built?;
        self.singletons.insert(token, Arc::clone(&instance));
        Ok(instance)
    }

    fn build(
        &mut self,
        token: &Token,
        registration: &Registration,
        context: &mut ResolveContext,
    ) -> DependencyResult<Instance> {
        match registration {
            Registration::Factory { type_name, produce } => {
                debug!("调用工厂: {} ({})", token, type_name);
                self.counters.factory_invocations += 1;
                produce()
            }
            Registration::Constructor {
                type_id,
                type_name,
                construct,
            } => {
                let tokens = self.manifest.tokens_for(*type_id).to_vec();
                debug!("构造组件: {} ({}), 依赖: {:?}", token, type_name, tokens);

                let mut resolved = Vec::with_capacity(tokens.len());
                for dependency in tokens {
                    let instance = self.resolve_instance(dependency.as_str(), context)?;
                    resolved.push((dependency, instance));
                }

                self.counters.constructions += 1;
                construct(Dependencies::new(*type_name, resolved))
            }
        }
    }

    fn dependency_graph(&self) -> Vec<DependencyGraphNode> {
        let mut tokens: Vec<&Token> = self.registrations.keys().collect();
        tokens.sort();

        tokens
            .into_iter()
            .map(|token| {
                let registration = &self.registrations[token];
                let dependencies = registration
                    .constructor_type_id()
                    .map(|type_id| self.manifest.tokens_for(type_id).to_vec())
                    .unwrap_or_default();

                DependencyGraphNode {
                    token: token.clone(),
                    type_name: registration.type_name(),
                    dependencies,
                }
            })
            .collect()
    }
}

impl Default for DiContainerImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DiContainerImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiContainerImpl")
            .field("registrations", &self.registrations.len())
            .field("singletons", &self.singletons.len())
            .field("manifest", &self.manifest.len())
            .field("config", &self.config)
            .finish()
    }
}

impl DiContainer for DiContainerImpl {
    fn declare_dependencies<C: 'static>(
        &mut self,
        tokens: impl IntoIterator<Item = impl Into<Token>>,
    ) {
        if let Some(previous) = self.manifest.declare::<C>(tokens) {
            debug!(
                "覆盖依赖声明: {} (原依赖: {:?})",
                std::any::type_name::<C>(),
                previous
            );
        }
    }

    fn register<C: Injectable>(&mut self, token: impl Into<Token>) {
        self.insert_registration(token.into(), Registration::constructor::<C>());
    }

    fn register_as<C, I>(&mut self, token: impl Into<Token>, bind: fn(Arc<C>) -> I)
    where
        C: Injectable,
        I: Resolvable,
    {
        self.insert_registration(token.into(), Registration::bound(bind));
    }

    fn register_factory<T, F>(&mut self, token: impl Into<Token>, factory: F)
    where
        T: Resolvable,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.insert_registration(token.into(), Registration::factory(factory));
    }

    fn try_register_factory<T, E, F>(&mut self, token: impl Into<Token>, factory: F)
    where
        T: Resolvable,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
    {
        self.insert_registration(token.into(), Registration::fallible_factory(factory));
    }

    fn resolve<T: Resolvable>(&mut self, token: &str) -> DependencyResult<T> {
        let mut context = ResolveContext::with_options(ResolveOptions::from(&self.config));

        let instance = match self.resolve_instance(token, &mut context) {
            Ok(instance) => instance,
            Err(e) => {
                self.counters.resolution_errors += 1;
                warn!("解析令牌失败: {}, 原因: {}", token, e);
                return Err(e);
            }
        };

        (*instance).downcast_ref::<T>().cloned().ok_or_else(|| {
            self.counters.resolution_errors += 1;
            DependencyError::type_mismatch::<T>(token)
        })
    }

    fn is_registered(&self, token: &str) -> bool {
        self.registrations.contains_key(token)
    }

    fn is_resolved(&self, token: &str) -> bool {
        self.singletons.contains_key(token)
    }

    fn registered_tokens(&self) -> Vec<Token> {
        let mut tokens: Vec<Token> = self.registrations.keys().cloned().collect();
        tokens.sort();
        tokens
    }

    fn manifest(&self) -> &DependencyManifest {
        &self.manifest
    }

    fn validate(&self) -> Result<(), Vec<DependencyError>> {
        info!("验证容器状态");

        let graph = self.dependency_graph();
        let mut errors = Vec::new();

        for node in &graph {
            for dependency in &node.dependencies {
                let available = self.registrations.contains_key(dependency.as_str())
                    || self.singletons.contains_key(dependency.as_str());
                if !available {
                    errors.push(DependencyError::DependencyResolutionFailed {
                        type_name: node.type_name.to_string(),
                        message: format!("令牌 {} 依赖的 {} 未注册", node.token, dependency),
                    });
                }
            }
        }

        if let Err(e) = self.detector.detect_circular_dependencies(&graph) {
            errors.push(e);
        }

        if errors.is_empty() {
            info!("容器验证通过，共 {} 个令牌", graph.len());
            Ok(())
        } else {
            warn!("容器验证失败，发现 {} 个问题", errors.len());
            Err(errors)
        }
    }

    fn stats(&self) -> ContainerStats {
        ContainerStats {
            registered_components: self.registrations.len(),
            active_singletons: self.singletons.len(),
            constructions: self.counters.constructions,
            factory_invocations: self.counters.factory_invocations,
            cache_hits: self.counters.cache_hits,
            resolution_errors: self.counters.resolution_errors,
        }
    }
}
