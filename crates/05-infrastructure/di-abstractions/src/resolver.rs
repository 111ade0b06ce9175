//! 组件解析上下文
//!
//! 记录一次顶层解析过程中正在构造的令牌链，用于检测循环依赖

use crate::container::ContainerConfig;
use crate::token::Token;
use infrastructure_common::{DependencyError, DependencyResult};

/// 解析上下文
#[derive(Debug, Clone, Default)]
pub struct ResolveContext {
    /// 当前解析链
    pub resolution_chain: Vec<Token>,
    /// 解析选项
    pub options: ResolveOptions,
}

impl ResolveContext {
    /// 创建新的解析上下文
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用指定选项创建解析上下文
    pub fn with_options(options: ResolveOptions) -> Self {
        Self {
            resolution_chain: Vec::new(),
            options,
        }
    }

    /// 进入令牌的构造过程
    pub fn enter(&mut self, token: &Token) -> DependencyResult<()> {
        if self.options.detect_cycles && self.resolution_chain.contains(token) {
            return Err(DependencyError::CircularDependency {
                dependency_chain: self.chain_with(token),
            });
        }

        if self.resolution_chain.len() >= self.options.max_depth {
            return Err(DependencyError::ResolutionDepthExceeded {
                max_depth: self.options.max_depth,
                dependency_chain: self.chain_with(token),
            });
        }

        self.resolution_chain.push(token.clone());
        Ok(())
    }

    /// 离开当前令牌的构造过程
    pub fn leave(&mut self) {
        self.resolution_chain.pop();
    }

    /// 当前解析深度
    pub fn depth(&self) -> usize {
        self.resolution_chain.len()
    }

    fn chain_with(&self, token: &Token) -> String {
        self.resolution_chain
            .iter()
            .chain(std::iter::once(token))
            .map(Token::as_str)
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

/// 解析选项
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// 是否检测循环依赖
    pub detect_cycles: bool,
    /// 最大递归深度
    pub max_depth: usize,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            detect_cycles: true,
            max_depth: 100,
        }
    }
}

impl From<&ContainerConfig> for ResolveOptions {
    fn from(config: &ContainerConfig) -> Self {
        Self {
            detect_cycles: config.enable_circular_dependency_detection,
            max_depth: config.max_resolution_depth,
        }
    }
}
