//! 组件注册抽象

use crate::token::Token;
use infrastructure_common::{DependencyError, DependencyResult};
use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

/// 容器中缓存的类型擦除实例
pub type Instance = Arc<dyn Any + Send + Sync>;

/// 可从容器解析的值
///
/// 解析时返回缓存值的克隆，通常是 `Arc<T>` 或 `Arc<dyn Trait>`，
/// 因此多次解析得到的是同一个实例。
pub trait Resolvable: Clone + Send + Sync + 'static {}

impl<T> Resolvable for T where T: Clone + Send + Sync + 'static {}

/// 可注入组件 trait
///
/// 由容器构造的组件必须实现此 trait。依赖按依赖清单中声明的顺序
/// 逐个从 [`Dependencies`] 中取出。
pub trait Injectable: Send + Sync + Sized + 'static {
    /// 使用已解析的依赖构建组件实例
    fn inject(dependencies: &mut Dependencies) -> DependencyResult<Self>;
}

/// 已解析的位置依赖
#[derive(Debug)]
pub struct Dependencies {
    owner: &'static str,
    resolved: VecDeque<(Token, Instance)>,
    consumed: usize,
}

impl Dependencies {
    /// 创建位置依赖列表
    pub fn new(owner: &'static str, resolved: Vec<(Token, Instance)>) -> Self {
        Self {
            owner,
            resolved: resolved.into(),
            consumed: 0,
        }
    }

    /// 创建空依赖列表
    pub fn empty(owner: &'static str) -> Self {
        Self::new(owner, Vec::new())
    }

    /// 取出下一个依赖
    pub fn next<T: Resolvable>(&mut self) -> DependencyResult<T> {
        let (token, instance) =
            self.resolved
                .pop_front()
                .ok_or_else(|| DependencyError::DependencyResolutionFailed {
                    type_name: self.owner.to_string(),
                    message: format!("缺少第 {} 个依赖，请检查依赖清单", self.consumed + 1),
                })?;
        self.consumed += 1;

        (*instance)
            .downcast_ref::<T>()
            .cloned()
            .ok_or_else(|| DependencyError::type_mismatch::<T>(token.as_str()))
    }

    /// 剩余未取出的依赖数量
    pub fn remaining(&self) -> usize {
        self.resolved.len()
    }

    /// 依赖所属的构造器名称
    pub fn owner(&self) -> &'static str {
        self.owner
    }
}

/// 构造器函数类型
pub type ConstructorFn = Box<dyn Fn(Dependencies) -> DependencyResult<Instance> + Send + Sync>;

/// 工厂函数类型
pub type FactoryFn = Box<dyn Fn() -> DependencyResult<Instance> + Send + Sync>;

/// 令牌注册信息
pub enum Registration {
    /// 构造器注册，依赖从依赖清单中查找
    Constructor {
        /// 构造器类型ID，作为依赖清单的键
        type_id: TypeId,
        /// 构造器类型名称
        type_name: &'static str,
        /// 构造函数
        construct: ConstructorFn,
    },
    /// 无参工厂注册
    Factory {
        /// 产出值的类型名称
        type_name: &'static str,
        /// 工厂函数
        produce: FactoryFn,
    },
}

impl Registration {
    /// 构造器注册，缓存值为 `Arc<C>`
    pub fn constructor<C: Injectable>() -> Self {
        Self::bound::<C, Arc<C>>(|component| component)
    }

    /// 构造器注册，构造出的 `Arc<C>` 经 `bind` 转换后缓存
    ///
    /// 用于把具体类型暴露为接口，例如 `Arc<dyn BookRepository>`。
    pub fn bound<C, I>(bind: fn(Arc<C>) -> I) -> Self
    where
        C: Injectable,
        I: Resolvable,
    {
        Self::Constructor {
            type_id: TypeId::of::<C>(),
            type_name: std::any::type_name::<C>(),
            construct: Box::new(move |mut dependencies| {
                let component = C::inject(&mut dependencies)?;
                Ok(Arc::new(bind(Arc::new(component))) as Instance)
            }),
        }
    }

    /// 工厂注册
    pub fn factory<T, F>(factory: F) -> Self
    where
        T: Resolvable,
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::Factory {
            type_name: std::any::type_name::<T>(),
            produce: Box::new(move || Ok(Arc::new(factory()) as Instance)),
        }
    }

    /// 可失败的工厂注册
    pub fn fallible_factory<T, E, F>(factory: F) -> Self
    where
        T: Resolvable,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
    {
        let type_name = std::any::type_name::<T>();
        Self::Factory {
            type_name,
            produce: Box::new(move || {
                factory()
                    .map(|value| Arc::new(value) as Instance)
                    .map_err(|e| DependencyError::creation_failed(type_name, e))
            }),
        }
    }

    /// 是否为工厂注册
    pub fn is_factory(&self) -> bool {
        matches!(self, Self::Factory { .. })
    }

    /// 注册的类型名称
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Constructor { type_name, .. } | Self::Factory { type_name, .. } => *type_name,
        }
    }

    /// 构造器类型ID，工厂注册返回 `None`
    pub fn constructor_type_id(&self) -> Option<TypeId> {
        match self {
            Self::Constructor { type_id, .. } => Some(*type_id),
            Self::Factory { .. } => None,
        }
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constructor { type_name, .. } => f
                .debug_struct("Constructor")
                .field("type_name", type_name)
                .field("construct", &"<function>")
                .finish(),
            Self::Factory { type_name, .. } => f
                .debug_struct("Factory")
                .field("type_name", type_name)
                .field("produce", &"<function>")
                .finish(),
        }
    }
}

/// 依赖图节点
#[derive(Debug, Clone)]
pub struct DependencyGraphNode {
    /// 令牌
    pub token: Token,
    /// 注册类型名称
    pub type_name: &'static str,
    /// 依赖令牌列表
    pub dependencies: Vec<Token>,
}

/// 循环依赖检测器
pub trait CircularDependencyDetector: Send + Sync {
    /// 检测循环依赖
    fn detect_circular_dependencies(&self, graph: &[DependencyGraphNode]) -> DependencyResult<()>;
}

/// 默认循环依赖检测器
#[derive(Debug, Default)]
pub struct DefaultCircularDependencyDetector;

impl CircularDependencyDetector for DefaultCircularDependencyDetector {
    fn detect_circular_dependencies(&self, graph: &[DependencyGraphNode]) -> DependencyResult<()> {
        // 深度优先搜索，路径栈用于输出依赖链
        let nodes: HashMap<&Token, &DependencyGraphNode> =
            graph.iter().map(|node| (&node.token, node)).collect();
        let mut visited = HashSet::new();
        let mut path = Vec::new();

        for node in graph {
            if !visited.contains(&node.token) {
                Self::dfs_check(&node.token, &nodes, &mut visited, &mut path)?;
            }
        }

        Ok(())
    }
}

impl DefaultCircularDependencyDetector {
    fn dfs_check<'a>(
        current: &'a Token,
        nodes: &HashMap<&'a Token, &'a DependencyGraphNode>,
        visited: &mut HashSet<&'a Token>,
        path: &mut Vec<&'a Token>,
    ) -> DependencyResult<()> {
        if let Some(start) = path.iter().position(|token| *token == current) {
            let chain = path[start..]
                .iter()
                .map(|token| token.as_str())
                .chain(std::iter::once(current.as_str()))
                .collect::<Vec<_>>()
                .join(" -> ");

            return Err(DependencyError::CircularDependency {
                dependency_chain: chain,
            });
        }

        if visited.contains(current) {
            return Ok(());
        }

        path.push(current);

        // 未注册的依赖不在图中，由缺失检查单独报告
        if let Some(&node) = nodes.get(current) {
            for dependency in &node.dependencies {
                Self::dfs_check(dependency, nodes, visited, path)?;
            }
        }

        path.pop();
        visited.insert(current);

        Ok(())
    }
}
