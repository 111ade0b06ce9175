//! 依赖清单
//!
//! 记录每个构造器在构造时需要的令牌序列。清单是一个显式的值，
//! 可以在容器创建之前构建，再交给容器使用。

use crate::token::Token;
use std::any::TypeId;
use std::collections::HashMap;

/// 清单条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// 构造器类型名称
    pub type_name: &'static str,
    /// 依赖令牌（按构造参数顺序）
    pub tokens: Vec<Token>,
}

/// 依赖清单
///
/// 以构造器类型为键，记录有序的依赖令牌列表。
#[derive(Debug, Clone, Default)]
pub struct DependencyManifest {
    entries: HashMap<TypeId, ManifestEntry>,
}

impl DependencyManifest {
    /// 创建空清单
    pub fn new() -> Self {
        Self::default()
    }

    /// 声明构造器 `C` 的依赖令牌
    ///
    /// 覆盖已有的声明，并返回之前的令牌列表。
    pub fn declare<C: 'static>(
        &mut self,
        tokens: impl IntoIterator<Item = impl Into<Token>>,
    ) -> Option<Vec<Token>> {
        let entry = ManifestEntry {
            type_name: std::any::type_name::<C>(),
            tokens: tokens.into_iter().map(Into::into).collect(),
        };

        self.entries
            .insert(TypeId::of::<C>(), entry)
            .map(|previous| previous.tokens)
    }

    /// 获取构造器 `C` 的依赖令牌，未声明时返回空序列
    pub fn tokens_of<C: 'static>(&self) -> &[Token] {
        self.tokens_for(TypeId::of::<C>())
    }

    /// 按类型ID获取依赖令牌，未声明时返回空序列
    pub fn tokens_for(&self, type_id: TypeId) -> &[Token] {
        self.entries
            .get(&type_id)
            .map(|entry| entry.tokens.as_slice())
            .unwrap_or_default()
    }

    /// 是否声明过构造器 `C`
    pub fn contains<C: 'static>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<C>())
    }

    /// 已声明的构造器数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 清单是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 遍历所有条目
    pub fn iter(&self) -> impl Iterator<Item = &ManifestEntry> {
        self.entries.values()
    }
}
