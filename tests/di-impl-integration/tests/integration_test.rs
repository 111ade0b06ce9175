//! 容器解析语义的集中集成测试
use di_abstractions::{Dependencies, DiContainer, Injectable};
use di_impl::DiContainerImpl;
use infrastructure_common::{DependencyError, DependencyResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// 无依赖的测试组件
#[derive(Debug)]
struct TestDependency {
    label: &'static str,
}

impl Injectable for TestDependency {
    fn inject(_dependencies: &mut Dependencies) -> DependencyResult<Self> {
        Ok(Self { label: "original" })
    }
}

/// 替换用组件
#[derive(Debug)]
struct ReplacementDependency;

impl Injectable for ReplacementDependency {
    fn inject(_dependencies: &mut Dependencies) -> DependencyResult<Self> {
        Ok(Self)
    }
}

/// 依赖 `TestDependency` 的组件
#[derive(Debug)]
struct TestClass {
    dependency: Arc<TestDependency>,
}

impl Injectable for TestClass {
    fn inject(dependencies: &mut Dependencies) -> DependencyResult<Self> {
        Ok(Self {
            dependency: dependencies.next()?,
        })
    }
}

trait Repo: Send + Sync {
    fn kind(&self) -> &'static str;
}

#[derive(Debug, Default)]
struct InMemoryRepo;

impl Repo for InMemoryRepo {
    fn kind(&self) -> &'static str {
        "memory"
    }
}

impl Injectable for InMemoryRepo {
    fn inject(_dependencies: &mut Dependencies) -> DependencyResult<Self> {
        Ok(Self)
    }
}

struct Svc {
    repo: Arc<dyn Repo>,
}

impl Injectable for Svc {
    fn inject(dependencies: &mut Dependencies) -> DependencyResult<Self> {
        Ok(Self {
            repo: dependencies.next()?,
        })
    }
}

#[test]
fn test_constructor_without_dependencies() {
    let mut container = DiContainerImpl::new();
    container.register::<TestDependency>("TestDependency");

    let resolved = container
        .resolve::<Arc<TestDependency>>("TestDependency")
        .unwrap();
    assert_eq!(resolved.label, "original");
}

#[test]
fn test_singleton_identity() {
    let mut container = DiContainerImpl::new();
    container.register::<TestDependency>("TestDependency");

    let first = container
        .resolve::<Arc<TestDependency>>("TestDependency")
        .unwrap();
    let second = container
        .resolve::<Arc<TestDependency>>("TestDependency")
        .unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_unregistered_token_is_named_in_error() {
    let mut container = DiContainerImpl::new();

    let error = container.resolve::<Arc<TestDependency>>("Foo").unwrap_err();
    assert!(error.is_not_registered());
    assert!(error.to_string().contains("Foo"));
}

#[test]
fn test_dependency_is_the_cached_instance() {
    let mut container = DiContainerImpl::new();
    container.register_with_dependencies::<TestClass>("TestClass", ["TestDependency"]);
    container.register::<TestDependency>("TestDependency");

    let class = container.resolve::<Arc<TestClass>>("TestClass").unwrap();
    let dependency = container
        .resolve::<Arc<TestDependency>>("TestDependency")
        .unwrap();
    assert!(Arc::ptr_eq(&class.dependency, &dependency));
}

#[test]
fn test_factory_invoked_at_most_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let mut container = DiContainerImpl::new();
    container.register_factory("Config", move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Arc::new(String::from("config"))
    });

    let first = container.resolve::<Arc<String>>("Config").unwrap();
    let second = container.resolve::<Arc<String>>("Config").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_reregistration_before_resolution_takes_effect() {
    let mut container = DiContainerImpl::new();
    container.register::<TestDependency>("Dependency");
    container.register::<ReplacementDependency>("Dependency");

    assert!(container
        .resolve::<Arc<ReplacementDependency>>("Dependency")
        .is_ok());
}

#[test]
fn test_reregistration_after_resolution_keeps_cache() {
    let mut container = DiContainerImpl::new();
    container.register::<TestDependency>("Dependency");
    let original = container
        .resolve::<Arc<TestDependency>>("Dependency")
        .unwrap();

    container.register::<ReplacementDependency>("Dependency");
    let cached = container
        .resolve::<Arc<TestDependency>>("Dependency")
        .unwrap();
    assert!(Arc::ptr_eq(&original, &cached));

    let error = container
        .resolve::<Arc<ReplacementDependency>>("Dependency")
        .unwrap_err();
    assert!(matches!(error, DependencyError::TypeMismatch { .. }));
}

#[test]
fn test_cache_is_keyed_by_token() {
    let mut container = DiContainerImpl::new();
    container.register::<TestDependency>("Left");
    container.register::<TestDependency>("Right");

    let left = container.resolve::<Arc<TestDependency>>("Left").unwrap();
    let right = container.resolve::<Arc<TestDependency>>("Right").unwrap();
    assert!(!Arc::ptr_eq(&left, &right));
}

#[test]
fn test_repo_service_scenario() -> anyhow::Result<()> {
    let mut container = DiContainerImpl::new();
    container.register_as::<InMemoryRepo, _>("Repo", |repo| repo as Arc<dyn Repo>);
    container.register_with_dependencies::<Svc>("Service", ["Repo"]);

    let service = container.resolve::<Arc<Svc>>("Service")?;
    assert_eq!(service.repo.kind(), "memory");

    let again = container.resolve::<Arc<Svc>>("Service")?;
    assert!(Arc::ptr_eq(&service, &again));
    Ok(())
}

#[test]
fn test_cyclic_registration_fails() {
    let mut container = DiContainerImpl::new();
    container.register_with_dependencies::<TestClass>("TestClass", ["TestClass"]);

    let error = container.resolve::<Arc<TestClass>>("TestClass").unwrap_err();
    assert!(error.is_circular());
    assert!(error.to_string().contains("TestClass -> TestClass"));
}
