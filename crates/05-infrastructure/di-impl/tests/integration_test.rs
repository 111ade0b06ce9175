//! 依赖注入实现的集成测试

use di_abstractions::{
    ContainerConfig, Dependencies, DependencyManifest, DiContainer, Injectable, Token,
};
use di_impl::DiContainerImpl;
use infrastructure_common::{DependencyError, DependencyResult};
use std::sync::Arc;

trait Greeter: Send + Sync {
    fn greet(&self) -> String;
}

/// 测试组件
#[derive(Debug)]
struct EnglishGreeter;

impl Greeter for EnglishGreeter {
    fn greet(&self) -> String {
        "hello".to_string()
    }
}

impl Injectable for EnglishGreeter {
    fn inject(_dependencies: &mut Dependencies) -> DependencyResult<Self> {
        Ok(Self)
    }
}

struct Welcome {
    greeter: Arc<dyn Greeter>,
    suffix: String,
}

impl Injectable for Welcome {
    fn inject(dependencies: &mut Dependencies) -> DependencyResult<Self> {
        Ok(Self {
            greeter: dependencies.next()?,
            suffix: dependencies.next()?,
        })
    }
}

impl Welcome {
    fn message(&self) -> String {
        format!("{}{}", self.greeter.greet(), self.suffix)
    }
}

#[derive(Debug)]
struct Ping;

impl Injectable for Ping {
    fn inject(dependencies: &mut Dependencies) -> DependencyResult<Self> {
        let _pong: Arc<Pong> = dependencies.next()?;
        Ok(Self)
    }
}

#[derive(Debug)]
struct Pong;

impl Injectable for Pong {
    fn inject(dependencies: &mut Dependencies) -> DependencyResult<Self> {
        let _ping: Arc<Ping> = dependencies.next()?;
        Ok(Self)
    }
}

fn wire_welcome(container: &mut DiContainerImpl) {
    container.register_as::<EnglishGreeter, _>("Greeter", |greeter| greeter as Arc<dyn Greeter>);
    container.register_factory("Suffix", || String::from("!"));
    container.register_with_dependencies::<Welcome>("Welcome", ["Greeter", "Suffix"]);
}

#[test]
fn test_interface_binding_and_positional_dependencies() {
    let mut container = DiContainerImpl::new();
    wire_welcome(&mut container);

    let welcome = container.resolve::<Arc<Welcome>>("Welcome").unwrap();
    assert_eq!(welcome.message(), "hello!");

    let greeter = container.resolve::<Arc<dyn Greeter>>("Greeter").unwrap();
    assert!(Arc::ptr_eq(&greeter, &welcome.greeter));
}

#[test]
fn test_prebuilt_manifest_is_used() {
    let mut manifest = DependencyManifest::new();
    manifest.declare::<Welcome>(["Greeter", "Suffix"]);

    let mut container = DiContainerImpl::new().with_manifest(manifest);
    container.register_as::<EnglishGreeter, _>("Greeter", |greeter| greeter as Arc<dyn Greeter>);
    container.register_factory("Suffix", || String::from("?"));
    container.register::<Welcome>("Welcome");

    let welcome = container.resolve::<Arc<Welcome>>("Welcome").unwrap();
    assert_eq!(welcome.message(), "hello?");
    assert_eq!(container.manifest().len(), 1);
}

#[test]
fn test_type_mismatch_keeps_cached_instance() {
    let mut container = DiContainerImpl::new();
    container.register_factory("Suffix", || String::from("!"));

    let error = container.resolve::<Arc<String>>("Suffix").unwrap_err();
    assert!(matches!(error, DependencyError::TypeMismatch { .. }));
    assert!(container.is_resolved("Suffix"));
    assert_eq!(container.resolve::<String>("Suffix").unwrap(), "!");
}

#[test]
fn test_cycle_is_reported_at_resolution() {
    let mut container = DiContainerImpl::new();
    container.register_with_dependencies::<Ping>("Ping", ["Pong"]);
    container.register_with_dependencies::<Pong>("Pong", ["Ping"]);

    let error = container.resolve::<Arc<Ping>>("Ping").unwrap_err();
    match error {
        DependencyError::CircularDependency { dependency_chain } => {
            assert_eq!(dependency_chain, "Ping -> Pong -> Ping");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!container.is_resolved("Ping"));
    assert!(!container.is_resolved("Pong"));
}

#[test]
fn test_depth_limit_when_cycle_detection_disabled() {
    let mut container = DiContainerImpl::with_config(ContainerConfig {
        enable_circular_dependency_detection: false,
        max_resolution_depth: 8,
    });
    container.register_with_dependencies::<Ping>("Ping", ["Pong"]);
    container.register_with_dependencies::<Pong>("Pong", ["Ping"]);

    let error = container.resolve::<Arc<Ping>>("Ping").unwrap_err();
    assert!(matches!(
        error,
        DependencyError::ResolutionDepthExceeded { max_depth: 8, .. }
    ));
}

#[test]
fn test_validate_reports_missing_and_cyclic_tokens() {
    let mut container = DiContainerImpl::new();
    container.register_with_dependencies::<Welcome>("Welcome", ["Greeter", "Suffix"]);
    container.register_with_dependencies::<Ping>("Ping", ["Pong"]);
    container.register_with_dependencies::<Pong>("Pong", ["Ping"]);

    let errors = container.validate().unwrap_err();
    let missing = errors
        .iter()
        .filter(|e| matches!(e, DependencyError::DependencyResolutionFailed { .. }))
        .count();
    assert_eq!(missing, 2);
    assert!(errors.iter().any(DependencyError::is_circular));
}

#[test]
fn test_validate_accepts_complete_graph() {
    let mut container = DiContainerImpl::new();
    wire_welcome(&mut container);

    assert!(container.validate().is_ok());
    assert_eq!(
        container.registered_tokens(),
        vec![Token::from("Greeter"), Token::from("Suffix"), Token::from("Welcome")]
    );
}

#[test]
fn test_stats_track_constructions_and_cache_hits() {
    let mut container = DiContainerImpl::new();
    wire_welcome(&mut container);

    container.resolve::<Arc<Welcome>>("Welcome").unwrap();
    container.resolve::<Arc<Welcome>>("Welcome").unwrap();
    container.resolve::<String>("Suffix").unwrap();
    let _ = container.resolve::<String>("Missing");

    let stats = container.stats();
    assert_eq!(stats.registered_components, 3);
    assert_eq!(stats.active_singletons, 3);
    assert_eq!(stats.constructions, 2);
    assert_eq!(stats.factory_invocations, 1);
    assert_eq!(stats.cache_hits, 2);
    assert_eq!(stats.resolution_errors, 1);
}

#[test]
fn test_failing_factory_is_not_cached() {
    let mut container = DiContainerImpl::new();
    container.try_register_factory("Flaky", || -> Result<String, std::io::Error> {
        Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"))
    });

    let error = container.resolve::<String>("Flaky").unwrap_err();
    assert!(matches!(error, DependencyError::ComponentCreationFailed { .. }));
    assert!(!container.is_resolved("Flaky"));
    assert!(container.is_registered("Flaky"));
}
