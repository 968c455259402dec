use namescope_api::NamespaceRegistry;
use namescope_core::error::Result;
use namescope_core::{
    EnglishInflector, InMemoryRegistry, NamescopeConfig, Resolver, RoleAnalyzer,
    SeparatorConvention,
};
use std::sync::Arc;

/// Assembles a resolver over `registry` from a configuration.
///
/// Applies the separator and detection pattern, then builds every preloaded name.
pub fn assemble_resolver(
    config: &NamescopeConfig,
    registry: Arc<dyn NamespaceRegistry>,
) -> Result<Resolver> {
    config.validate()?;

    let mut analyzer = RoleAnalyzer::new(Arc::new(EnglishInflector::new()));
    if let Some(pattern) = &config.detect_pattern {
        analyzer = analyzer.with_detect_pattern(pattern)?;
    }
    let convention = SeparatorConvention::new(config.separator.clone())?;

    let resolver = Resolver::new(registry)
        .with_analyzer(analyzer)
        .with_convention(Arc::new(convention));

    for name in &config.preload {
        let path = resolver.tokenize(name)?;
        resolver.registry().build(&path)?;
        tracing::debug!("Preloaded {}", name);
    }

    Ok(resolver)
}

/// Resolver over a fresh, isolated registry.
pub fn build_resolver(config: &NamescopeConfig) -> Result<Resolver> {
    assemble_resolver(config, Arc::new(InMemoryRegistry::new()))
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module.
pub fn init_logging(component: &str, to_stderr: bool) -> Option<impl Drop> {
    Some(namescope_core::logging::init_logging(component, to_stderr))
}
