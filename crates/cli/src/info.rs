use namescope_api::NamespaceRegistry;
use namescope_core::Resolver;

pub fn run(resolver: &Resolver, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let path = resolver.tokenize(name)?;
    resolver.registry().build(&path)?;

    let namespace = resolver.namespace(&path)?;
    let stdout = std::io::stdout();
    namespace.info(&mut stdout.lock())?;
    Ok(())
}
