use namescope_api::{NamespaceRegistry, RenderItem};
use namescope_core::{Resolver, Transformed};

pub fn run(
    resolver: &Resolver,
    name: &str,
    items: &[String],
    resolve: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let subject = resolver.tokenize(name)?;
    if resolve {
        // The subject itself is always resolvable; the target must already exist.
        resolver.registry().build(&subject)?;
    }

    let request: Vec<RenderItem> = items.iter().map(|item| RenderItem::parse(item)).collect();
    tracing::debug!("Transforming {} with {:?}", subject, request);

    match resolver.transform(&subject, &request, resolve)? {
        Transformed::Entity(entity) => println!("{}", resolver.render(&entity.path)),
        Transformed::Path(path) => println!("{}", path),
    }
    Ok(())
}
