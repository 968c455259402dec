use namescope_core::Resolver;

pub fn run(resolver: &Resolver, items: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let entity = resolver.build(items)?;
    println!("{} ({}, #{})", resolver.render(&entity.path), entity.kind, entity.id.0);
    Ok(())
}
