use namescope_core::Resolver;

pub fn run(resolver: &Resolver, items: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", resolver.path(items)?);
    Ok(())
}
