use namescope_core::Resolver;

pub fn run(resolver: &Resolver, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let path = resolver.tokenize(name)?;
    let roles = resolver.analyzer().roles(&path);
    println!("{}", serde_json::to_string_pretty(&roles)?);
    Ok(())
}
