//! Human-readable dump of every role of a path. Debugging aid only.

use crate::resolver::Resolver;
use namescope_api::{Ident, NamePath};
use std::io::Write;

const RULE_WIDTH: usize = 95;
const LABEL_WIDTH: usize = 11;

fn optional(ident: Option<Ident>) -> String {
    ident.map(|i| i.to_string()).unwrap_or_default()
}

pub fn write_info<W: Write>(
    resolver: &Resolver,
    path: &NamePath,
    out: &mut W,
) -> std::io::Result<()> {
    let analyzer = resolver.analyzer();
    let rule = "-".repeat(RULE_WIDTH);

    let components = match resolver.components(path) {
        Ok(entities) => format!(
            "[{}]",
            entities
                .iter()
                .map(|e| resolver.render(&e.path))
                .collect::<Vec<_>>()
                .join(", ")
        ),
        Err(e) => e.to_string(),
    };
    let modules = format!(
        "[{}]",
        analyzer
            .modules(path)
            .iter()
            .map(|m| format!("{:?}", m))
            .collect::<Vec<_>>()
            .join(", ")
    );
    let sections = format!(
        "[{}]",
        analyzer
            .sections(path)
            .iter()
            .map(Ident::to_symbol)
            .collect::<Vec<_>>()
            .join(", ")
    );

    let fields = [
        ("components", components),
        ("modules", modules),
        ("sections", sections),
        ("scope", optional(analyzer.scope(path))),
        ("concept", optional(analyzer.concept(path))),
        ("resource", analyzer.resource(path).to_string()),
        ("service", optional(analyzer.service(path))),
        ("handle", optional(analyzer.handle(path))),
    ];

    writeln!(out, "{}", rule)?;
    writeln!(out, "=> {} <=", resolver.render(path))?;
    for (label, value) in fields {
        writeln!(out, "{:<width$}-> {}", label, value, width = LABEL_WIDTH)?;
    }
    writeln!(out, "{}", rule)
}
