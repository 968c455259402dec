use crate::analyzer::RoleAnalyzer;
use crate::info;
use crate::namespace::Namespace;
use crate::registry::global_registry;
use namescope_api::{
    ApiResult, DoubleColonConvention, Entity, NamePath, Named, NamespaceError, NamespaceRegistry,
    NamingConvention, RenderItem, Token,
};
use std::io::Write;
use std::sync::Arc;

/// Renders, resolves and builds qualified names against one registry.
#[derive(Debug, Clone)]
pub struct Resolver {
    registry: Arc<dyn NamespaceRegistry>,
    analyzer: Arc<RoleAnalyzer>,
    convention: Arc<dyn NamingConvention>,
}

/// Outcome of [`Resolver::transform`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transformed {
    Entity(Entity),
    Path(String),
}

impl Transformed {
    pub fn entity(&self) -> Option<&Entity> {
        match self {
            Transformed::Entity(entity) => Some(entity),
            Transformed::Path(_) => None,
        }
    }

    pub fn path(&self) -> Option<&str> {
        match self {
            Transformed::Entity(_) => None,
            Transformed::Path(path) => Some(path),
        }
    }
}

impl Resolver {
    pub fn new(registry: Arc<dyn NamespaceRegistry>) -> Self {
        Self {
            registry,
            analyzer: Arc::new(RoleAnalyzer::default()),
            convention: Arc::new(DoubleColonConvention),
        }
    }

    /// Resolver over the process-wide registry.
    pub fn global() -> Self {
        Self::new(global_registry())
    }

    pub fn with_analyzer(mut self, analyzer: RoleAnalyzer) -> Self {
        self.analyzer = Arc::new(analyzer);
        self
    }

    pub fn with_convention(mut self, convention: Arc<dyn NamingConvention>) -> Self {
        self.convention = convention;
        self
    }

    pub fn registry(&self) -> &Arc<dyn NamespaceRegistry> {
        &self.registry
    }

    pub fn analyzer(&self) -> &RoleAnalyzer {
        &self.analyzer
    }

    pub fn convention(&self) -> &Arc<dyn NamingConvention> {
        &self.convention
    }

    pub fn tokenize(&self, qualified: &str) -> ApiResult<NamePath> {
        self.convention.tokenize(qualified)
    }

    pub fn render(&self, path: &NamePath) -> String {
        self.convention.render(path)
    }

    /// Bind an analyzer to a subject.
    pub fn namespace<S: Named + ?Sized>(&self, subject: &S) -> ApiResult<Namespace> {
        Namespace::new(subject, self.clone())
    }

    /// Convert a caller-supplied word (`"open_tags"`, `"Models"`) to a title-case token.
    pub fn word_case(&self, word: &str) -> Token {
        Token::from(self.analyzer.casing().classify(word))
    }

    /// Classify each item and join them into one path.
    ///
    /// An item may itself be qualified (`"Dummy::Cell"`); each of its tokens is
    /// classified on its own.
    pub fn path_of<I, S>(&self, items: I) -> ApiResult<NamePath>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let separator = self.convention.separator().to_string();
        let mut tokens = Vec::new();
        for item in items {
            for word in item.as_ref().split(separator.as_str()) {
                tokens.push(self.word_case(word));
            }
        }
        NamePath::new(tokens)
    }

    /// `path(["user", "Models", "open_tags", "find"])` = `"User::Model::OpenTag::Find"`.
    pub fn path<I, S>(&self, items: I) -> ApiResult<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(self.render(&self.path_of(items)?))
    }

    /// Look up the entity named by the classified items; every segment must exist.
    pub fn resolve<I, S>(&self, items: I) -> ApiResult<Entity>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let path = self.path_of(items)?;
        tracing::trace!("Resolving {}", path);
        self.registry.resolve(&path)
    }

    /// Like [`Resolver::resolve`] but creates missing segments first.
    pub fn build<I, S>(&self, items: I) -> ApiResult<Entity>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let path = self.path_of(items)?;
        tracing::debug!("Building {}", path);
        self.registry.build(&path)
    }

    /// Resolve role references against `subject`, then render (and optionally resolve)
    /// the resulting path.
    ///
    /// A role the subject does not have (e.g. `__handle__` on a two-token path)
    /// yields `InvalidName`, since it would leave an empty token.
    pub fn transform<S: Named + ?Sized>(
        &self,
        subject: &S,
        request: &[RenderItem],
        resolve: bool,
    ) -> ApiResult<Transformed> {
        let source = subject.name_path();
        let mut words = Vec::with_capacity(request.len());
        for item in request {
            match item {
                RenderItem::Literal(word) => words.push(word.clone()),
                RenderItem::Role(role) => match self.analyzer.role(source, *role) {
                    Some(ident) => words.push(ident.to_string()),
                    None => {
                        return Err(NamespaceError::InvalidName(format!(
                            "{} is undefined for {}",
                            role, source
                        )));
                    }
                },
            }
        }

        let path = self.path_of(&words)?;
        if resolve {
            Ok(Transformed::Entity(self.registry.resolve(&path)?))
        } else {
            Ok(Transformed::Path(self.render(&path)))
        }
    }

    /// Every cumulative prefix of the subject, resolved through the registry.
    pub fn components<S: Named + ?Sized>(&self, subject: &S) -> ApiResult<Vec<Entity>> {
        subject
            .name_path()
            .prefixes()
            .map(|prefix| self.registry.resolve(&prefix))
            .collect()
    }

    /// Write the diagnostic dump for `subject`.
    pub fn info<S: Named + ?Sized, W: Write>(
        &self,
        subject: &S,
        out: &mut W,
    ) -> std::io::Result<()> {
        info::write_info(self, subject.name_path(), out)
    }
}
