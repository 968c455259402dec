use crate::inflect::EnglishInflector;
use crate::pattern::SegmentPatterns;
use namescope_api::{ApiResult, Ident, NamePath, Role, Token, WordCasing};
use serde::Serialize;
use std::sync::Arc;

/// Derives semantic roles from the position and shape of a path's tokens.
///
/// Roles are recomputed on every call; nothing is cached.
#[derive(Debug, Clone)]
pub struct RoleAnalyzer {
    casing: Arc<dyn WordCasing>,
    patterns: SegmentPatterns,
}

impl Default for RoleAnalyzer {
    fn default() -> Self {
        Self::new(Arc::new(EnglishInflector))
    }
}

/// All roles of one path, as presented by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleSet {
    pub path: String,
    pub modules: Vec<String>,
    pub sections: Vec<Ident>,
    pub scope: Option<Ident>,
    pub concept: Option<Ident>,
    pub resource: Ident,
    pub service: Option<Ident>,
    pub handle: Option<Ident>,
}

impl RoleAnalyzer {
    pub fn new(casing: Arc<dyn WordCasing>) -> Self {
        Self {
            casing,
            patterns: SegmentPatterns::default(),
        }
    }

    /// Replace the pattern that selects the token `concept` and `resource` split.
    pub fn with_detect_pattern(mut self, pattern: &str) -> ApiResult<Self> {
        self.patterns = SegmentPatterns::with_detect(pattern)?;
        Ok(self)
    }

    pub fn casing(&self) -> &Arc<dyn WordCasing> {
        &self.casing
    }

    pub fn patterns(&self) -> &SegmentPatterns {
        &self.patterns
    }

    fn snake(&self, token: &str) -> Ident {
        Ident::from(self.casing.underscore(token))
    }

    fn detect<'a>(&self, path: &'a NamePath) -> Option<&'a Token> {
        path.tokens()
            .iter()
            .find(|t| self.patterns.is_detected(t.as_str()))
    }

    /// The raw tokens, e.g. `["Dummy", "Cell", "Index"]`.
    pub fn modules(&self, path: &NamePath) -> Vec<String> {
        path.tokens().iter().map(Token::to_string).collect()
    }

    /// Every token in snake case, e.g. `[dummy, cell, index]`.
    pub fn sections(&self, path: &NamePath) -> Vec<Ident> {
        path.tokens().iter().map(|t| self.snake(t.as_str())).collect()
    }

    /// First token; absent for single-token paths.
    pub fn scope(&self, path: &NamePath) -> Option<Ident> {
        if path.len() < 2 {
            return None;
        }
        Some(self.snake(path.first().as_str()))
    }

    /// Final word-segment of the first multi-segment token
    /// (`Admin::UsersController` -> `controller`).
    pub fn concept(&self, path: &NamePath) -> Option<Ident> {
        let token = self.detect(path)?;
        Some(self.snake(&self.patterns.last_segment(token.as_str())))
    }

    /// What the path is about, singularized.
    ///
    /// Up to three tokens: the first multi-segment token without its final
    /// word-segment, falling back to the first token. Longer paths use the
    /// third-from-last token as is.
    pub fn resource(&self, path: &NamePath) -> Ident {
        let raw = if path.len() <= 3 {
            let token = self.detect(path).unwrap_or_else(|| path.first());
            self.patterns.strip_last_segment(token.as_str()).into_owned()
        } else {
            path.tokens()[path.len() - 3].to_string()
        };
        let snake = self.casing.underscore(&raw);
        Ident::from(self.casing.singularize(&snake))
    }

    /// Second-from-last token; absent below three tokens.
    pub fn service(&self, path: &NamePath) -> Option<Ident> {
        if path.len() < 3 {
            return None;
        }
        Some(self.snake(path.tokens()[path.len() - 2].as_str()))
    }

    /// Token at `pos` in snake case; negative positions count from the end.
    pub fn section(&self, path: &NamePath, pos: isize) -> Option<Ident> {
        path.get(pos).map(|t| self.snake(t.as_str()))
    }

    /// Last token; absent below three tokens.
    pub fn handle(&self, path: &NamePath) -> Option<Ident> {
        if path.len() < 3 {
            return None;
        }
        Some(self.snake(path.last().as_str()))
    }

    pub fn role(&self, path: &NamePath, role: Role) -> Option<Ident> {
        match role {
            Role::Scope => self.scope(path),
            Role::Concept => self.concept(path),
            Role::Resource => Some(self.resource(path)),
            Role::Service => self.service(path),
            Role::Section(pos) => self.section(path, pos),
            Role::Handle => self.handle(path),
        }
    }

    pub fn roles(&self, path: &NamePath) -> RoleSet {
        RoleSet {
            path: path.render(),
            modules: self.modules(path),
            sections: self.sections(path),
            scope: self.scope(path),
            concept: self.concept(path),
            resource: self.resource(path),
            service: self.service(path),
            handle: self.handle(path),
        }
    }
}
