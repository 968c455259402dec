use crate::resolver::{Resolver, Transformed};
use namescope_api::{ApiResult, Entity, Ident, NamePath, Named, NamespaceError, RenderItem};
use std::io::Write;

/// Role analyzer bound to one subject's name path.
///
/// ```ignore
/// let ns = resolver.namespace(&NamePath::parse("User::Endpoint::Index")?)?;
/// ns.resource()  => user
/// ns.transform(&[Role::Resource.into(), "cell".into(), Role::Handle.into()], false)
///                => "User::Cell::Index"
/// ```
#[derive(Debug, Clone)]
pub struct Namespace {
    path: NamePath,
    resolver: Resolver,
}

impl Namespace {
    /// Wrap a subject. Fails with `InvalidSubject` when the subject is itself an analyzer.
    pub fn new<S: Named + ?Sized>(subject: &S, resolver: Resolver) -> ApiResult<Self> {
        if subject.is_analyzer() {
            return Err(NamespaceError::InvalidSubject(
                "cannot re-wrap a namespace analyzer".to_string(),
            ));
        }
        Ok(Self {
            path: subject.name_path().clone(),
            resolver,
        })
    }

    pub fn path(&self) -> &NamePath {
        &self.path
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn components(&self) -> ApiResult<Vec<Entity>> {
        self.resolver.components(&self.path)
    }

    pub fn modules(&self) -> Vec<String> {
        self.resolver.analyzer().modules(&self.path)
    }

    pub fn sections(&self) -> Vec<Ident> {
        self.resolver.analyzer().sections(&self.path)
    }

    pub fn scope(&self) -> Option<Ident> {
        self.resolver.analyzer().scope(&self.path)
    }

    pub fn concept(&self) -> Option<Ident> {
        self.resolver.analyzer().concept(&self.path)
    }

    pub fn resource(&self) -> Ident {
        self.resolver.analyzer().resource(&self.path)
    }

    pub fn service(&self) -> Option<Ident> {
        self.resolver.analyzer().service(&self.path)
    }

    pub fn section(&self, pos: isize) -> Option<Ident> {
        self.resolver.analyzer().section(&self.path, pos)
    }

    pub fn handle(&self) -> Option<Ident> {
        self.resolver.analyzer().handle(&self.path)
    }

    pub fn transform(&self, request: &[RenderItem], resolve: bool) -> ApiResult<Transformed> {
        self.resolver.transform(&self.path, request, resolve)
    }

    pub fn info<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        self.resolver.info(&self.path, out)
    }
}

impl Named for Namespace {
    fn name_path(&self) -> &NamePath {
        &self.path
    }

    fn is_analyzer(&self) -> bool {
        true
    }
}

/// Accessor giving any named subject a fresh analyzer per call.
pub trait NamespaceExt: Named {
    /// Analyzer over the process-wide registry.
    fn namespace(&self) -> ApiResult<Namespace> {
        Namespace::new(self, Resolver::global())
    }

    fn namespace_in(&self, resolver: &Resolver) -> ApiResult<Namespace> {
        Namespace::new(self, resolver.clone())
    }
}

impl<T: Named + ?Sized> NamespaceExt for T {}
