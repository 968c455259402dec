use crate::models::{Entity, Instance, NamePath};

/// Anything that carries exactly one name path and can be analyzed.
pub trait Named {
    fn name_path(&self) -> &NamePath;

    /// True only for analyzers, which must never be wrapped again.
    fn is_analyzer(&self) -> bool {
        false
    }
}

impl Named for NamePath {
    fn name_path(&self) -> &NamePath {
        self
    }
}

impl Named for Entity {
    fn name_path(&self) -> &NamePath {
        &self.path
    }
}

impl Named for Instance {
    fn name_path(&self) -> &NamePath {
        &self.entity().path
    }
}

impl<T: Named + ?Sized> Named for &T {
    fn name_path(&self) -> &NamePath {
        (**self).name_path()
    }

    fn is_analyzer(&self) -> bool {
        (**self).is_analyzer()
    }
}
