use super::path::NamePath;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A container other entities can be nested under.
    Namespace,
    /// A terminal value; nothing can be nested under it.
    Leaf,
}

impl EntityKind {
    pub fn is_container(self) -> bool {
        matches!(self, EntityKind::Namespace)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Namespace => f.write_str("namespace"),
            EntityKind::Leaf => f.write_str("leaf"),
        }
    }
}

/// A realized entry of the namespace registry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entity {
    pub id: EntityId,
    pub path: NamePath,
    pub kind: EntityKind,
}

impl Entity {
    pub fn qualified_name(&self) -> String {
        self.path.render()
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}

/// A value of some registered entity. Analyzes exactly like the entity itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    entity: Entity,
}

impl Instance {
    pub fn of(entity: Entity) -> Self {
        Self { entity }
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }
}
