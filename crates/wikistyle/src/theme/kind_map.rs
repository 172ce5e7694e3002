//! A fixed-size table keyed by [`ObjectKind`].

use serde::Serialize;

use crate::kind::ObjectKind;

/// One value per object kind.
///
/// Lookups go through an exhaustive match, so a new kind cannot be added
/// without also giving it a slot here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct KindMap<T> {
    pub atom: T,
    pub relation: T,
    #[serde(rename = "abstract")]
    pub abstract_: T,
}

impl<T> KindMap<T> {
    pub const fn new(atom: T, relation: T, abstract_: T) -> Self {
        Self {
            atom,
            relation,
            abstract_,
        }
    }

    pub fn get(&self, kind: ObjectKind) -> &T {
        match kind {
            ObjectKind::Atom => &self.atom,
            ObjectKind::Relation => &self.relation,
            ObjectKind::Abstract => &self.abstract_,
        }
    }

    pub fn get_mut(&mut self, kind: ObjectKind) -> &mut T {
        match kind {
            ObjectKind::Atom => &mut self.atom,
            ObjectKind::Relation => &mut self.relation,
            ObjectKind::Abstract => &mut self.abstract_,
        }
    }

    /// Iterates `(kind, value)` in [`ObjectKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectKind, &T)> {
        ObjectKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}
