//! Semantic object kinds.
//!
//! Every linkable entity in the wiki is one of three kinds:
//!
//! - **atom**: a self-contained piece of concrete data (a text, a number)
//! - **relation**: a link between two elements, tagged by a third
//! - **abstract**: an element with no data of its own, described only by its relations
//!
//! The set is closed. Adding a kind means adding a variant here, after which
//! every exhaustive match over kinds (including the theme color table) stops
//! compiling until the new kind is handled.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

/// Semantic category of a linkable wiki entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Atom,
    Relation,
    Abstract,
}

impl ObjectKind {
    /// All kinds, in declaration order.
    pub const ALL: [ObjectKind; 3] = [ObjectKind::Atom, ObjectKind::Relation, ObjectKind::Abstract];

    /// The tag used for this kind in markup and stylesheets.
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectKind::Atom => "atom",
            ObjectKind::Relation => "relation",
            ObjectKind::Abstract => "abstract",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the known kind tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown object kind: {:?}", self.0)
    }
}

impl std::error::Error for UnknownKind {}

impl FromStr for ObjectKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "atom" => Ok(ObjectKind::Atom),
            "relation" => Ok(ObjectKind::Relation),
            "abstract" => Ok(ObjectKind::Abstract),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}

/// Parses an external kind label.
///
/// Matching is exact and case-sensitive, like a CSS class selector. An
/// unrecognized label yields `None`, which callers render unstyled.
///
/// # Example
///
/// ```rust
/// use wikistyle::{classify, ObjectKind};
///
/// assert_eq!(classify("relation"), Some(ObjectKind::Relation));
/// assert_eq!(classify("page"), None);
/// ```
pub fn classify(tag: &str) -> Option<ObjectKind> {
    match tag.parse() {
        Ok(kind) => Some(kind),
        Err(_) => {
            debug!("event=classify status=unknown tag={:?}", tag);
            None
        }
    }
}
