//! Graph node identity.

use std::{borrow::Borrow, fmt, sync::Arc};

/// A graph vertex identified solely by its label.
///
/// Equality, ordering and hashing all derive from the label, so nodes can be
/// used directly as map keys and set members. Cloning shares the label
/// storage.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Node {
    label: Arc<str>,
}

impl Node {
    pub(crate) fn new(label: impl Into<Arc<str>>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Returns the node label.
    #[must_use]
    #[rustfmt::skip]
    pub fn label(&self) -> &str { &self.label }

    pub(crate) fn shared_label(&self) -> Arc<str> {
        Arc::clone(&self.label)
    }
}

// Lets label-keyed collections answer `&str` lookups.
impl Borrow<str> for Node {
    fn borrow(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
