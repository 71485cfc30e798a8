//! The chip item type.

use std::fmt;

/// An item shown as one chip.
///
/// A chip has an identity, used to detect duplicates and to find the chip
/// again on removal, and a label for the default visual. Everything else
/// about the chip is opaque to the adapter and the layout.
///
/// # Example
///
/// ```
/// use chipview::model::Chip;
///
/// #[derive(Clone)]
/// struct Contact {
///     email: String,
///     name: String,
/// }
///
/// impl Chip for Contact {
///     type Key = str;
///
///     fn key(&self) -> &str {
///         &self.email
///     }
///
///     fn label(&self) -> &str {
///         &self.name
///     }
/// }
/// ```
pub trait Chip: Clone + Send + Sync + 'static {
    /// The identity type.
    type Key: ?Sized + PartialEq + fmt::Debug;

    /// The identity of this chip.
    fn key(&self) -> &Self::Key;

    /// Text shown by the default chip visual.
    fn label(&self) -> &str;

    /// Whether `other` has the same identity as this chip.
    fn same_identity(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

/// Strings are chips identified by their own text.
impl Chip for String {
    type Key = str;

    fn key(&self) -> &str {
        self
    }

    fn label(&self) -> &str {
        self
    }
}

/// A plain text chip, such as a tag.
///
/// Two text chips are the same chip when their labels match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextChip {
    label: String,
}

impl TextChip {
    /// Create a chip with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Chip for TextChip {
    type Key = str;

    fn key(&self) -> &str {
        &self.label
    }

    fn label(&self) -> &str {
        &self.label
    }
}

impl From<&str> for TextChip {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl fmt::Display for TextChip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
