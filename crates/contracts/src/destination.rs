//! DestinationName - Cheap-to-clone output target identifier
//!
//! Uses Arc<str> internally; the same name is held by the destination set
//! and by every active-target list that refers to it.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

/// Name of an output destination, exactly as written in a directive.
///
/// Names are opaque: `out.txt` and `./out.txt` are two different
/// destinations even though they resolve to the same file.
///
/// # Examples
/// ```
/// use contracts::DestinationName;
///
/// let name: DestinationName = "/tmp/out1".into();
/// let again = name.clone(); // O(1) - just increments ref count
/// assert_eq!(name, again);
/// assert_eq!(name.as_path(), std::path::Path::new("/tmp/out1"));
/// ```
#[derive(Clone)]
pub struct DestinationName(Arc<str>);

impl DestinationName {
    /// Create a new DestinationName from a string slice.
    #[inline]
    pub fn new(s: &str) -> Self {
        Self(Arc::from(s))
    }

    /// Get the underlying string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name interpreted verbatim as a filesystem path.
    #[inline]
    pub fn as_path(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl Deref for DestinationName {
    type Target = str;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for DestinationName {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<Path> for DestinationName {
    #[inline]
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl Borrow<str> for DestinationName {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DestinationName {
    #[inline]
    fn from(s: &str) -> Self {
        Self(Arc::from(s))
    }
}

impl From<String> for DestinationName {
    #[inline]
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl fmt::Display for DestinationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for DestinationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DestinationName({:?})", self.0)
    }
}

impl PartialEq for DestinationName {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl Eq for DestinationName {}

impl PartialEq<str> for DestinationName {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for DestinationName {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

// Must hash like `str` so `HashMap<DestinationName, _>` can be queried with `&str`.
impl Hash for DestinationName {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}
