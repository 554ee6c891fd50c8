//! Shared handle to a built indentation string.

use std::fmt;
use std::ops::Deref;
use std::sync::{Arc, OnceLock};

/// The empty string, allocated once for every invisible result.
static EMPTY: OnceLock<Arc<str>> = OnceLock::new();

/// An immutable indentation string returned by a policy.
///
/// Cloning is O(1): a cache hit hands out the memoized allocation rather
/// than a copy. Compares equal to `str`, `&str` and `String` by content.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IndentStr(Arc<str>);

impl IndentStr {
    #[inline]
    pub(crate) fn new(text: Arc<str>) -> Self {
        Self(text)
    }

    /// The empty string, sharing one allocation across all callers.
    pub fn empty() -> Self {
        Self(Arc::clone(EMPTY.get_or_init(|| Arc::from(""))))
    }

    /// Borrow the text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.0, &other.0)
    }
}

impl Default for IndentStr {
    fn default() -> Self {
        Self::empty()
    }
}

impl Deref for IndentStr {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.0
    }
}

impl From<IndentStr> for String {
    fn from(text: IndentStr) -> Self {
        text.0.as_ref().to_owned()
    }
}

impl PartialEq<str> for IndentStr {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for IndentStr {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl PartialEq<String> for IndentStr {
    fn eq(&self, other: &String) -> bool {
        *self.0 == **other
    }
}

impl PartialEq<IndentStr> for str {
    fn eq(&self, other: &IndentStr) -> bool {
        *self == *other.0
    }
}

impl PartialEq<IndentStr> for &str {
    fn eq(&self, other: &IndentStr) -> bool {
        **self == *other.0
    }
}

impl PartialEq<IndentStr> for String {
    fn eq(&self, other: &IndentStr) -> bool {
        **self == *other.0
    }
}

impl fmt::Display for IndentStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for IndentStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_shared() {
        let a = IndentStr::empty();
        let b = IndentStr::default();
        assert!(IndentStr::ptr_eq(&a, &b));
        assert!(a.is_empty());
    }

    #[test]
    fn compares_by_content() {
        let text = IndentStr::new(Arc::from("\t\t"));
        assert_eq!(text, "\t\t");
        assert_eq!(text, String::from("\t\t"));
        assert_eq!(text.as_str(), "\t\t");
        assert_eq!(text, IndentStr::new(Arc::from("\t\t")));
        assert_eq!(String::from("\t\t"), text);
        assert_eq!("\t\t", text);
    }

    #[test]
    fn clone_shares_allocation() {
        let text = IndentStr::new(Arc::from("    "));
        let copy = text.clone();
        assert!(IndentStr::ptr_eq(&text, &copy));
    }

    #[test]
    fn formats_like_str() {
        let text = IndentStr::new(Arc::from("\n "));
        assert_eq!(text.to_string(), "\n ");
        assert_eq!(format!("{text:?}"), r#""\n ""#);
        assert_eq!(String::from(text), "\n ");
    }
}
