use crate::{Ptr, lazy, prelude::*};
use std::{
    borrow::Borrow,
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, Range},
};
use unicode_segmentation::UnicodeSegmentation;

/// The String type used by the Rook runtime
///
/// Strings are immutable. The underlying string data is shared between instances, with internal
/// bounds allowing for shared subslices, so slicing never copies or modifies the source string.
#[derive(Clone)]
pub struct RString(Inner);

#[derive(Clone)]
enum Inner {
    Full(Ptr<str>),
    Slice {
        string: Ptr<str>,
        bounds: Range<usize>,
    },
}

impl RString {
    /// Returns the empty string
    ///
    /// This returns a clone of an empty RString which is initialized once per thread.
    pub fn empty() -> Self {
        Self::from(lazy!(Ptr<str>; ""))
    }

    /// Returns a new RString with shared data and new bounds
    ///
    /// The bounds are byte offsets relative to the start of this string. If the bounds aren't
    /// valid then `None` is returned.
    pub fn with_bounds(&self, new_bounds: Range<usize>) -> Option<Self> {
        let (string, offset) = match &self.0 {
            Inner::Full(string) => (string, 0),
            Inner::Slice { string, bounds } => (string, bounds.start),
        };

        // `str::get` checks the range along with its char boundaries
        self.get(new_bounds.clone())?;

        Some(Self(Inner::Slice {
            string: string.clone(),
            bounds: (offset + new_bounds.start)..(offset + new_bounds.end),
        }))
    }

    /// Returns up to `length` characters, starting at the character index `start`
    ///
    /// Characters are unicode grapheme clusters. If `start` is negative or past the end of the
    /// string then an empty string is returned, and if `start + length` goes past the end of the
    /// string then the result is truncated to the available characters.
    pub fn slice(&self, start: i64, length: i64) -> Self {
        let (Ok(start), Ok(length)) = (usize::try_from(start), usize::try_from(length)) else {
            return Self::empty();
        };

        let mut selected = self.grapheme_indices(true).skip(start).take(length);
        let Some((first_start, first)) = selected.next() else {
            return Self::empty();
        };
        let end = selected
            .last()
            .map_or(first_start + first.len(), |(i, grapheme)| i + grapheme.len());

        self.with_bounds(first_start..end)
            .unwrap_or_else(Self::empty)
    }

    /// Returns a new string containing this string followed by `other`
    pub fn concat(&self, other: &RString) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }

        let mut result = String::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result.into()
    }

    /// Returns the number of graphemes contained within the RString's bounds
    pub fn grapheme_count(&self) -> usize {
        self.graphemes(true).count()
    }

    /// Returns the `&str` within the RString's bounds
    pub fn as_str(&self) -> &str {
        match &self.0 {
            Inner::Full(string) => string,
            Inner::Slice { string, bounds } => &string[bounds.clone()],
        }
    }

    /// Renders the string to the provided display context
    ///
    /// Strings inside containers are wrapped in quotes.
    pub fn display(&self, ctx: &mut DisplayContext) {
        if ctx.is_contained() {
            ctx.push('"');
            ctx.append(self);
            ctx.push('"');
        } else {
            ctx.append(self);
        }
    }
}

impl PartialEq<str> for RString {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for RString {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq for RString {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}
impl Eq for RString {}

impl Hash for RString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state)
    }
}

impl Deref for RString {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for RString {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for RString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<Ptr<str>> for RString {
    fn from(string: Ptr<str>) -> Self {
        Self(Inner::Full(string))
    }
}

impl From<String> for RString {
    fn from(s: String) -> Self {
        Self::from(Ptr::<str>::from(s))
    }
}

impl From<&str> for RString {
    fn from(s: &str) -> Self {
        Self::from(Ptr::<str>::from(s))
    }
}

impl fmt::Display for RString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for RString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}
