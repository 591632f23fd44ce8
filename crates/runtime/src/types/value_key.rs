use crate::{Error, prelude::*};
use indexmap::Equivalent;
use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// The key type used by [ValueMap](crate::ValueMap)
///
/// Only hashable values can be used as keys, see [RValue::is_hashable]
#[derive(Clone)]
pub struct ValueKey(RValue);

impl ValueKey {
    /// Returns a reference to the key's value
    pub fn value(&self) -> &RValue {
        &self.0
    }
}

impl TryFrom<RValue> for ValueKey {
    type Error = Error;

    fn try_from(value: RValue) -> Result<Self, Self::Error> {
        if value.is_hashable() {
            Ok(Self(value))
        } else {
            unexpected_type("a hashable value as map key", &value)
        }
    }
}

impl PartialEq for ValueKey {
    fn eq(&self, other: &Self) -> bool {
        use RValue::*;

        match (&self.0, &other.0) {
            (Nil, Nil) => true,
            (Bool(a), Bool(b)) => a == b,
            (Int(a), Int(b)) => a == b,
            (Str(a), Str(b)) => a == b,
            _ => false,
        }
    }
}
impl Eq for ValueKey {}

impl Hash for ValueKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        use RValue::*;

        // String keys hash in the same way as `str` so that maps can be queried with `&str`
        match &self.0 {
            Bool(b) => b.hash(state),
            Int(n) => n.hash(state),
            Str(s) => s.hash(state),
            _ => {}
        }
    }
}

impl fmt::Display for ValueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.inspect())
    }
}

impl fmt::Debug for ValueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<RString> for ValueKey {
    fn from(value: RString) -> Self {
        Self(RValue::Str(value))
    }
}

impl From<&str> for ValueKey {
    fn from(value: &str) -> Self {
        Self(RValue::Str(value.into()))
    }
}

impl From<i64> for ValueKey {
    fn from(value: i64) -> Self {
        Self(RValue::Int(value))
    }
}

impl From<i32> for ValueKey {
    fn from(value: i32) -> Self {
        Self(RValue::Int(value.into()))
    }
}

impl From<bool> for ValueKey {
    fn from(value: bool) -> Self {
        Self(RValue::Bool(value))
    }
}

// Support efficient map accesses with &str
impl Equivalent<ValueKey> for str {
    fn equivalent(&self, other: &ValueKey) -> bool {
        match &other.0 {
            RValue::Str(s) => self == s.as_str(),
            _ => false,
        }
    }
}

impl Equivalent<ValueKey> for RString {
    fn equivalent(&self, other: &ValueKey) -> bool {
        match &other.0 {
            RValue::Str(s) => self == s,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_hashable_values_become_keys() {
        assert!(ValueKey::try_from(RValue::from("k")).is_ok());
        assert!(ValueKey::try_from(RValue::from(3)).is_ok());
        assert!(ValueKey::try_from(RValue::Nil).is_ok());
        assert!(ValueKey::try_from(RValue::from(RList::default())).is_err());
    }

    #[test]
    fn keys_display_like_inspected_values() {
        assert_eq!(ValueKey::from("k").to_string(), r#""k""#);
        assert_eq!(ValueKey::from(3).to_string(), "3");
    }
}
