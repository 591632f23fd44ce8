//! The core value type used in the Rook runtime

use crate::{lazy, prelude::*};
use rook_memory::Address;
use std::fmt;

/// The core Value type for Rook
#[derive(Clone, Default)]
pub enum RValue {
    /// The default type representing the absence of a value
    #[default]
    Nil,

    /// A boolean, can be either true or false
    Bool(bool),

    /// A signed 64 bit integer
    Int(i64),

    /// An immutable string
    Str(RString),

    /// A list of values
    List(RList),

    /// The associative container type, mapping hashable keys to values
    Map(RMap),

    /// A class definition, see [RClass]
    Class(RClass),

    /// An instance of a class defined at runtime
    Object(RObject),
}

impl RValue {
    /// Returns the value's type as a [RString]
    ///
    /// Instances return the name of their class.
    pub fn type_name(&self) -> RString {
        use RValue::*;
        match &self {
            Nil => lazy!(RString; "Nil"),
            Bool(_) => lazy!(RString; "Boolean"),
            Int(_) => lazy!(RString; "Integer"),
            Str(_) => lazy!(RString; "String"),
            List(_) => lazy!(RString; "List"),
            Map(_) => lazy!(RString; "Map"),
            Class(_) => lazy!(RString; "Class"),
            Object(o) => o.class().name().clone(),
        }
    }

    /// Returns false for `nil` and `false`, and true for everything else
    pub fn is_truthy(&self) -> bool {
        !matches!(self, RValue::Nil | RValue::Bool(false))
    }

    /// Returns true if the value can be used as a map key, see [ValueKey]
    pub fn is_hashable(&self) -> bool {
        use RValue::*;
        matches!(self, Nil | Bool(_) | Int(_) | Str(_))
    }

    /// Converts the value into its canonical textual form
    ///
    /// Strings return themselves, integers their base-10 form, booleans `true` or `false`,
    /// and `nil` returns an empty string.
    pub fn to_display(&self) -> RString {
        match self {
            RValue::Str(s) => s.clone(),
            RValue::Nil => RString::empty(),
            _ => {
                let mut ctx = DisplayContext::default();
                self.display(&mut ctx);
                ctx.result().into()
            }
        }
    }

    /// Returns a developer-facing rendering of the value, with strings in quotes
    pub fn inspect(&self) -> RString {
        match self {
            RValue::Str(s) => format!("{:?}", s.as_str()).into(),
            RValue::Nil => lazy!(RString; "nil"),
            _ => self.to_display(),
        }
    }

    /// Renders the value into the provided display context
    pub fn display(&self, ctx: &mut DisplayContext) {
        use RValue::*;
        match self {
            Nil if ctx.is_contained() => ctx.append("nil"),
            Nil => {}
            Bool(b) => ctx.append(if *b { "true" } else { "false" }),
            Int(n) => ctx.append(&n.to_string()),
            Str(s) => s.display(ctx),
            List(l) => l.display(ctx),
            Map(m) => m.display(ctx),
            Class(c) => ctx.append(c.name()),
            Object(o) => o.display(ctx),
        }
    }
}

impl PartialEq for RValue {
    fn eq(&self, other: &Self) -> bool {
        values_equal(self, other, &mut Vec::new())
    }
}

// Lists and maps are compared by contents. `open` holds the container pairs currently being
// compared, a pair that's reached again is assumed equal so that recursive containers terminate.
fn values_equal(a: &RValue, b: &RValue, open: &mut Vec<(Address, Address)>) -> bool {
    use RValue::*;

    match (a, b) {
        (Nil, Nil) => true,
        (Bool(a), Bool(b)) => a == b,
        (Int(a), Int(b)) => a == b,
        (Str(a), Str(b)) => a == b,
        (List(a), List(b)) => {
            if a.is_same_instance(b) {
                return true;
            }
            compare_contents((a.address(), b.address()), open, |open| {
                let (a, b) = (a.data(), b.data());
                a.len() == b.len()
                    && a.iter().zip(b.iter()).all(|(a, b)| values_equal(a, b, open))
            })
        }
        (Map(a), Map(b)) => {
            if a.is_same_instance(b) {
                return true;
            }
            compare_contents((a.address(), b.address()), open, |open| {
                let (a, b) = (a.data(), b.data());
                a.len() == b.len()
                    && a.iter()
                        .all(|(key, a)| b.get(key).is_some_and(|b| values_equal(a, b, open)))
            })
        }
        (Class(a), Class(b)) => a.is_same_class(b),
        (Object(a), Object(b)) => a.is_same_instance(b),
        _ => false,
    }
}

fn compare_contents(
    pair: (Address, Address),
    open: &mut Vec<(Address, Address)>,
    compare: impl FnOnce(&mut Vec<(Address, Address)>) -> bool,
) -> bool {
    if open.contains(&pair) {
        return true;
    }

    open.push(pair);
    let result = compare(open);
    open.pop();
    result
}

impl fmt::Debug for RValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.type_name(), self.inspect())
    }
}

impl From<()> for RValue {
    fn from(_: ()) -> Self {
        Self::Nil
    }
}

impl From<bool> for RValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for RValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for RValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<usize> for RValue {
    fn from(value: usize) -> Self {
        Self::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<&str> for RValue {
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

impl From<String> for RValue {
    fn from(value: String) -> Self {
        Self::Str(value.into())
    }
}

impl From<RString> for RValue {
    fn from(value: RString) -> Self {
        Self::Str(value)
    }
}

impl From<RList> for RValue {
    fn from(value: RList) -> Self {
        Self::List(value)
    }
}

impl From<RMap> for RValue {
    fn from(value: RMap) -> Self {
        Self::Map(value)
    }
}

impl From<RClass> for RValue {
    fn from(value: RClass) -> Self {
        Self::Class(value)
    }
}

impl From<RObject> for RValue {
    fn from(value: RObject) -> Self {
        Self::Object(value)
    }
}
