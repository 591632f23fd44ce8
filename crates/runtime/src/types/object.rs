use crate::{PtrMut, prelude::*};

/// An instance of a class defined at runtime
///
/// Each instance owns its own record of fields, shared state lives in the instance's class.
/// Clones of an RObject refer to the same instance.
#[derive(Clone)]
pub struct RObject {
    class: RClass,
    fields: PtrMut<SlotMap>,
}

impl RObject {
    /// Creates a new instance of the given class with no fields set
    pub fn new(class: RClass) -> Self {
        Self {
            class,
            fields: SlotMap::default().into(),
        }
    }

    /// Returns the instance's class
    pub fn class(&self) -> &RClass {
        &self.class
    }

    /// Returns the value of a field, or `nil` if the field hasn't been written
    pub fn field(&self, name: &str) -> RValue {
        self.fields.borrow().get(name).cloned().unwrap_or_default()
    }

    /// Writes a field, creating it if necessary
    pub fn set_field(&self, name: &str, value: impl Into<RValue>) {
        self.fields.borrow_mut().insert(name.into(), value.into());
    }

    /// Returns the names of the instance's fields, in the order they were first written
    pub fn field_names(&self) -> Vec<RString> {
        self.fields.borrow().keys().cloned().collect()
    }

    /// Returns true if the provided RObject is the same instance
    pub fn is_same_instance(&self, other: &Self) -> bool {
        PtrMut::ptr_eq(&self.fields, &other.fields)
    }

    /// Renders the instance as `#<ClassName>`
    pub fn display(&self, ctx: &mut DisplayContext) {
        ctx.append("#<");
        ctx.append(self.class.name());
        ctx.push('>');
    }
}
