use crate::{Borrow, BorrowMut, PtrMut, prelude::*};
use rook_memory::Address;

/// The underlying Vec type used by [RList]
pub type ValueVec = Vec<RValue>;

/// The List type used by the Rook runtime
///
/// Clones of a list share the same contents.
#[derive(Clone, Default)]
pub struct RList(PtrMut<ValueVec>);

impl RList {
    /// Creates an RList initialized with the provided data
    pub fn with_data(data: ValueVec) -> Self {
        Self(data.into())
    }

    /// Returns the number of entries of the RList
    pub fn len(&self) -> usize {
        self.data().len()
    }

    /// Returns true if there are no entries in the RList
    pub fn is_empty(&self) -> bool {
        self.data().is_empty()
    }

    /// Returns a reference to the RList's entries
    pub fn data(&self) -> Borrow<'_, ValueVec> {
        self.0.borrow()
    }

    /// Returns a mutable reference to the RList's entries
    pub fn data_mut(&self) -> BorrowMut<'_, ValueVec> {
        self.0.borrow_mut()
    }

    /// Returns a clone of the entry at the given index
    pub fn get(&self, index: usize) -> Option<RValue> {
        self.data().get(index).cloned()
    }

    /// Appends a value to the end of the list
    pub fn push(&self, value: impl Into<RValue>) {
        self.data_mut().push(value.into());
    }

    /// Returns true if the provided RList occupies the same memory address
    pub fn is_same_instance(&self, other: &Self) -> bool {
        PtrMut::ptr_eq(&self.0, &other.0)
    }

    /// Returns the address of the list's shared contents
    pub(crate) fn address(&self) -> Address {
        PtrMut::address(&self.0)
    }

    /// Renders the list into the provided display context
    pub fn display(&self, ctx: &mut DisplayContext) {
        ctx.push('[');
        ctx.container(self.address(), |ctx| {
            for (i, value) in self.data().iter().enumerate() {
                if i > 0 {
                    ctx.append(", ");
                }
                value.display(ctx);
            }
        });
        ctx.push(']');
    }
}

impl From<ValueVec> for RList {
    fn from(data: ValueVec) -> Self {
        Self::with_data(data)
    }
}
