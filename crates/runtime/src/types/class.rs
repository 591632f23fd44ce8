use crate::{Ptr, RCell, prelude::*};
use std::fmt;

/// The method table of a class, in definition order
pub type MethodMap = RookIndexMap<RString, RFunction>;

/// A record of named slots, used for class-shared state and for instance fields
pub type SlotMap = RookIndexMap<RString, RValue>;

/// A native allocator used when constructing instances of a built-in class
pub type Allocator = fn() -> RValue;

/// Describes how instances of a class are constructed
#[derive(Clone, Copy, Debug)]
pub enum ClassKind {
    /// A class defined at runtime, instances are [RObject]s
    User,
    /// A built-in class, instances are made by the allocator
    ///
    /// Built-in classes without an allocator can't be constructed.
    Builtin(Option<Allocator>),
}

struct ClassData {
    name: RString,
    superclass: Option<RClass>,
    kind: ClassKind,
    methods: RCell<MethodMap>,
    // The class-shared state, a single record regardless of how many instances exist
    shared: RCell<SlotMap>,
}

/// A class definition
///
/// Clones of an RClass refer to the same definition, so methods and shared slots added through one
/// handle are visible through all of them.
#[derive(Clone)]
pub struct RClass(Ptr<ClassData>);

impl RClass {
    /// Returns the class's name
    pub fn name(&self) -> &RString {
        &self.0.name
    }

    /// Returns the class's superclass, if it has one
    pub fn superclass(&self) -> Option<&RClass> {
        self.0.superclass.as_ref()
    }

    /// Returns the class's kind
    pub fn kind(&self) -> ClassKind {
        self.0.kind
    }

    /// Returns an iterator over the class followed by its superclasses
    pub fn ancestors(&self) -> impl Iterator<Item = &RClass> {
        std::iter::successors(Some(self), |&class| class.superclass())
    }

    /// Looks up a method by name, starting with this class and then walking up the superclasses
    pub fn lookup_method(&self, name: &str) -> Option<RFunction> {
        self.ancestors()
            .find_map(|class| class.0.methods.borrow().get(name).cloned())
    }

    /// Returns the names of the methods defined directly on this class
    pub fn method_names(&self) -> Vec<RString> {
        self.0.methods.borrow().keys().cloned().collect()
    }

    /// Returns the value of a shared slot
    ///
    /// Shared slots are looked up on this class first and then on the superclasses.
    /// `None` is returned if the slot hasn't been declared or written.
    pub fn shared_slot(&self, name: &str) -> Option<RValue> {
        self.slot_owner(name)
            .and_then(|class| class.0.shared.borrow().get(name).cloned())
    }

    /// Writes a shared slot
    ///
    /// If the slot exists on this class or a superclass then that slot is updated, otherwise a new
    /// slot is created on this class.
    pub fn set_shared_slot(&self, name: &str, value: impl Into<RValue>) {
        let value = value.into();
        match self.slot_owner(name) {
            Some(owner) => {
                if let Some(slot) = owner.0.shared.borrow_mut().get_mut(name) {
                    *slot = value;
                }
            }
            None => {
                self.0.shared.borrow_mut().insert(name.into(), value);
            }
        }
    }

    /// Returns true if both handles refer to the same class definition
    pub fn is_same_class(&self, other: &Self) -> bool {
        Ptr::ptr_eq(&self.0, &other.0)
    }

    /// Returns true if this class is `other` or inherits from it
    pub fn is_subclass_of(&self, other: &Self) -> bool {
        self.ancestors().any(|class| class.is_same_class(other))
    }

    pub(crate) fn define_method(&self, name: RString, function: RFunction) {
        self.0.methods.borrow_mut().insert(name, function);
    }

    fn declare_shared_slot(&self, name: RString, initial: RValue) {
        self.0.shared.borrow_mut().entry(name).or_insert(initial);
    }

    fn slot_owner(&self, name: &str) -> Option<&RClass> {
        self.ancestors()
            .find(|class| class.0.shared.borrow().contains_key(name))
    }
}

impl fmt::Debug for RClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "class {}", self.name())
    }
}

/// A builder for class definitions, passed to [RookVm::define_class]
///
/// ```
/// use rook_runtime::prelude::*;
///
/// let mut vm = RookVm::default();
/// let counter = ClassBuilder::new("Counter")
///     .shared_slot("count", 0)
///     .initializer(|ctx| {
///         let count = match ctx.shared("count")? {
///             RValue::Int(n) => n + 1,
///             _ => 1,
///         };
///         ctx.set_shared("count", count)?;
///         Ok(RValue::Nil)
///     })
///     .method("count", |ctx| ctx.shared("count"));
///
/// vm.define_class(counter).unwrap();
/// vm.construct("Counter", &[]).unwrap();
/// let last = vm.construct("Counter", &[]).unwrap();
///
/// assert_eq!(vm.dispatch(&last, "count", &[]).unwrap(), RValue::Int(2));
/// ```
pub struct ClassBuilder {
    name: RString,
    superclass: Option<RClass>,
    kind: ClassKind,
    methods: Vec<(RString, RFunction)>,
    shared_slots: Vec<(RString, RValue)>,
}

impl ClassBuilder {
    /// Starts the definition of a class with the given name
    pub fn new(name: impl Into<RString>) -> Self {
        Self {
            name: name.into(),
            superclass: None,
            kind: ClassKind::User,
            methods: Vec::new(),
            shared_slots: Vec::new(),
        }
    }

    /// Sets the class's superclass
    ///
    /// Classes without an explicit superclass inherit from `Object`.
    #[must_use]
    pub fn superclass(mut self, superclass: RClass) -> Self {
        self.superclass = Some(superclass);
        self
    }

    /// Marks the class as built-in, with an optional allocator for its instances
    #[must_use]
    pub fn builtin(mut self, allocator: Option<Allocator>) -> Self {
        self.kind = ClassKind::Builtin(allocator);
        self
    }

    /// Sets the initializer that's run with `self` bound to each new instance
    ///
    /// The initializer is stored as the `initialize` method.
    #[must_use]
    pub fn initializer(self, function: impl RookFunction) -> Self {
        self.method("initialize", function)
    }

    /// Adds a method to the class
    #[must_use]
    pub fn method(mut self, name: impl Into<RString>, function: impl RookFunction) -> Self {
        self.methods.push((name.into(), RFunction::new(function)));
        self
    }

    /// Declares a shared slot with an initial value
    #[must_use]
    pub fn shared_slot(mut self, name: impl Into<RString>, initial: impl Into<RValue>) -> Self {
        self.shared_slots.push((name.into(), initial.into()));
        self
    }

    /// Returns the name of the class that's being defined
    pub fn name(&self) -> &RString {
        &self.name
    }

    /// Returns the explicitly set superclass
    pub fn explicit_superclass(&self) -> Option<&RClass> {
        self.superclass.as_ref()
    }

    /// Creates a new class from the builder
    ///
    /// `default_superclass` is used when no superclass was set on the builder.
    pub(crate) fn build(self, default_superclass: Option<RClass>) -> RClass {
        let class = RClass(Ptr::from(ClassData {
            name: self.name,
            superclass: self.superclass.or(default_superclass),
            kind: self.kind,
            methods: MethodMap::default().into(),
            shared: SlotMap::default().into(),
        }));
        Self::extend(class.clone(), self.methods, self.shared_slots);
        class
    }

    /// Adds the builder's methods and shared slots to an existing class
    ///
    /// Methods replace existing methods with the same name, while existing shared slots keep their
    /// current values.
    pub(crate) fn reopen(self, class: &RClass) {
        Self::extend(class.clone(), self.methods, self.shared_slots);
    }

    fn extend(
        class: RClass,
        methods: Vec<(RString, RFunction)>,
        shared_slots: Vec<(RString, RValue)>,
    ) {
        for (name, function) in methods {
            class.define_method(name, function);
        }
        for (name, initial) in shared_slots {
            class.declare_shared_slot(name, initial);
        }
    }
}
