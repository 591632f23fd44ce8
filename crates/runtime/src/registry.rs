use crate::{ErrorKind, Result, prelude::*};

/// The classes that have been defined in a [RookVm], looked up by name
#[derive(Default)]
pub struct ClassRegistry {
    classes: RookIndexMap<RString, RClass>,
}

impl ClassRegistry {
    /// Defines a class, or reopens it if a class with the same name already exists
    ///
    /// Reopening a class adds the builder's methods (replacing methods with the same name) and
    /// declares its shared slots, keeping the values of slots that already exist.
    /// If the builder names a different superclass than the existing class then a
    /// [SuperclassMismatch](ErrorKind::SuperclassMismatch) error is returned.
    ///
    /// `default_superclass` is used for new classes that don't specify a superclass.
    pub fn define(
        &mut self,
        builder: ClassBuilder,
        default_superclass: Option<&RClass>,
    ) -> Result<RClass> {
        if let Some(existing) = self.classes.get(builder.name().as_str()).cloned() {
            if let Some(superclass) = builder.explicit_superclass() {
                let matches = existing
                    .superclass()
                    .is_some_and(|existing_superclass| existing_superclass.is_same_class(superclass));
                if !matches {
                    return Err(ErrorKind::SuperclassMismatch(existing.name().clone()).into());
                }
            }

            builder.reopen(&existing);
            Ok(existing)
        } else {
            let class = builder.build(default_superclass.cloned());
            self.insert(class.clone());
            Ok(class)
        }
    }

    /// Returns the class with the given name
    ///
    /// A [NoSuchClass](ErrorKind::NoSuchClass) error is returned if no class has been defined with
    /// the name.
    pub fn get(&self, name: &str) -> Result<RClass> {
        self.classes
            .get(name)
            .cloned()
            .ok_or_else(|| ErrorKind::NoSuchClass(name.into()).into())
    }

    /// Returns true if a class with the given name has been defined
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Returns the names of the defined classes, in definition order
    pub fn names(&self) -> impl Iterator<Item = &RString> {
        self.classes.keys()
    }

    pub(crate) fn insert(&mut self, class: RClass) {
        self.classes.insert(class.name().clone(), class);
    }
}

/// The free functions that have been defined in a [RookVm]
#[derive(Default)]
pub struct FunctionRegistry {
    functions: RookIndexMap<RString, RFunction>,
}

impl FunctionRegistry {
    /// Defines a function, replacing any existing function with the same name
    pub fn define(&mut self, name: impl Into<RString>, function: impl RookFunction) -> RFunction {
        let function = RFunction::new(function);
        self.functions.insert(name.into(), function.clone());
        function
    }

    /// Returns the function with the given name, if it exists
    pub fn get(&self, name: &str) -> Option<RFunction> {
        self.functions.get(name).cloned()
    }

    /// Returns the names of the defined functions, in definition order
    pub fn names(&self) -> impl Iterator<Item = &RString> {
        self.functions.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_classes() {
        let registry = ClassRegistry::default();

        let error = registry.get("Poop").unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::NoSuchClass(name) if *name == "Poop"));
        assert_eq!(error.to_string(), "uninitialized constant Poop");
    }

    #[test]
    fn redefining_a_class_reopens_it() {
        let mut registry = ClassRegistry::default();

        let first = registry
            .define(ClassBuilder::new("Poop").shared_slot("answer", "yes"), None)
            .unwrap();
        let second = registry
            .define(ClassBuilder::new("Poop").shared_slot("answer", "no"), None)
            .unwrap();

        assert!(first.is_same_class(&second));
        assert_eq!(second.shared_slot("answer"), Some(RValue::from("yes")));
        assert_eq!(registry.names().count(), 1);
    }

    #[test]
    fn reopening_with_a_different_superclass_fails() {
        let mut registry = ClassRegistry::default();
        let base = registry.define(ClassBuilder::new("Base"), None).unwrap();
        let other = registry.define(ClassBuilder::new("Other"), None).unwrap();

        registry
            .define(ClassBuilder::new("Derived").superclass(base.clone()), None)
            .unwrap();

        assert!(
            registry
                .define(ClassBuilder::new("Derived").superclass(base), None)
                .is_ok()
        );
        let error = registry
            .define(ClassBuilder::new("Derived").superclass(other), None)
            .unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::SuperclassMismatch(_)));
    }
}
