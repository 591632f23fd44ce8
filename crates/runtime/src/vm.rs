use crate::{
    ErrorKind, Ptr, Result,
    core_lib::CoreLib,
    prelude::*,
    registry::{ClassRegistry, FunctionRegistry},
};

/// The configurable settings that should be used by the Rook runtime
pub struct RookVmSettings {
    /// The runtime's stdin
    pub stdin: Ptr<dyn RookFile>,

    /// The runtime's stdout
    pub stdout: Ptr<dyn RookFile>,

    /// The runtime's stderr
    pub stderr: Ptr<dyn RookFile>,

    /// The process arguments, made available to programs via the `args` kernel function
    ///
    /// By convention the first argument is the program's name.
    pub args: Vec<String>,

    /// The maximum depth of nested method and function calls
    ///
    /// If the limit is exceeded then a [StackOverflow](ErrorKind::StackOverflow) error is
    /// returned.
    pub max_call_depth: usize,
}

impl Default for RookVmSettings {
    fn default() -> Self {
        Self {
            stdin: make_ptr!(SystemStdin::default()),
            stdout: make_ptr!(SystemStdout::default()),
            stderr: make_ptr!(SystemStderr::default()),
            args: Vec::new(),
            max_call_depth: 255,
        }
    }
}

/// The Rook runtime's virtual machine
///
/// The VM owns the class and function registries, so each VM has its own independent set of
/// classes and shared class state.
pub struct RookVm {
    // The settings that were used to initialize the runtime
    settings: RookVmSettings,
    // The runtime's built-in classes
    core_lib: CoreLib,
    classes: ClassRegistry,
    functions: FunctionRegistry,
    // The number of method or function calls that are currently active
    call_depth: usize,
}

impl Default for RookVm {
    fn default() -> Self {
        Self::with_settings(RookVmSettings::default())
    }
}

impl RookVm {
    /// Initializes a Rook VM with the provided settings
    ///
    /// The core library's classes and kernel functions are registered before the VM is returned.
    pub fn with_settings(settings: RookVmSettings) -> Self {
        let mut classes = ClassRegistry::default();
        let mut functions = FunctionRegistry::default();
        let core_lib = CoreLib::register(&mut classes, &mut functions);

        Self {
            settings,
            core_lib,
            classes,
            functions,
            call_depth: 0,
        }
    }

    /// The stdin wrapper used by the VM
    pub fn stdin(&self) -> &Ptr<dyn RookFile> {
        &self.settings.stdin
    }

    /// The stdout wrapper used by the VM
    pub fn stdout(&self) -> &Ptr<dyn RookFile> {
        &self.settings.stdout
    }

    /// The stderr wrapper used by the VM
    pub fn stderr(&self) -> &Ptr<dyn RookFile> {
        &self.settings.stderr
    }

    /// The process arguments that were provided in the VM's settings
    pub fn args(&self) -> &[String] {
        &self.settings.args
    }

    /// The runtime's built-in classes
    pub fn core_lib(&self) -> &CoreLib {
        &self.core_lib
    }

    /// Defines a class, see [ClassRegistry::define]
    ///
    /// Classes that don't specify a superclass inherit from `Object`.
    pub fn define_class(&mut self, builder: ClassBuilder) -> Result<RClass> {
        self.classes.define(builder, Some(&self.core_lib.object))
    }

    /// Returns the class with the given name
    pub fn get_class(&self, name: &str) -> Result<RClass> {
        self.classes.get(name)
    }

    /// Returns the class that handles method calls for the given value
    pub fn class_of(&self, value: &RValue) -> RClass {
        use RValue::*;

        let core = &self.core_lib;
        match value {
            Nil => core.nil.clone(),
            Bool(_) => core.boolean.clone(),
            Int(_) => core.integer.clone(),
            Str(_) => core.string.clone(),
            List(_) => core.list.clone(),
            Map(_) => core.map.clone(),
            Class(_) => core.class.clone(),
            Object(o) => o.class().clone(),
        }
    }

    /// Makes a new instance of the class with the given name
    ///
    /// See [RookVm::instantiate].
    pub fn construct(&mut self, class_name: &str, args: &[RValue]) -> Result<RValue> {
        let class = self.get_class(class_name)?;
        self.instantiate(&class, args)
    }

    /// Makes a new instance of the class, running its initializer with the provided args
    ///
    /// The initializer is run with `self` bound to the new instance before the instance is
    /// returned. Classes without an initializer don't accept any arguments.
    pub fn instantiate(&mut self, class: &RClass, args: &[RValue]) -> Result<RValue> {
        let instance = match class.kind() {
            ClassKind::User => RObject::new(class.clone()).into(),
            ClassKind::Builtin(Some(allocate)) => allocate(),
            ClassKind::Builtin(None) => {
                return runtime_error!("allocator undefined for {}", class.name());
            }
        };

        match class.lookup_method("initialize") {
            Some(initializer) => {
                self.call_with_frame(&initializer, instance.clone(), args, || {
                    format!("{}#initialize", class.name()).into()
                })?;
            }
            None if !args.is_empty() => return unexpected_args("no arguments", args),
            None => {}
        }

        Ok(instance)
    }

    /// Calls a method on a value
    ///
    /// The method is looked up in the value's class and then in its superclasses.
    /// A [NoMethod](ErrorKind::NoMethod) error is returned if the method isn't found.
    pub fn dispatch(&mut self, receiver: &RValue, method: &str, args: &[RValue]) -> Result<RValue> {
        let class = self.class_of(receiver);
        let Some(function) = class.lookup_method(method) else {
            return Err(ErrorKind::NoMethod {
                type_name: receiver.type_name(),
                method: method.into(),
            }
            .into());
        };

        self.call_with_frame(&function, receiver.clone(), args, || {
            format!("{}#{method}", class.name()).into()
        })
    }

    /// Defines a free function, replacing any existing function with the same name
    pub fn define_function(
        &mut self,
        name: impl Into<RString>,
        function: impl RookFunction,
    ) -> RFunction {
        self.functions.define(name, function)
    }

    /// Calls a free function by name
    ///
    /// Unknown functions produce a [NoMethod](ErrorKind::NoMethod) error with `Kernel` as the
    /// receiver.
    pub fn call_function(&mut self, name: &str, args: &[RValue]) -> Result<RValue> {
        let Some(function) = self.functions.get(name) else {
            return Err(ErrorKind::NoMethod {
                type_name: "Kernel".into(),
                method: name.into(),
            }
            .into());
        };

        self.call_with_frame(&function, RValue::Nil, args, || name.into())
    }

    /// Returns true if a free function with the given name has been defined
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.get(name).is_some()
    }

    fn call_with_frame(
        &mut self,
        function: &RFunction,
        instance: RValue,
        args: &[RValue],
        frame: impl FnOnce() -> RString,
    ) -> Result<RValue> {
        if self.call_depth >= self.settings.max_call_depth {
            return Err(ErrorKind::StackOverflow.into());
        }

        self.call_depth += 1;
        let result = function.call(&mut CallContext::new(self, instance, args));
        self.call_depth -= 1;

        result.map_err(|mut error| {
            error.extend_trace(frame());
            error
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_value_has_a_class() {
        let vm = RookVm::default();

        for (value, expected) in [
            (RValue::Nil, "Nil"),
            (true.into(), "Boolean"),
            (1.into(), "Integer"),
            ("x".into(), "String"),
            (RList::default().into(), "List"),
            (RMap::default().into(), "Map"),
            (vm.core_lib().object.clone().into(), "Class"),
        ] {
            assert_eq!(vm.class_of(&value).name(), expected);
        }
    }

    #[test]
    fn builtin_classes_inherit_from_object() {
        let vm = RookVm::default();
        let object = vm.get_class("Object").unwrap();

        for name in ["Nil", "Boolean", "Integer", "String", "List", "Map", "Class"] {
            assert!(vm.get_class(name).unwrap().is_subclass_of(&object), "{name}");
        }
    }

    #[test]
    fn call_depth_is_restored_after_an_error() {
        let mut vm = RookVm::default();
        vm.define_function("fail", |_| raise("nope"));

        assert!(vm.call_function("fail", &[]).is_err());
        assert_eq!(vm.call_depth, 0);
    }
}
