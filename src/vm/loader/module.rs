use crate::vm::value::function::{Arity, Function, NativeFn};

/// A module name paired with the constructor that installs it.
///
/// The empty name stands for the global namespace.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleDescriptor {
    name: String,
    constructor: Function,
}

impl ModuleDescriptor {
    pub fn new<S: Into<String>>(name: S, constructor: Function) -> Self {
        Self {
            name: name.into(),
            constructor,
        }
    }

    pub fn native<S: Into<String>>(name: S, open: NativeFn) -> Self {
        let name = name.into();
        let constructor = Function::native(
            format!("open_{}", binding_name(&name)),
            open,
            Arity::Many,
        );
        Self::new(name, constructor)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name used to refer to the module in diagnostics, `_G` for the
    /// global namespace.
    pub fn binding_name(&self) -> &str {
        binding_name(&self.name)
    }

    pub fn constructor(&self) -> &Function {
        &self.constructor
    }
}

fn binding_name(name: &str) -> &str {
    if name.is_empty() {
        "_G"
    } else {
        name
    }
}

/// An ordered, immutable sequence of module descriptors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleList {
    modules: Vec<ModuleDescriptor>,
}

impl ModuleList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, descriptor: ModuleDescriptor) -> Self {
        self.modules.push(descriptor);
        self
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ModuleDescriptor> {
        self.modules.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.modules.iter().map(|m| m.name()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&ModuleDescriptor> {
        self.modules.iter().find(|m| m.name() == name)
    }
}

impl std::iter::FromIterator<ModuleDescriptor> for ModuleList {
    fn from_iter<I: IntoIterator<Item = ModuleDescriptor>>(iter: I) -> Self {
        Self {
            modules: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ModuleList {
    type Item = &'a ModuleDescriptor;
    type IntoIter = std::slice::Iter<'a, ModuleDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.modules.iter()
    }
}
