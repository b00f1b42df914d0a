pub mod error;
pub mod loader;
pub mod reference;
pub mod settings;
pub mod stdlib;
pub mod value;

pub use error::{Error, Result};
pub use loader::{install_standard_library, Libraries};
pub use settings::{Library, Settings};

use reference::Reference;
use value::function::{Function, FunctionResult, Registration};
use value::table::Table;
use value::Value;

/// Registry field holding the constructors of modules that are staged but
/// not yet materialized.
pub const PRELOAD_KEY: &str = "_PRELOAD";

/// Registry field holding every materialized module table by name.
pub const LOADED_KEY: &str = "_LOADED";

/// The interpreter state modules are installed into.
///
/// A state owns two tables: the global namespace scripts see and the
/// registry, which is only reachable from native code.
#[derive(Debug)]
pub struct VM {
    globals: Reference<Table>,
    registry: Reference<Table>,
}

impl VM {
    /// A bare state without any module installed.
    pub fn new() -> Self {
        Self {
            globals: Reference::new(Table::new()),
            registry: Reference::new(Table::new()),
        }
    }

    /// A state with the standard module profile described by `settings` installed.
    pub fn standard(settings: &Settings) -> Result<Self> {
        let mut vm = VM::new();
        install_standard_library(&mut vm, &Libraries::standard(settings))?;
        Ok(vm)
    }

    pub fn globals(&self) -> Reference<Table> {
        self.globals.clone()
    }

    pub fn registry(&self) -> Reference<Table> {
        self.registry.clone()
    }

    pub fn global(&self, name: &str) -> Value {
        self.globals.borrow().get_field(name)
    }

    pub fn set_global<V: Into<Value>>(&mut self, name: &str, value: V) {
        self.globals.borrow_mut().set_field(name, value)
    }

    pub fn call(&mut self, callable: &Value, arguments: Vec<Value>) -> FunctionResult<Vec<Value>> {
        match callable {
            Value::Function(f) => f.clone().call(self, arguments),
            other => Err(value::error::non_callable(other.clone())),
        }
    }

    /// Walks the dotted `path` starting at `root` and returns the table found
    /// at its end. Missing tables along the way are created; the final one is
    /// sized for `size_hint` fields. A component that exists but holds
    /// something other than a table is a name conflict.
    pub fn find_table(
        &mut self,
        root: &Reference<Table>,
        path: &str,
        size_hint: usize,
    ) -> FunctionResult<Reference<Table>> {
        let mut current = root.clone();
        let mut components = path.split('.').peekable();

        while let Some(component) = components.next() {
            let existing = current.borrow().get_field(component);
            let next = match existing {
                Value::Table(t) => t,
                Value::Nil => {
                    let capacity = if components.peek().is_none() {
                        size_hint
                    } else {
                        1
                    };
                    let created = Reference::new(Table::with_capacity(capacity));
                    current
                        .borrow_mut()
                        .set_field(component, Value::Table(created.clone()));
                    trace!("created table `{}` for path `{}`", component, path);
                    created
                }
                _ => return Err(value::error::name_conflict(component)),
            };
            current = next;
        }

        Ok(current)
    }

    pub fn loaded(&mut self) -> FunctionResult<Reference<Table>> {
        let registry = self.registry();
        self.find_table(&registry, LOADED_KEY, 16)
    }

    pub fn preload(&mut self) -> FunctionResult<Reference<Table>> {
        let registry = self.registry();
        self.find_table(&registry, PRELOAD_KEY, 0)
    }

    /// Installs `functions` as the module `name` and returns its table.
    ///
    /// The empty name installs into the global namespace. Any other name
    /// reuses `_LOADED[name]` if it already holds a table, or binds a new
    /// global table of that name and records it in `_LOADED`.
    pub fn register_module(
        &mut self,
        name: &str,
        functions: &[Registration],
    ) -> FunctionResult<Reference<Table>> {
        let loaded = self.loaded()?;

        let module = if name.is_empty() {
            let globals = self.globals();
            loaded.borrow_mut().set_field("_G", globals.clone());
            globals
        } else {
            let existing = loaded.borrow().get_field(name);
            match existing {
                Value::Table(t) => t,
                _ => {
                    let globals = self.globals();
                    let t = self.find_table(&globals, name, functions.len())?;
                    loaded.borrow_mut().set_field(name, t.clone());
                    t
                }
            }
        };

        {
            let mut table = module.borrow_mut();
            for registration in functions {
                table.set_field(registration.0, Function::from(registration.clone()));
            }
        }

        debug!(
            "registered {} functions in module `{}`",
            functions.len(),
            if name.is_empty() { "_G" } else { name }
        );
        Ok(module)
    }

    /// Materializes the module `name`.
    ///
    /// An already loaded module is returned as is. Otherwise the constructor
    /// staged under `name` in the preload registry is called with the name;
    /// whatever it returns, or `true` if it returns nothing, is recorded as
    /// loaded.
    pub fn require(&mut self, name: &str) -> FunctionResult<Value> {
        let loaded = self.loaded()?;
        let existing = loaded.borrow().get_field(name);
        if existing.truthy() {
            return Ok(existing);
        }

        let constructor = self.preload()?.borrow().get_field(name);
        if constructor.is_nil() {
            return Err(value::error::module_not_found(name));
        }

        debug!("materializing module `{}` from preload registry", name);
        let results = self.call(&constructor, vec![Value::string(name)])?;
        let value = match results.into_iter().next() {
            Some(v) if !v.is_nil() => v,
            _ => match loaded.borrow().get_field(name) {
                Value::Nil => Value::Bool(true),
                stored => stored,
            },
        };
        loaded.borrow_mut().set_field(name, value.clone());

        Ok(value)
    }
}

impl Default for VM {
    fn default() -> VM {
        VM::new()
    }
}
