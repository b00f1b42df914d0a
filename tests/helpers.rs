use moonboot::vm::loader::ModuleDescriptor;
use moonboot::vm::value::error;
use moonboot::vm::value::function::{Arity, Function};
use moonboot::vm::value::Value;
use std::cell::RefCell;
use std::rc::Rc;

pub use matches::assert_matches;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn field(table: &Value, name: &str) -> Value {
    match table.as_table() {
        Some(t) => t.borrow().get_field(name),
        None => Value::Nil,
    }
}

/// Shared log of constructor invocations, in call order.
#[derive(Clone, Default)]
pub struct Journal {
    entries: Rc<RefCell<Vec<String>>>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }

    pub fn count(&self, name: &str) -> usize {
        self.entries.borrow().iter().filter(|e| *e == name).count()
    }

    /// A module that records the name it was called with, binds the global
    /// `name` to a table holding its position in the journal and
    /// overwrites the global `last` with its name.
    pub fn recording(&self, name: &str) -> ModuleDescriptor {
        let entries = self.entries.clone();
        let constructor = Function::new(
            format!("open_{}", name),
            move |vm, args| {
                let called_as = match args.first() {
                    Some(Value::Str(s)) => String::from_utf8_lossy(s).into_owned(),
                    _ => String::from("<missing>"),
                };
                entries.borrow_mut().push(called_as.clone());
                let position = entries.borrow().len() as f64;

                if called_as.is_empty() {
                    vm.set_global("global_module", true);
                } else {
                    let module = vm.register_module(&called_as, &[])?;
                    module.borrow_mut().set_field("position", position);
                }
                vm.set_global("last", called_as.as_str());

                Ok(vec![])
            },
            Arity::Exactly(1),
        );

        ModuleDescriptor::new(name, constructor)
    }

    /// A module that records its name and then fails.
    pub fn failing(&self, name: &str) -> ModuleDescriptor {
        let entries = self.entries.clone();
        let constructor = Function::new(
            format!("open_{}", name),
            move |_vm, args| {
                if let Some(Value::Str(s)) = args.first() {
                    entries.borrow_mut().push(String::from_utf8_lossy(s).into_owned());
                }
                Err(error::explicit("cannot install"))
            },
            Arity::Many,
        );

        ModuleDescriptor::new(name, constructor)
    }
}
