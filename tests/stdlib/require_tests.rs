use crate::helpers::*;
use moonboot::vm::loader::{Libraries, ModuleList};
use moonboot::vm::value::error::RuntimeError;
use moonboot::vm::value::function::{Arity, Function};
use moonboot::vm::value::Value;
use moonboot::vm::{install_standard_library, Settings, VM};

fn with_staged(journal: &Journal, names: &[&str]) -> VM {
    let standard = Libraries::standard(&Settings::sandboxed());
    let libraries = Libraries::new(
        standard.eager().clone(),
        names.iter().map(|name| journal.recording(name)).collect(),
    );
    let mut vm = VM::new();
    install_standard_library(&mut vm, &libraries).unwrap();
    vm
}

#[test]
fn test_require_materializes_once() {
    init_logging();
    let journal = Journal::new();
    let mut vm = with_staged(&journal, &["lazy"]);
    let require = vm.global("require");

    let first = vm.call(&require, vec![Value::string("lazy")]).unwrap();
    let second = vm.call(&require, vec![Value::string("lazy")]).unwrap();

    assert_eq!(journal.count("lazy"), 1);
    assert_eq!(first, second);
    assert_eq!(field(&first[0], "position"), Value::Number(1.0));
}

#[test]
fn test_require_records_true_for_silent_constructors() {
    let mut vm = VM::standard(&Settings::sandboxed()).unwrap();
    let silent = Function::new("open_silent", |_vm, _args| Ok(vec![]), Arity::Many);
    vm.preload()
        .unwrap()
        .borrow_mut()
        .set_field("silent", silent);

    assert_eq!(vm.require("silent"), Ok(Value::Bool(true)));
    assert_eq!(field(&Value::Table(vm.loaded().unwrap()), "silent"), Value::Bool(true));
}

#[test]
fn test_require_unknown_module_fails() {
    let journal = Journal::new();
    let mut vm = with_staged(&journal, &[]);
    let require = vm.global("require");

    assert_matches!(
        vm.call(&require, vec![Value::string("missing")]),
        Err(RuntimeError::ModuleNotFound(ref name)) if name == "missing"
    );
}

#[test]
fn test_require_propagates_constructor_failure() {
    let journal = Journal::new();
    let standard = Libraries::standard(&Settings::sandboxed());
    let libraries = Libraries::new(
        standard.eager().clone(),
        ModuleList::new().with(journal.failing("broken")),
    );
    let mut vm = VM::new();
    install_standard_library(&mut vm, &libraries).unwrap();

    assert_eq!(
        vm.require("broken"),
        Err(RuntimeError::ExplicitError(String::from("cannot install")))
    );
    assert_eq!(journal.count("broken"), 1);
    assert!(field(&Value::Table(vm.loaded().unwrap()), "broken").is_nil());
}
