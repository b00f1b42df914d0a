use crate::helpers::*;
use moonboot::vm::loader::{Libraries, Loader, ModuleList, Phase};
use moonboot::vm::value::Value;
use moonboot::vm::{install_standard_library, VM};

fn libraries(journal: &Journal, eager: &[&str], preload: &[&str]) -> Libraries {
    Libraries::new(
        eager.iter().map(|name| journal.recording(name)).collect(),
        preload.iter().map(|name| journal.recording(name)).collect(),
    )
}

#[test]
fn test_eager_modules_run_once_in_order() {
    init_logging();
    let journal = Journal::new();
    let libraries = libraries(&journal, &["", "first", "second", "third"], &[]);
    let mut vm = VM::new();

    install_standard_library(&mut vm, &libraries).unwrap();

    assert_eq!(journal.entries(), vec!["", "first", "second", "third"]);
    assert_eq!(field(&vm.global("first"), "position"), Value::Number(2.0));
    assert_eq!(field(&vm.global("third"), "position"), Value::Number(4.0));
}

#[test]
fn test_empty_name_installs_into_globals() {
    let journal = Journal::new();
    let libraries = libraries(&journal, &[""], &[]);
    let mut vm = VM::new();

    install_standard_library(&mut vm, &libraries).unwrap();

    assert_eq!(vm.global("global_module"), Value::Bool(true));
    assert!(vm.global("").is_nil());
}

#[test]
fn test_later_module_overrides_earlier_global() {
    let journal = Journal::new();
    let libraries = libraries(&journal, &["early", "late"], &[]);
    let mut vm = VM::new();

    install_standard_library(&mut vm, &libraries).unwrap();

    assert_eq!(vm.global("last"), Value::string("late"));
}

#[test]
fn test_preload_modules_are_staged_not_called() {
    let journal = Journal::new();
    let libraries = libraries(&journal, &["eager"], &["lazy"]);
    let mut vm = VM::new();

    install_standard_library(&mut vm, &libraries).unwrap();

    assert_eq!(journal.count("lazy"), 0);
    assert!(vm.global("lazy").is_nil());

    let staged = vm.preload().unwrap().borrow().get_field("lazy");
    let constructor = libraries.preload().get("lazy").unwrap().constructor();
    assert_eq!(staged, Value::Function(constructor.clone()));
}

#[test]
fn test_staged_module_materializes_when_invoked() {
    let journal = Journal::new();
    let libraries = libraries(&journal, &[], &["lazy"]);
    let mut vm = VM::new();
    install_standard_library(&mut vm, &libraries).unwrap();

    let staged = vm.preload().unwrap().borrow().get_field("lazy");
    vm.call(&staged, vec![Value::string("lazy")]).unwrap();

    assert_eq!(journal.count("lazy"), 1);
    assert_eq!(field(&vm.global("lazy"), "position"), Value::Number(1.0));
}

#[test]
fn test_preload_registry_outlives_the_call() {
    let journal = Journal::new();
    let libraries = libraries(&journal, &[], &["a", "b"]);
    let mut vm = VM::new();
    install_standard_library(&mut vm, &libraries).unwrap();

    let preload = vm.preload().unwrap();
    assert_eq!(preload.borrow().field_names(), vec!["a", "b"]);
    assert_eq!(field(&Value::Table(vm.registry()), "_PRELOAD"), Value::Table(preload));
}

#[test]
fn test_empty_configuration_creates_empty_preload_registry() {
    let libraries = Libraries::new(ModuleList::new(), ModuleList::new());
    let mut vm = VM::new();
    let mut loader = Loader::new(&libraries);

    loader.run(&mut vm).unwrap();

    assert_eq!(loader.phase(), Phase::Complete);
    assert!(vm.preload().unwrap().borrow().is_empty());
    assert!(vm.globals().borrow().is_empty());
}

// running the bootstrap twice is not guarded against: constructors simply
// run again. Only the absence of a crash is asserted here.
#[test]
fn test_second_install_reruns_constructors() {
    let journal = Journal::new();
    let libraries = libraries(&journal, &["again"], &["lazy"]);
    let mut vm = VM::new();

    install_standard_library(&mut vm, &libraries).unwrap();
    let second = install_standard_library(&mut vm, &libraries);

    assert!(second.is_ok());
    assert_eq!(journal.count("again"), 2);
    assert_eq!(journal.count("lazy"), 0);
}
