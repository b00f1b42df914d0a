use crate::helpers::*;
use moonboot::vm::value::Value;
use moonboot::vm::{Libraries, Library, Settings, LOADED_KEY, VM};
use quickcheck_macros::quickcheck;

fn is_installed(vm: &mut VM, library: Library) -> bool {
    let name = library.module_name();
    match library {
        Library::Base => vm.global("print").is_callable(),
        Library::Ffi => {
            let staged = vm.preload().unwrap().borrow().contains_field(name);
            staged || vm.global(name).as_table().is_some()
        }
        _ => vm.global(name).as_table().is_some(),
    }
}

fn settings_from_mask(mask: u16) -> Settings {
    let mut settings = Settings::none();
    for (bit, library) in Library::ALL.iter().enumerate() {
        if mask & (1 << bit) != 0 {
            settings.enable(*library);
        }
    }
    settings
}

#[test]
fn test_disabled_module_leaves_no_trace() {
    init_logging();
    let mut settings = Settings::default();
    settings.disable(Library::Table);
    let mut vm = VM::standard(&settings).unwrap();

    assert!(vm.global("table").is_nil());
    let loaded = field(&Value::Table(vm.registry()), LOADED_KEY);
    assert!(field(&loaded, "table").is_nil());
    assert!(!vm.preload().unwrap().borrow().contains_field("table"));

    assert!(vm.global("string").as_table().is_some());
}

#[test]
fn test_disabled_ffi_is_not_staged() {
    let mut settings = Settings::default();
    settings.disable(Library::Ffi);
    let mut vm = VM::standard(&settings).unwrap();

    assert!(!vm.preload().unwrap().borrow().contains_field("ffi"));
}

#[test]
fn test_sandboxed_profile() {
    let mut vm = VM::standard(&Settings::sandboxed()).unwrap();

    for library in &[Library::Io, Library::Os, Library::Debug, Library::Ffi] {
        assert!(!is_installed(&mut vm, *library), "{} installed", library);
    }
    for library in &[Library::Base, Library::Table, Library::String, Library::Math] {
        assert!(is_installed(&mut vm, *library), "{} missing", library);
    }
}

#[test]
fn test_no_library_profile() {
    let libraries = Libraries::standard(&Settings::none());
    assert!(libraries.eager().is_empty());
    assert!(libraries.preload().is_empty());

    let mut vm = VM::standard(&Settings::none()).unwrap();
    assert!(vm.globals().borrow().is_empty());
    assert!(vm.preload().unwrap().borrow().is_empty());
}

#[quickcheck]
fn prop_installed_modules_match_profile(mask: u16) -> bool {
    let settings = settings_from_mask(mask);
    let mut vm = VM::standard(&settings).unwrap();

    Library::ALL.iter().all(|library| {
        let expected = settings.is_enabled(library) && (*library != Library::Ffi || cfg!(feature = "ffi"));
        is_installed(&mut vm, *library) == expected
    })
}

#[quickcheck]
fn prop_eager_order_is_canonical(mask: u16) -> bool {
    let libraries = Libraries::standard(&settings_from_mask(mask));
    let names = libraries.eager().names();

    let canonical: Vec<&str> = Library::ALL
        .iter()
        .filter(|l| **l != Library::Ffi)
        .map(|l| l.module_name())
        .filter(|name| names.contains(name))
        .collect();

    names == canonical
}
