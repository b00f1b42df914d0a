use crate::helpers::*;
use moonboot::vm::loader::{Libraries, Loader, ModuleList, Phase};
use moonboot::vm::value::error::RuntimeError;
use moonboot::vm::value::Value;
use moonboot::vm::{install_standard_library, Error, PRELOAD_KEY, VM};

fn failing_second(journal: &Journal) -> Libraries {
    Libraries::new(
        ModuleList::new()
            .with(journal.recording("first"))
            .with(journal.failing("second"))
            .with(journal.recording("third")),
        ModuleList::new().with(journal.recording("lazy")),
    )
}

#[test]
fn test_failure_aborts_remaining_modules() {
    init_logging();
    let journal = Journal::new();
    let libraries = failing_second(&journal);
    let mut vm = VM::new();

    let result = install_standard_library(&mut vm, &libraries);

    assert_matches!(
        result,
        Err(Error::InstallError(ref module, RuntimeError::ExplicitError(_))) if module == "second"
    );
    assert_eq!(journal.entries(), vec!["first", "second"]);
    assert!(vm.global("first").as_table().is_some());
    assert!(vm.global("second").is_nil());
    assert!(vm.global("third").is_nil());
}

#[test]
fn test_failure_skips_preload_staging() {
    let journal = Journal::new();
    let libraries = failing_second(&journal);
    let mut vm = VM::new();

    assert!(install_standard_library(&mut vm, &libraries).is_err());

    let preload = field(&Value::Table(vm.registry()), PRELOAD_KEY);
    assert!(field(&preload, "lazy").is_nil());
    assert_eq!(journal.count("lazy"), 0);
}

#[test]
fn test_failure_ends_in_failed_phase() {
    let journal = Journal::new();
    let libraries = failing_second(&journal);
    let mut vm = VM::new();
    let mut loader = Loader::new(&libraries);

    let error = loader.run(&mut vm).unwrap_err();

    assert_eq!(loader.phase(), Phase::Failed);
    assert_eq!(error.module(), Some("second"));
}

#[test]
fn test_failing_global_module_is_named_g() {
    let journal = Journal::new();
    let libraries = Libraries::new(
        ModuleList::new().with(journal.failing("")),
        ModuleList::new(),
    );
    let mut vm = VM::new();

    let error = install_standard_library(&mut vm, &libraries).unwrap_err();

    assert_eq!(error.module(), Some("_G"));
    assert!(error.to_string().contains("`_G`"));
}

#[test]
fn test_preload_name_conflict_fails_after_eager_phase() {
    let journal = Journal::new();
    let libraries = Libraries::new(
        ModuleList::new().with(journal.recording("first")),
        ModuleList::new().with(journal.recording("lazy")),
    );
    let mut vm = VM::new();
    vm.registry().borrow_mut().set_field(PRELOAD_KEY, 1.0);
    let mut loader = Loader::new(&libraries);

    let result = loader.run(&mut vm);

    assert_matches!(result, Err(Error::RuntimeError(RuntimeError::NameConflict(_))));
    assert_eq!(loader.phase(), Phase::Failed);
    assert_eq!(journal.entries(), vec!["first"]);
}
