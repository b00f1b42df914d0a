pub mod module;

pub use module::{ModuleDescriptor, ModuleList};

use super::settings::{Library, Settings};
use super::stdlib;
use super::value::Value;
use super::{Error, Result, PRELOAD_KEY, VM};

/// The configuration the loader works from: modules to install right away,
/// in order, and modules to stage in the preload registry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Libraries {
    eager: ModuleList,
    preload: ModuleList,
}

impl Libraries {
    pub fn new(eager: ModuleList, preload: ModuleList) -> Self {
        Self { eager, preload }
    }

    /// The standard modules enabled in `settings`.
    pub fn standard(settings: &Settings) -> Self {
        let select = |modules: &[stdlib::StandardModule]| {
            modules
                .iter()
                .filter(|m| settings.is_enabled(&m.library))
                .map(|m| m.descriptor())
                .collect::<ModuleList>()
        };

        Self::new(select(stdlib::EAGER), select(stdlib::PRELOAD))
    }

    pub fn eager(&self) -> &ModuleList {
        &self.eager
    }

    pub fn preload(&self) -> &ModuleList {
        &self.preload
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    EagerLoading,
    LazyStaging,
    Complete,
    Failed,
}

/// Runs one bootstrap over a state. A loader moves strictly forward through
/// its phases and is meant to run once.
#[derive(Debug)]
pub struct Loader<'a> {
    libraries: &'a Libraries,
    phase: Phase,
}

impl<'a> Loader<'a> {
    pub fn new(libraries: &'a Libraries) -> Self {
        Self {
            libraries,
            phase: Phase::NotStarted,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn run(&mut self, vm: &mut VM) -> Result<()> {
        self.enter(Phase::EagerLoading);
        if let Err(e) = self.install_eager(vm) {
            self.enter(Phase::Failed);
            return Err(e);
        }

        self.enter(Phase::LazyStaging);
        if let Err(e) = self.stage_preload(vm) {
            self.enter(Phase::Failed);
            return Err(e);
        }

        self.enter(Phase::Complete);
        Ok(())
    }

    fn enter(&mut self, phase: Phase) {
        trace!("loader phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    fn install_eager(&self, vm: &mut VM) -> Result<()> {
        for descriptor in self.libraries.eager() {
            install(vm, descriptor)?;
        }
        Ok(())
    }

    // constructors are stored, never called
    fn stage_preload(&self, vm: &mut VM) -> Result<()> {
        let registry = vm.registry();
        let preload = vm.find_table(&registry, PRELOAD_KEY, self.libraries.preload().len())?;

        for descriptor in self.libraries.preload() {
            debug!("staging module `{}`", descriptor.binding_name());
            preload.borrow_mut().set_field(
                descriptor.name(),
                Value::Function(descriptor.constructor().clone()),
            );
        }

        Ok(())
    }
}

fn install(vm: &mut VM, descriptor: &ModuleDescriptor) -> Result<()> {
    debug!("installing module `{}`", descriptor.binding_name());

    let constructor = Value::Function(descriptor.constructor().clone());
    vm.call(&constructor, vec![Value::string(descriptor.name())])
        .map(|_| ())
        .map_err(|e| Error::InstallError(descriptor.binding_name().to_string(), e))
}

/// Populates a freshly created state: installs every eager module in order,
/// then stages the preload modules. The first failing constructor aborts the
/// whole call; nothing is staged in that case.
pub fn install_standard_library(vm: &mut VM, libraries: &Libraries) -> Result<()> {
    Loader::new(libraries).run(vm)
}

/// Installs a single standard library right away, regardless of whether it
/// is normally eager or staged.
pub fn open_library(vm: &mut VM, library: Library) -> Result<()> {
    let module = stdlib::EAGER
        .iter()
        .chain(stdlib::PRELOAD.iter())
        .find(|m| m.library == library);

    match module {
        Some(module) => install(vm, &module.descriptor()),
        None => {
            warn!("library `{}` is not available in this build", library);
            Ok(())
        }
    }
}
