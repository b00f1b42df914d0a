mod args;
pub mod base;
pub mod bit;
pub mod debug;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod io;
pub mod jit;
pub mod math;
pub mod os;
pub mod package;
pub mod string;
pub mod table;

use super::loader::ModuleDescriptor;
use super::settings::Library;
use super::value::function::NativeFn;

/// A standard library and the constructor that installs it.
#[derive(Clone, Copy)]
pub struct StandardModule {
    pub library: Library,
    pub open: NativeFn,
}

impl StandardModule {
    pub const fn new(library: Library, open: NativeFn) -> Self {
        Self { library, open }
    }

    pub fn descriptor(&self) -> ModuleDescriptor {
        ModuleDescriptor::native(self.library.module_name(), self.open)
    }
}

/// Installed at bootstrap, in this order. Later modules may rely on the
/// globals and registry tables set up by earlier ones.
pub const EAGER: &[StandardModule] = &[
    StandardModule::new(Library::Base, base::open),
    StandardModule::new(Library::Package, package::open),
    StandardModule::new(Library::Table, table::open),
    StandardModule::new(Library::Io, io::open),
    StandardModule::new(Library::Os, os::open),
    StandardModule::new(Library::String, string::open),
    StandardModule::new(Library::Math, math::open),
    StandardModule::new(Library::Debug, debug::open),
    StandardModule::new(Library::Bit, bit::open),
    StandardModule::new(Library::Jit, jit::open),
];

/// Staged in the preload registry and materialized on first `require`.
#[cfg(feature = "ffi")]
pub const PRELOAD: &[StandardModule] = &[StandardModule::new(Library::Ffi, ffi::open)];

#[cfg(not(feature = "ffi"))]
pub const PRELOAD: &[StandardModule] = &[];
