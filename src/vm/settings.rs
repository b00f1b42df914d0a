use rustc_hash::FxHashMap;

/// Selects which standard libraries a freshly created state receives.
/// Anything not explicitly enabled is disabled.
#[derive(Debug, Clone)]
pub struct Settings {
    inner: FxHashMap<Library, bool>,
}

impl Settings {
    pub fn new() -> Self {
        Self {
            inner: FxHashMap::default(),
        }
    }

    /// No library at all, not even the base functions.
    pub fn none() -> Self {
        Self::new()
    }

    /// The default profile without io, os, debug and ffi.
    pub fn sandboxed() -> Self {
        let mut settings = Settings::default();

        settings.disable(Library::Io);
        settings.disable(Library::Os);
        settings.disable(Library::Debug);
        settings.disable(Library::Ffi);

        settings
    }

    pub fn enable(&mut self, library: Library) -> &mut Self {
        self.inner.insert(library, true);
        self
    }

    pub fn disable(&mut self, library: Library) -> &mut Self {
        self.inner.insert(library, false);
        self
    }

    pub fn is_enabled(&self, library: &Library) -> bool {
        match self.inner.get(library) {
            Some(v) => *v,
            _ => false,
        }
    }

    pub fn enabled(&self) -> Vec<Library> {
        Library::ALL
            .iter()
            .filter(|l| self.is_enabled(l))
            .copied()
            .collect()
    }

    pub fn as_vec(&self) -> Vec<(Library, bool)> {
        let mut settings = self
            .inner
            .iter()
            .map(|p| (*p.0, *p.1))
            .collect::<Vec<_>>();
        settings.sort();
        settings
    }
}

impl Default for Settings {
    fn default() -> Settings {
        let mut settings = Settings::new();

        for library in Library::ALL.iter() {
            settings.enable(*library);
        }

        if !cfg!(feature = "ffi") {
            settings.disable(Library::Ffi);
        }

        settings
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Library {
    Base,
    Package,
    Table,
    Io,
    Os,
    String,
    Math,
    Debug,
    Bit,
    Jit,
    Ffi,
}

impl Library {
    pub const ALL: [Library; 11] = [
        Library::Base,
        Library::Package,
        Library::Table,
        Library::Io,
        Library::Os,
        Library::String,
        Library::Math,
        Library::Debug,
        Library::Bit,
        Library::Jit,
        Library::Ffi,
    ];

    /// The namespace the library installs into. The base library installs
    /// into the global namespace, which is the empty name.
    pub fn module_name(&self) -> &'static str {
        match self {
            Library::Base => "",
            Library::Package => "package",
            Library::Table => "table",
            Library::Io => "io",
            Library::Os => "os",
            Library::String => "string",
            Library::Math => "math",
            Library::Debug => "debug",
            Library::Bit => "bit",
            Library::Jit => "jit",
            Library::Ffi => "ffi",
        }
    }
}

impl std::fmt::Display for Library {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        let name = match self {
            Library::Base => "base",
            other => other.module_name(),
        };

        fmt.write_str(name)
    }
}
