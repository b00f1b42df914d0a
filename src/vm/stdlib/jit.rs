use super::args::*;
use crate::vm::value::function::{Arity, Function, FunctionResult};
use crate::vm::value::Value;
use crate::vm::VM;
use std::cell::Cell;
use std::rc::Rc;

pub const VERSION: &str = concat!("moonboot ", env!("CARGO_PKG_VERSION"));

pub const VERSION_NUM: f64 = 100.0;

pub fn open(vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let module = vm.register_module(&module_name(&args), &[])?;
    let enabled = Rc::new(Cell::new(true));

    {
        let mut module = module.borrow_mut();
        module.set_field("version", VERSION);
        module.set_field("version_num", VERSION_NUM);
        module.set_field("os", host_os());
        module.set_field("arch", host_arch());

        module.set_field("on", toggle("on", enabled.clone(), true));
        module.set_field("off", toggle("off", enabled.clone(), false));
        module.set_field(
            "status",
            Function::new(
                "status",
                move |_vm, _args| Ok(vec![Value::Bool(enabled.get())]),
                Arity::Many,
            ),
        );
    }

    Ok(vec![Value::Table(module)])
}

fn toggle(name: &'static str, enabled: Rc<Cell<bool>>, to: bool) -> Function {
    Function::new(
        name,
        move |_vm, _args| {
            enabled.set(to);
            Ok(vec![])
        },
        Arity::Many,
    )
}

/// The operating system name as scripts expect to see it.
pub fn host_os() -> &'static str {
    match std::env::consts::OS {
        "windows" => "Windows",
        "linux" | "android" => "Linux",
        "macos" | "ios" => "OSX",
        "freebsd" | "netbsd" | "openbsd" | "dragonfly" => "BSD",
        "solaris" | "illumos" => "POSIX",
        _ => "Other",
    }
}

pub fn host_arch() -> &'static str {
    match std::env::consts::ARCH {
        "x86" => "x86",
        "x86_64" => "x64",
        "arm" => "arm",
        "aarch64" => "arm64",
        "powerpc" => "ppc",
        "mips" => "mips",
        "mips64" => "mips64",
        other => other,
    }
}
