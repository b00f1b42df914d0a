use super::args::*;
use crate::vm::value::function::{Arity, Function, FunctionResult};
use crate::vm::value::Value;
use crate::vm::{LOADED_KEY, PRELOAD_KEY, VM};

pub fn open(vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let module = vm.register_module(&module_name(&args), &[])?;
    let registry = vm.registry();
    let loaded = vm.find_table(&registry, LOADED_KEY, 16)?;
    let preload = vm.find_table(&registry, PRELOAD_KEY, 0)?;

    {
        let mut module = module.borrow_mut();
        module.set_field("loaded", loaded);
        module.set_field("preload", preload);
    }

    vm.set_global(
        "require",
        Function::native("require", require, Arity::AtLeast(1)),
    );

    Ok(vec![Value::Table(module)])
}

fn require(vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let name = check_text(&args, 0, "require")?;
    vm.require(&name).map(|module| vec![module])
}
