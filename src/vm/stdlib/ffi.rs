use super::args::*;
use super::jit::{host_arch, host_os};
use crate::vm::value::function::{Arity, FunctionResult, Registration};
use crate::vm::value::Value;
use crate::vm::VM;

const FUNCTIONS: &[Registration] = &[("abi", abi, Arity::AtLeast(1))];

pub fn open(vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let module = vm.register_module(&module_name(&args), FUNCTIONS)?;

    {
        let mut module = module.borrow_mut();
        module.set_field("os", host_os());
        module.set_field("arch", host_arch());
    }

    Ok(vec![Value::Table(module)])
}

fn abi(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let param = check_text(&args, 0, "abi")?;
    let supported = match param.as_str() {
        "32bit" => cfg!(target_pointer_width = "32"),
        "64bit" => cfg!(target_pointer_width = "64"),
        "le" => cfg!(target_endian = "little"),
        "be" => cfg!(target_endian = "big"),
        "win" => cfg!(windows),
        "fpu" => true,
        _ => false,
    };

    Ok(vec![Value::Bool(supported)])
}
