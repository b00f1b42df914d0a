use super::args::*;
use crate::vm::value::function::{Arity, FunctionResult, Registration};
use crate::vm::value::Value;
use crate::vm::VM;

const FUNCTIONS: &[Registration] = &[
    ("getregistry", getregistry, Arity::Exactly(0)),
    ("traceback", traceback, Arity::Many),
];

pub fn open(vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let module = vm.register_module(&module_name(&args), FUNCTIONS)?;
    Ok(vec![Value::Table(module)])
}

fn getregistry(vm: &mut VM, _args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    Ok(vec![Value::Table(vm.registry())])
}

// native functions keep no frames, so the trace only has the native entry
fn traceback(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let message = arg(&args, 0);
    let trace = match &message {
        Value::Nil => String::from("stack traceback:\n\t[native]: in ?"),
        Value::Str(_) | Value::Number(_) => {
            format!("{}\nstack traceback:\n\t[native]: in ?", message)
        }
        _ => return Ok(vec![message]),
    };

    Ok(vec![Value::from(trace)])
}
