use super::args::*;
use crate::vm::value::error;
use crate::vm::value::function::{Arity, FunctionResult, Registration};
use crate::vm::value::Value;
use crate::vm::VM;
use std::io::Write;

const FUNCTIONS: &[Registration] = &[("write", write, Arity::Many)];

pub fn open(vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let module = vm.register_module(&module_name(&args), FUNCTIONS)?;
    Ok(vec![Value::Table(module)])
}

fn write(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for n in 0..args.len() {
        let s = check_string(&args, n, "write")?;
        out.write_all(&s)
            .map_err(|e| error::explicit(e.to_string()))?;
    }
    out.flush().map_err(|e| error::explicit(e.to_string()))?;

    Ok(vec![Value::Bool(true)])
}
