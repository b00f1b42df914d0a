use super::args::*;
use crate::vm::value::error;
use crate::vm::value::function::{Arity, FunctionResult, Registration};
use crate::vm::value::Value;
use crate::vm::VM;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

lazy_static! {
    static ref CLOCK_START: Instant = Instant::now();
}

const FUNCTIONS: &[Registration] = &[
    ("clock", clock, Arity::Exactly(0)),
    ("getenv", getenv, Arity::AtLeast(1)),
    ("time", time, Arity::Exactly(0)),
];

pub fn open(vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    lazy_static::initialize(&CLOCK_START);
    let module = vm.register_module(&module_name(&args), FUNCTIONS)?;
    Ok(vec![Value::Table(module)])
}

/// Seconds since the os library was first opened in this process.
///
/// This is elapsed wall-clock time, not the processor time C's `clock()`
/// reports, so it keeps counting while the host sleeps or blocks.
fn clock(_vm: &mut VM, _args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    Ok(vec![Value::Number(CLOCK_START.elapsed().as_secs_f64())])
}

fn getenv(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let name = check_text(&args, 0, "getenv")?;
    let value = std::env::var(&name)
        .map(Value::from)
        .unwrap_or(Value::Nil);
    Ok(vec![value])
}

fn time(_vm: &mut VM, _args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| error::explicit(e.to_string()))?;
    Ok(vec![Value::Number(now.as_secs() as f64)])
}
