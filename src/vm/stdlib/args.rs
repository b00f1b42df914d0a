use crate::vm::reference::Reference;
use crate::vm::value::error::{self, RuntimeError};
use crate::vm::value::function::FunctionResult;
use crate::vm::value::table::Table;
use crate::vm::value::Value;
use std::rc::Rc;

// Helpers for native functions to read their arguments

pub fn arg(args: &[Value], n: usize) -> Value {
    args.get(n).cloned().unwrap_or(Value::Nil)
}

/// The module name a constructor is called with.
pub fn module_name(args: &[Value]) -> String {
    match args.first() {
        Some(Value::Str(s)) => String::from_utf8_lossy(s).into_owned(),
        _ => String::new(),
    }
}

pub fn bad_argument(n: usize, fname: &str, message: &str) -> RuntimeError {
    error::argument_error(format!(
        "bad argument #{} to '{}' ({})",
        n + 1,
        fname,
        message
    ))
}

fn type_error(args: &[Value], n: usize, fname: &str, expected: &str) -> RuntimeError {
    let got = match args.get(n) {
        Some(v) => v.type_name(),
        None => "no value",
    };
    bad_argument(n, fname, &format!("{} expected, got {}", expected, got))
}

pub fn check_number(args: &[Value], n: usize, fname: &str) -> FunctionResult<f64> {
    arg(args, n)
        .to_number()
        .ok_or_else(|| type_error(args, n, fname, "number"))
}

pub fn check_integer(args: &[Value], n: usize, fname: &str) -> FunctionResult<i64> {
    check_number(args, n, fname).map(|v| v as i64)
}

pub fn check_string(args: &[Value], n: usize, fname: &str) -> FunctionResult<Rc<[u8]>> {
    arg(args, n)
        .to_bytes()
        .ok_or_else(|| type_error(args, n, fname, "string"))
}

/// A string argument handed to the host, such as a module or variable name.
pub fn check_text(args: &[Value], n: usize, fname: &str) -> FunctionResult<String> {
    check_string(args, n, fname).map(|s| String::from_utf8_lossy(&s).into_owned())
}

pub fn check_table(args: &[Value], n: usize, fname: &str) -> FunctionResult<Reference<Table>> {
    match args.get(n) {
        Some(Value::Table(t)) => Ok(t.clone()),
        _ => Err(type_error(args, n, fname, "table")),
    }
}

pub fn opt_integer(args: &[Value], n: usize, fname: &str, default: i64) -> FunctionResult<i64> {
    if arg(args, n).is_nil() {
        Ok(default)
    } else {
        check_integer(args, n, fname)
    }
}

pub fn opt_string(
    args: &[Value],
    n: usize,
    fname: &str,
    default: &str,
) -> FunctionResult<Rc<[u8]>> {
    if arg(args, n).is_nil() {
        Ok(Rc::from(default.as_bytes()))
    } else {
        check_string(args, n, fname)
    }
}
