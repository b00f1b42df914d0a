use super::args::*;
use crate::vm::value::error;
use crate::vm::value::function::{Arity, FunctionResult, Registration};
use crate::vm::value::table::Key;
use crate::vm::value::Value;
use crate::vm::VM;
use std::io::Write;

pub const VERSION: &str = "Lua 5.1";

/// Most values a single call may return.
pub const MAX_RESULTS: i64 = 8000;

const FUNCTIONS: &[Registration] = &[
    ("assert", assert, Arity::AtLeast(1)),
    ("error", raise, Arity::Many),
    ("print", print, Arity::Many),
    ("rawequal", rawequal, Arity::AtLeast(2)),
    ("rawget", rawget, Arity::AtLeast(2)),
    ("rawset", rawset, Arity::AtLeast(3)),
    ("select", select, Arity::AtLeast(1)),
    ("tonumber", tonumber, Arity::AtLeast(1)),
    ("tostring", tostring, Arity::AtLeast(1)),
    ("type", ty, Arity::AtLeast(1)),
    ("unpack", unpack, Arity::AtLeast(1)),
];

pub fn open(vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let module = vm.register_module(&module_name(&args), FUNCTIONS)?;
    let globals = vm.globals();

    {
        let mut module = module.borrow_mut();
        module.set_field("_G", globals);
        module.set_field("_VERSION", VERSION);
    }

    Ok(vec![Value::Table(module)])
}

fn assert(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    if args[0].truthy() {
        Ok(args)
    } else {
        match arg(&args, 1).to_bytes() {
            Some(message) => Err(error::explicit(String::from_utf8_lossy(&message))),
            None => Err(error::explicit("assertion failed!")),
        }
    }
}

fn raise(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    Err(error::explicit(arg(&args, 0).to_string()))
}

fn print(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let mut line = Vec::new();
    for (n, v) in args.iter().enumerate() {
        if n > 0 {
            line.push(b'\t');
        }
        line.extend_from_slice(&display_bytes(v));
    }
    line.push(b'\n');

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(&line)
        .map_err(|e| error::explicit(e.to_string()))?;

    Ok(vec![])
}

fn rawequal(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    Ok(vec![Value::Bool(args[0] == args[1])])
}

fn rawget(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let table = check_table(&args, 0, "rawget")?;
    let key = Key::from_value(&args[1])?;
    let value = table.borrow().get(&key);
    Ok(vec![value])
}

fn rawset(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let table = check_table(&args, 0, "rawset")?;
    let key = Key::from_value(&args[1])?;
    table.borrow_mut().set(key, args[2].clone());
    Ok(vec![Value::Table(table)])
}

fn select(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let rest = args.len() as i64 - 1;

    if let Value::Str(s) = &args[0] {
        if **s == *b"#" {
            return Ok(vec![Value::from(rest)]);
        }
    }

    let n = check_integer(&args, 0, "select")?;
    let start = if n < 0 { rest + n + 1 } else { n };
    if start < 1 {
        return Err(bad_argument(0, "select", "index out of range"));
    }

    Ok(args.into_iter().skip(start as usize).collect())
}

fn tonumber(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let base = opt_integer(&args, 1, "tonumber", 10)?;

    if base == 10 {
        return Ok(vec![args[0].to_number().map(Value::Number).unwrap_or(Value::Nil)]);
    }

    if !(2..=36).contains(&base) {
        return Err(bad_argument(1, "tonumber", "base out of range"));
    }

    let digits = check_text(&args, 0, "tonumber")?;
    let parsed = i64::from_str_radix(digits.trim(), base as u32)
        .map(|n| Value::Number(n as f64))
        .unwrap_or(Value::Nil);

    Ok(vec![parsed])
}

fn display_bytes(v: &Value) -> Vec<u8> {
    match v {
        Value::Str(s) => s.to_vec(),
        other => other.to_string().into_bytes(),
    }
}

fn tostring(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    Ok(vec![Value::from(display_bytes(&args[0]))])
}

fn ty(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    Ok(vec![Value::string(args[0].type_name())])
}

fn unpack(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let table = check_table(&args, 0, "unpack")?;
    let table = table.borrow();
    let from = opt_integer(&args, 1, "unpack", 1)?;
    let to = opt_integer(&args, 2, "unpack", table.len())?;
    if from > to {
        return Ok(vec![]);
    }

    to.checked_sub(from)
        .filter(|n| *n < MAX_RESULTS)
        .ok_or_else(|| error::explicit("too many results to unpack"))?;

    Ok((from..=to).map(|i| table.get_index(i)).collect())
}
