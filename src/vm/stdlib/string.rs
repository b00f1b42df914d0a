use super::args::*;
use crate::vm::value::error;
use crate::vm::value::function::{Arity, FunctionResult, Registration};
use crate::vm::value::Value;
use crate::vm::VM;
use std::convert::TryFrom;

const FUNCTIONS: &[Registration] = &[
    ("byte", byte, Arity::AtLeast(1)),
    ("char", chr, Arity::Many),
    ("len", len, Arity::AtLeast(1)),
    ("lower", lower, Arity::AtLeast(1)),
    ("rep", rep, Arity::AtLeast(2)),
    ("reverse", reverse, Arity::AtLeast(1)),
    ("sub", sub, Arity::AtLeast(1)),
    ("upper", upper, Arity::AtLeast(1)),
];

/// Longest string `rep` will build.
pub const MAX_STRING_SIZE: usize = 0x7fff_ff00;

pub fn open(vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let module = vm.register_module(&module_name(&args), FUNCTIONS)?;
    Ok(vec![Value::Table(module)])
}

// Resolves a 1-based position, negative ones counting from the end
fn position(pos: i64, len: usize) -> i64 {
    if pos < 0 {
        len as i64 + pos + 1
    } else {
        pos
    }
}

fn byte_range(i: i64, j: i64, len: usize) -> (usize, usize) {
    let start = position(i, len).max(1);
    let end = position(j, len).min(len as i64);
    if start > end {
        (0, 0)
    } else {
        (start as usize - 1, end as usize)
    }
}

fn len(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let s = check_string(&args, 0, "len")?;
    Ok(vec![Value::Number(s.len() as f64)])
}

fn sub(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let s = check_string(&args, 0, "sub")?;
    let i = opt_integer(&args, 1, "sub", 1)?;
    let j = opt_integer(&args, 2, "sub", -1)?;
    let (start, end) = byte_range(i, j, s.len());

    Ok(vec![Value::string(&s[start..end])])
}

fn upper(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let s = check_string(&args, 0, "upper")?;
    Ok(vec![Value::from(s.to_ascii_uppercase())])
}

fn lower(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let s = check_string(&args, 0, "lower")?;
    Ok(vec![Value::from(s.to_ascii_lowercase())])
}

fn rep(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let s = check_string(&args, 0, "rep")?;
    let n = check_integer(&args, 1, "rep")?;
    let separator = opt_string(&args, 2, "rep", "")?;

    if n <= 0 {
        return Ok(vec![Value::string("")]);
    }

    let count =
        usize::try_from(n).map_err(|_| error::explicit("resulting string too large"))?;
    let size = s
        .len()
        .checked_mul(count)
        .and_then(|body| {
            separator
                .len()
                .checked_mul(count - 1)
                .and_then(|gaps| body.checked_add(gaps))
        })
        .filter(|size| *size <= MAX_STRING_SIZE)
        .ok_or_else(|| error::explicit("resulting string too large"))?;
    if size == 0 {
        return Ok(vec![Value::string("")]);
    }

    let mut repeated = Vec::with_capacity(size);
    for i in 0..count {
        if i > 0 {
            repeated.extend_from_slice(&separator);
        }
        repeated.extend_from_slice(&s);
    }
    Ok(vec![Value::from(repeated)])
}

fn reverse(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let s = check_string(&args, 0, "reverse")?;
    Ok(vec![Value::from(s.iter().rev().copied().collect::<Vec<u8>>())])
}

fn byte(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let s = check_string(&args, 0, "byte")?;
    let i = opt_integer(&args, 1, "byte", 1)?;
    let j = opt_integer(&args, 2, "byte", i)?;
    let (start, end) = byte_range(i, j, s.len());

    Ok(s[start..end]
        .iter()
        .map(|b| Value::Number(*b as f64))
        .collect())
}

fn chr(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let mut bytes = Vec::with_capacity(args.len());
    for n in 0..args.len() {
        let code = check_integer(&args, n, "char")?;
        if !(0..=255).contains(&code) {
            return Err(bad_argument(n, "char", "invalid value"));
        }
        bytes.push(code as u8);
    }

    Ok(vec![Value::from(bytes)])
}
