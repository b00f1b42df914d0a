use super::args::*;
use crate::vm::value::function::{Arity, FunctionResult, Registration};
use crate::vm::value::Value;
use crate::vm::VM;

const FUNCTIONS: &[Registration] = &[
    ("arshift", arshift, Arity::AtLeast(2)),
    ("band", band, Arity::AtLeast(1)),
    ("bnot", bnot, Arity::AtLeast(1)),
    ("bor", bor, Arity::AtLeast(1)),
    ("bswap", bswap, Arity::AtLeast(1)),
    ("bxor", bxor, Arity::AtLeast(1)),
    ("lshift", lshift, Arity::AtLeast(2)),
    ("rol", rol, Arity::AtLeast(2)),
    ("ror", ror, Arity::AtLeast(2)),
    ("rshift", rshift, Arity::AtLeast(2)),
    ("tobit", tobit_fn, Arity::AtLeast(1)),
    ("tohex", tohex, Arity::AtLeast(1)),
];

pub fn open(vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let module = vm.register_module(&module_name(&args), FUNCTIONS)?;
    Ok(vec![Value::Table(module)])
}

/// Normalises a number to a signed 32 bit integer, wrapping modulo 2^32.
///
/// Adding 2^52 + 2^51 moves the integral part into the low mantissa bits,
/// which are then read off directly.
pub fn tobit(n: f64) -> i32 {
    (n + 6_755_399_441_055_744.0).to_bits() as u32 as i32
}

fn check_bit(args: &[Value], n: usize, fname: &str) -> FunctionResult<i32> {
    check_number(args, n, fname).map(tobit)
}

fn bits(v: i32) -> FunctionResult<Vec<Value>> {
    Ok(vec![Value::Number(v as f64)])
}

fn tobit_fn(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    bits(check_bit(&args, 0, "tobit")?)
}

fn bnot(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    bits(!check_bit(&args, 0, "bnot")?)
}

fn bswap(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    bits(check_bit(&args, 0, "bswap")?.swap_bytes())
}

fn fold(args: &[Value], fname: &str, op: fn(i32, i32) -> i32) -> FunctionResult<Vec<Value>> {
    let mut acc = check_bit(args, 0, fname)?;
    for n in 1..args.len() {
        acc = op(acc, check_bit(args, n, fname)?);
    }
    bits(acc)
}

fn band(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    fold(&args, "band", |a, b| a & b)
}

fn bor(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    fold(&args, "bor", |a, b| a | b)
}

fn bxor(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    fold(&args, "bxor", |a, b| a ^ b)
}

// shift counts only use their low five bits
fn shift(args: &[Value], fname: &str, op: fn(i32, u32) -> i32) -> FunctionResult<Vec<Value>> {
    let x = check_bit(args, 0, fname)?;
    let n = check_bit(args, 1, fname)? as u32 & 31;
    bits(op(x, n))
}

fn lshift(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    shift(&args, "lshift", |x, n| ((x as u32) << n) as i32)
}

fn rshift(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    shift(&args, "rshift", |x, n| ((x as u32) >> n) as i32)
}

fn arshift(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    shift(&args, "arshift", |x, n| x >> n)
}

fn rol(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    shift(&args, "rol", |x, n| x.rotate_left(n))
}

fn ror(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    shift(&args, "ror", |x, n| x.rotate_right(n))
}

fn tohex(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let x = check_bit(&args, 0, "tohex")?;
    let n = opt_integer(&args, 1, "tohex", 8)?;
    let width = n.unsigned_abs().min(8) as usize;

    let hex = if n < 0 {
        format!("{:08X}", x as u32)
    } else {
        format!("{:08x}", x as u32)
    };

    Ok(vec![Value::from(hex[8 - width..].to_string())])
}
