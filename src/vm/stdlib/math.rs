use super::args::*;
use crate::vm::value::error;
use crate::vm::value::function::{Arity, Function, FunctionResult, Registration};
use crate::vm::value::Value;
use crate::vm::VM;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::rc::Rc;

const FUNCTIONS: &[Registration] = &[
    ("abs", abs, Arity::AtLeast(1)),
    ("ceil", ceil, Arity::AtLeast(1)),
    ("floor", floor, Arity::AtLeast(1)),
    ("fmod", fmod, Arity::AtLeast(2)),
    ("max", max, Arity::AtLeast(1)),
    ("min", min, Arity::AtLeast(1)),
    ("sqrt", sqrt, Arity::AtLeast(1)),
];

// every state starts from the same seed so scripts are reproducible
const DEFAULT_SEED: u64 = 0x6d6f_6f6e;

pub fn open(vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let module = vm.register_module(&module_name(&args), FUNCTIONS)?;
    let rng = Rc::new(RefCell::new(StdRng::seed_from_u64(DEFAULT_SEED)));

    {
        let mut module = module.borrow_mut();
        module.set_field("pi", std::f64::consts::PI);
        module.set_field("huge", f64::INFINITY);

        let source = rng.clone();
        module.set_field(
            "random",
            Function::new(
                "random",
                move |_vm, args| random(&mut source.borrow_mut(), &args),
                Arity::Many,
            ),
        );
        module.set_field(
            "randomseed",
            Function::new(
                "randomseed",
                move |_vm, args| {
                    let seed = check_number(&args, 0, "randomseed")?;
                    *rng.borrow_mut() = StdRng::seed_from_u64(seed.to_bits());
                    Ok(vec![])
                },
                Arity::AtLeast(1),
            ),
        );
    }

    Ok(vec![Value::Table(module)])
}

fn random(rng: &mut StdRng, args: &[Value]) -> FunctionResult<Vec<Value>> {
    let (lower, upper) = match args.len() {
        0 => return Ok(vec![Value::Number(rng.gen::<f64>())]),
        1 => (1, check_integer(args, 0, "random")?),
        2 => (
            check_integer(args, 0, "random")?,
            check_integer(args, 1, "random")?,
        ),
        _ => return Err(error::argument_error("wrong number of arguments to 'random'")),
    };

    if lower > upper {
        return Err(bad_argument(args.len() - 1, "random", "interval is empty"));
    }

    Ok(vec![Value::Number(rng.gen_range(lower..=upper) as f64)])
}

fn unary(args: &[Value], fname: &str, op: fn(f64) -> f64) -> FunctionResult<Vec<Value>> {
    Ok(vec![Value::Number(op(check_number(args, 0, fname)?))])
}

fn abs(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    unary(&args, "abs", f64::abs)
}

fn ceil(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    unary(&args, "ceil", f64::ceil)
}

fn floor(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    unary(&args, "floor", f64::floor)
}

fn sqrt(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    unary(&args, "sqrt", f64::sqrt)
}

fn fmod(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let a = check_number(&args, 0, "fmod")?;
    let b = check_number(&args, 1, "fmod")?;
    Ok(vec![Value::Number(a % b)])
}

fn fold(args: &[Value], fname: &str, pick: fn(f64, f64) -> f64) -> FunctionResult<Vec<Value>> {
    let mut acc = check_number(args, 0, fname)?;
    for n in 1..args.len() {
        acc = pick(acc, check_number(args, n, fname)?);
    }
    Ok(vec![Value::Number(acc)])
}

fn max(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    fold(&args, "max", f64::max)
}

fn min(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    fold(&args, "min", f64::min)
}
