use super::args::*;
use crate::vm::value::error;
use crate::vm::value::function::{Arity, FunctionResult, Registration};
use crate::vm::value::Value;
use crate::vm::VM;

const FUNCTIONS: &[Registration] = &[
    ("concat", concat, Arity::AtLeast(1)),
    ("insert", insert, Arity::AtLeast(2)),
    ("remove", remove, Arity::AtLeast(1)),
];

pub fn open(vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let module = vm.register_module(&module_name(&args), FUNCTIONS)?;
    Ok(vec![Value::Table(module)])
}

fn insert(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let table = check_table(&args, 0, "insert")?;
    let len = table.borrow().len();

    match args.len() {
        2 => table.borrow_mut().set_index(len + 1, args[1].clone()),
        3 => {
            let pos = check_integer(&args, 1, "insert")?;
            if pos < 1 || pos > len + 1 {
                return Err(bad_argument(1, "insert", "position out of bounds"));
            }
            table.borrow_mut().insert_at(pos, args[2].clone());
        }
        _ => return Err(error::argument_error("wrong number of arguments to 'insert'")),
    }

    Ok(vec![])
}

fn remove(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let table = check_table(&args, 0, "remove")?;
    let len = table.borrow().len();
    if len == 0 {
        return Ok(vec![]);
    }

    let pos = opt_integer(&args, 1, "remove", len)?;
    if pos < 1 || pos > len {
        return Err(bad_argument(1, "remove", "position out of bounds"));
    }

    let removed = table.borrow_mut().remove_at(pos);
    Ok(vec![removed])
}

fn concat(_vm: &mut VM, args: Vec<Value>) -> FunctionResult<Vec<Value>> {
    let table = check_table(&args, 0, "concat")?;
    let table = table.borrow();
    let separator = opt_string(&args, 1, "concat", "")?;
    let from = opt_integer(&args, 2, "concat", 1)?;
    let to = opt_integer(&args, 3, "concat", table.len())?;

    let mut parts = Vec::new();
    for i in from..=to {
        match table.get_index(i).to_bytes() {
            Some(s) => parts.push(s),
            None => {
                return Err(error::argument_error(format!(
                    "invalid value (at index {}) in table for 'concat'",
                    i
                )))
            }
        }
    }

    let joined = parts.iter().map(|s| &**s).collect::<Vec<&[u8]>>().join(&*separator);
    Ok(vec![Value::from(joined)])
}
