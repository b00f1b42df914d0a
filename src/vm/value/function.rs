use super::error::{self, RuntimeError};
use super::Value;
use crate::vm::VM;
use std::rc::Rc;

pub type FunctionResult<T> = std::result::Result<T, RuntimeError>;

pub type NativeFn = fn(&mut VM, Vec<Value>) -> FunctionResult<Vec<Value>>;

pub type FunctionImpl = dyn Fn(&mut VM, Vec<Value>) -> FunctionResult<Vec<Value>>;

/// A named native function together with the arity it accepts.
pub type Registration = (&'static str, NativeFn, Arity);

#[derive(Debug, Clone, PartialEq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
    Many,
}

impl Arity {
    pub fn accepts(&self, argc: usize) -> bool {
        match self {
            Arity::Exactly(n) => argc == *n,
            Arity::AtLeast(n) => argc >= *n,
            Arity::Many => true,
        }
    }
}

/// Functions are compared by identity: two values are equal only if they
/// were cloned from the same function.
#[derive(Clone)]
pub struct Function {
    pub name: Rc<str>,
    pub arity: Arity,
    proc: Rc<FunctionImpl>,
}

impl Function {
    pub fn new<S, I>(name: S, op: I, arity: Arity) -> Self
    where
        S: Into<Rc<str>>,
        I: 'static + Fn(&mut VM, Vec<Value>) -> FunctionResult<Vec<Value>>,
    {
        Self {
            name: name.into(),
            arity,
            proc: Rc::new(op),
        }
    }

    pub fn native<S: Into<Rc<str>>>(name: S, op: NativeFn, arity: Arity) -> Self {
        Self::new(name, op, arity)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, vm: &mut VM, arguments: Vec<Value>) -> FunctionResult<Vec<Value>> {
        if !self.arity.accepts(arguments.len()) {
            return Err(error::arity_mismatch(self.arity.clone(), arguments.len()));
        }
        (self.proc)(vm, arguments)
    }

    pub fn ptr_eq(lhs: &Function, rhs: &Function) -> bool {
        Rc::as_ptr(&lhs.proc) as *const () == Rc::as_ptr(&rhs.proc) as *const ()
    }

    pub(crate) fn address(&self) -> *const () {
        Rc::as_ptr(&self.proc) as *const ()
    }
}

impl From<Registration> for Function {
    fn from((name, op, arity): Registration) -> Self {
        Function::native(name, op, arity)
    }
}

impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format!("NativeFunction({})", self.name))
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Function::ptr_eq(self, other)
    }
}
