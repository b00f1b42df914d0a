pub mod error;
pub mod function;
pub mod table;

use crate::vm::reference::Reference;
use function::Function;
use std::rc::Rc;
use table::Table;

// Values visible to scripts and to module constructors
#[derive(Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Number(f64),
    Str(Rc<[u8]>),
    Table(Reference<Table>),
    Function(Function),
}

impl Value {
    pub fn string<S: AsRef<[u8]>>(s: S) -> Value {
        Value::Str(Rc::from(s.as_ref()))
    }

    pub fn table(t: Table) -> Value {
        Value::Table(Reference::new(t))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Table(_) => "table",
            Value::Function(_) => "function",
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    /// Only nil and false are false.
    pub fn truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    pub fn as_table(&self) -> Option<&Reference<Table>> {
        match self {
            Value::Table(t) => Some(t),
            _ => None,
        }
    }

    /// Numbers, and strings that read as numbers.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Str(s) => std::str::from_utf8(s).ok().and_then(parse_number),
            _ => None,
        }
    }

    /// The bytes of strings, and of numbers rendered as strings.
    pub fn to_bytes(&self) -> Option<Rc<[u8]>> {
        match self {
            Value::Str(s) => Some(s.clone()),
            Value::Number(n) => Some(Rc::from(format_number(*n).as_bytes())),
            _ => None,
        }
    }
}

pub fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let parsed = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16).ok().map(|n| n as f64),
        None if digits.starts_with('+') || digits.starts_with('-') => None,
        None if digits.is_empty() || !digits.chars().all(is_decimal_char) => None,
        None => digits.parse::<f64>().ok(),
    }?;
    Some(if negative { -parsed } else { parsed })
}

fn is_decimal_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-')
}

pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        String::from("nan")
    } else if n.is_infinite() {
        String::from(if n > 0.0 { "inf" } else { "-inf" })
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl PartialEq for Value {
    fn eq(&self, rhs: &Value) -> bool {
        match (self, rhs) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(l), Value::Bool(r)) => l == r,
            (Value::Number(l), Value::Number(r)) => l == r,
            (Value::Str(l), Value::Str(r)) => l == r,
            (Value::Table(l), Value::Table(r)) => Reference::ref_eq(l, r),
            (Value::Function(l), Value::Function(r)) => Function::ptr_eq(l, r),
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Str(s) => f.write_str(&String::from_utf8_lossy(s)),
            Value::Table(t) => write!(f, "table: {:p}", t.as_ptr()),
            Value::Function(func) => write!(f, "function: {:p}", func.address()),
        }
    }
}

// tables may contain themselves (_G._G), so Debug never descends into them
impl std::fmt::Debug for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{:?}", String::from_utf8_lossy(s)),
            Value::Function(func) => write!(f, "{:?}", func),
            other => write!(f, "{}", other),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(Rc::from(s.into_bytes()))
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Str(Rc::from(bytes))
    }
}

impl From<Rc<[u8]>> for Value {
    fn from(s: Rc<[u8]>) -> Self {
        Value::Str(s)
    }
}

impl From<Reference<Table>> for Value {
    fn from(t: Reference<Table>) -> Self {
        Value::Table(t)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Value::Function(f)
    }
}
