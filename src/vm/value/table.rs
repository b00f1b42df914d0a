use super::error;
use super::function::FunctionResult;
use super::Value;
use rustc_hash::FxHashMap;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Integer(i64),
    Str(Rc<[u8]>),
    Bool(bool),
}

impl Key {
    pub fn from_value(v: &Value) -> FunctionResult<Key> {
        match v {
            Value::Nil => Err(error::argument_error("table index is nil")),
            Value::Bool(b) => Ok(Key::Bool(*b)),
            Value::Number(n) if n.is_nan() => Err(error::argument_error("table index is NaN")),
            Value::Number(n) if n.fract() == 0.0 && n.abs() < 9.007_199_254_740_992e15 => {
                Ok(Key::Integer(*n as i64))
            }
            Value::Str(s) => Ok(Key::Str(s.clone())),
            other => Err(error::argument_error(format!(
                "unsupported table index of type {}",
                other.type_name()
            ))),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(Rc::from(s.as_bytes()))
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Integer(i)
    }
}

/// An associative table. Setting a field to nil removes it, so every stored
/// value is non-nil.
///
/// `border` is kept equal to the largest n such that 1..=n are all present.
#[derive(Clone, Default)]
pub struct Table {
    fields: FxHashMap<Key, Value>,
    border: i64,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            border: 0,
        }
    }

    pub fn get(&self, key: &Key) -> Value {
        self.fields.get(key).cloned().unwrap_or(Value::Nil)
    }

    pub fn get_field(&self, name: &str) -> Value {
        self.get(&Key::from(name))
    }

    pub fn get_index(&self, index: i64) -> Value {
        self.get(&Key::Integer(index))
    }

    pub fn set(&mut self, key: Key, value: Value) {
        let index = match key {
            Key::Integer(i) => Some(i),
            _ => None,
        };

        if value.is_nil() {
            self.fields.remove(&key);
            if let Some(i) = index {
                if i >= 1 && i <= self.border {
                    self.border = i - 1;
                }
            }
        } else {
            self.fields.insert(key, value);
            if index == Some(self.border + 1) {
                self.advance_border();
            }
        }
    }

    fn advance_border(&mut self) {
        while self.fields.contains_key(&Key::Integer(self.border + 1)) {
            self.border += 1;
        }
    }

    pub fn set_field<V: Into<Value>>(&mut self, name: &str, value: V) {
        self.set(Key::from(name), value.into())
    }

    pub fn set_index<V: Into<Value>>(&mut self, index: i64, value: V) {
        self.set(Key::Integer(index), value.into())
    }

    pub fn contains_field(&self, name: &str) -> bool {
        self.fields.contains_key(&Key::from(name))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The names of all string keyed fields, sorted.
    pub fn field_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .fields
            .keys()
            .filter_map(|k| match k {
                Key::Str(s) => Some(String::from_utf8_lossy(s).into_owned()),
                _ => None,
            })
            .collect();
        names.sort();
        names
    }

    /// The border of the sequence part: the largest n such that 1..=n are all present.
    pub fn len(&self) -> i64 {
        self.border
    }

    pub fn insert_at(&mut self, pos: i64, value: Value) {
        let len = self.len();
        let mut i = len;
        while i >= pos {
            let moved = self.get_index(i);
            self.set_index(i + 1, moved);
            i -= 1;
        }
        self.set_index(pos, value);
    }

    pub fn remove_at(&mut self, pos: i64) -> Value {
        let len = self.len();
        let removed = self.get_index(pos);
        for i in pos..len {
            let moved = self.get_index(i + 1);
            self.set_index(i, moved);
        }
        if pos <= len {
            self.set_index(len, Value::Nil);
        }
        removed
    }
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("Table({:?})", self.field_names()))
    }
}
