use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// A Reference is a shared, mutable location inside the interpreter state.
/// Tables are handed around as references so that a module table bound in the
/// global namespace and the same table stored in the registry stay one object.
#[repr(transparent)]
#[derive(Debug)]
pub struct Reference<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> Reference<T> {
    pub fn new(v: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(v)),
        }
    }

    /// ref_eq is true iff both references point to the same location
    pub fn ref_eq(lhs: &Self, rhs: &Self) -> bool {
        Rc::ptr_eq(&lhs.inner, &rhs.inner)
    }

    pub fn borrow(&self) -> Ref<'_, T> {
        self.inner.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.inner.borrow_mut()
    }

    pub fn with_ref<F, O>(&self, f: F) -> O
    where
        F: FnOnce(&T) -> O,
    {
        f(&self.inner.borrow())
    }

    pub fn as_ptr(&self) -> *const T {
        self.inner.as_ptr() as *const T
    }
}

impl<T: Clone> Reference<T> {
    pub fn to_owned(&self) -> T {
        self.inner.borrow().clone()
    }
}

impl<T> Clone for Reference<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> PartialEq for Reference<T> {
    fn eq(&self, other: &Reference<T>) -> bool {
        Reference::ref_eq(self, other)
    }
}
