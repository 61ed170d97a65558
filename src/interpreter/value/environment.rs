use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A shared handle to an environment.
///
/// Environments are shared: a function value holds a handle to its defining
/// environment, and call frames link back to it as their outer scope. The
/// handle is reference counted; cycles created by binding a closure inside
/// the environment it captured are accepted and live for the session.
pub type Env = Rc<RefCell<Environment>>;

/// A lexically scoped mapping from names to values.
///
/// Lookup consults the local store first and then walks the outer chain;
/// writes always go to the local store, so inner bindings shadow outer ones.
/// The chain forms a tree whose root is the global scope created by the
/// driver and whose leaves are function-call frames.
///
/// # Example
/// ```
/// use quill::interpreter::value::{core::Value, environment::Environment};
///
/// let global = Environment::new();
/// global.borrow_mut().set("x", Value::Integer(1));
///
/// let local = Environment::new_enclosed(&global);
/// local.borrow_mut().set("y", Value::Integer(2));
///
/// assert_eq!(local.borrow().get("x"), Some(Value::Integer(1)));
/// assert_eq!(global.borrow().get("y"), None);
/// ```
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Env>,
}

impl Environment {
    /// Creates a fresh global environment.
    #[must_use]
    pub fn new() -> Env {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: None, }))
    }

    /// Creates an environment enclosed by `outer`.
    ///
    /// Used for function-call frames: names missing locally resolve through
    /// the captured environment of the called function.
    #[must_use]
    pub fn new_enclosed(outer: &Env) -> Env {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: Some(Rc::clone(outer)), }))
    }

    /// Looks a name up in this environment, walking outward on a miss.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer
                        .as_ref()
                        .and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds a name in this environment's local store.
    ///
    /// An existing binding of the same name in an outer scope is shadowed,
    /// not overwritten.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }
}
