//! Lexically nested variable storage.
//!
//! Grounded in the teacher's `interpreter::Scope` (`src/interpreter/mod.rs`),
//! which keeps a `Vec<HashMap<String, VariableType>>` stack and finds names
//! by walking it back-to-front. Monkey functions are first-class and must
//! retain the environment active at their *definition* site even after that
//! call frame returns (spec.md §3, §9) — a stack frame doesn't outlive its
//! caller, so the stack is generalized here into a parent-linked tree of
//! reference-counted scopes (`Rc<RefCell<Environment>>`), the standard Rust
//! rendition of this pattern (see DESIGN.md, Open Question O1).
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::object::Object;

#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Object>,
    outer: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    /// A fresh, parentless environment (the REPL/program root).
    pub fn new() -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: None,
        }))
    }

    /// A new scope enclosed by `outer`, created once per function call.
    pub fn enclosed(outer: Rc<RefCell<Environment>>) -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: Some(outer),
        }))
    }

    /// Looks up `name` in this scope, then walks outward through enclosing
    /// scopes until a binding is found or the root is exhausted.
    pub fn get(&self, name: &str) -> Option<Object> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self
                .outer
                .as_ref()
                .and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Unconditionally binds `name` to `value` in the **current** scope —
    /// this never walks outward, which is how shadowing in a new scope works.
    pub fn set(&mut self, name: impl Into<String>, value: Object) -> Object {
        self.store.insert(name.into(), value.clone());
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_bindings_in_the_current_scope() {
        let env = Environment::new();
        env.borrow_mut().set("x", Object::Integer(5));
        assert!(matches!(env.borrow().get("x"), Some(Object::Integer(5))));
    }

    #[test]
    fn walks_outward_to_enclosing_scopes() {
        let outer = Environment::new();
        outer.borrow_mut().set("x", Object::Integer(5));

        let inner = Environment::enclosed(outer);
        assert!(matches!(inner.borrow().get("x"), Some(Object::Integer(5))));
    }

    #[test]
    fn set_never_walks_outward() {
        let outer = Environment::new();
        outer.borrow_mut().set("x", Object::Integer(5));

        let inner = Environment::enclosed(outer.clone());
        inner.borrow_mut().set("x", Object::Integer(10));

        assert!(matches!(inner.borrow().get("x"), Some(Object::Integer(10))));
        assert!(matches!(outer.borrow().get("x"), Some(Object::Integer(5))));
    }

    #[test]
    fn missing_binding_is_none() {
        let env = Environment::new();
        assert!(env.borrow().get("missing").is_none());
    }
}
