//! The fixed table of native functions available to every Monkey program.
//!
//! Grounded in the teacher's `interpreter::Interpreter::run_fn_call` special
//! case for `print` (`src/interpreter/mod.rs`), generalized into the full
//! builtin table spec.md §4.4 specifies. The lookup table itself borrows the
//! teacher's `lazy_static! LEX_MAP` idiom (`src/lexer/mod.rs`) via `once_cell`.
use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::evaluator::error::wrong_arity;
use crate::object::{BuiltinFn, Object};

static BUILTINS: Lazy<HashMap<&'static str, BuiltinFn>> = Lazy::new(|| {
    let mut table: HashMap<&'static str, BuiltinFn> = HashMap::new();
    table.insert("len", builtin_len as BuiltinFn);
    table.insert("first", builtin_first as BuiltinFn);
    table.insert("last", builtin_last as BuiltinFn);
    table.insert("rest", builtin_rest as BuiltinFn);
    table.insert("push", builtin_push as BuiltinFn);
    table.insert("puts", builtin_puts as BuiltinFn);
    table
});

/// Resolves `name` to its builtin implementation, if any. Identifiers fall
/// through to this table only after the environment chain misses
/// (spec.md §4.4 — user bindings shadow builtins).
pub fn lookup(name: &str) -> Option<Object> {
    BUILTINS.get(name).copied().map(Object::Builtin)
}

fn builtin_len(args: &[Object]) -> Object {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }
    match &args[0] {
        Object::String(s) => Object::Integer(s.chars().count() as i64),
        Object::Array(elements) => Object::Integer(elements.len() as i64),
        other => Object::Error(format!(
            "Argument to 'len' not supported. Got {}",
            other.type_name()
        )),
    }
}

fn builtin_first(args: &[Object]) -> Object {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }
    match &args[0] {
        Object::Array(elements) => elements.first().cloned().unwrap_or(Object::Null),
        other => Object::Error(format!(
            "Argument to 'first' must be Array. Got {}",
            other.type_name()
        )),
    }
}

fn builtin_last(args: &[Object]) -> Object {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }
    match &args[0] {
        Object::Array(elements) => elements.last().cloned().unwrap_or(Object::Null),
        other => Object::Error(format!(
            "Argument to 'last' must be Array. Got {}",
            other.type_name()
        )),
    }
}

fn builtin_rest(args: &[Object]) -> Object {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }
    match &args[0] {
        Object::Array(elements) => {
            if elements.is_empty() {
                Object::Null
            } else {
                Object::Array(elements[1..].to_vec())
            }
        }
        other => Object::Error(format!(
            "Argument to 'rest' must be Array. Got {}",
            other.type_name()
        )),
    }
}

/// Pure: returns a new array with `v` appended, never mutating the original
/// (spec.md §4.4, §8 invariant — "no user-visible mutation").
fn builtin_push(args: &[Object]) -> Object {
    if args.len() != 2 {
        return wrong_arity(args.len(), 2);
    }
    match &args[0] {
        Object::Array(elements) => {
            let mut copy = elements.clone();
            copy.push(args[1].clone());
            Object::Array(copy)
        }
        other => Object::Error(format!(
            "Argument to 'push' must be Array. Got {}",
            other.type_name()
        )),
    }
}

fn builtin_puts(args: &[Object]) -> Object {
    for arg in args {
        println!("{arg}");
    }
    Object::Null
}
