//! Runtime value model for the evaluator.
//!
//! Grounded in the teacher's `interpreter::VariableType` (`src/interpreter/mod.rs`),
//! generalized from the teacher's closed four-variant set (void/bool/str/int/func)
//! to the full object model spec.md §3 requires, including first-class functions
//! that capture an [`Environment`](crate::environment::Environment) and a
//! hashability capability for use as hash keys.
mod hash_key;

pub use hash_key::{HashKey, Hashable};

use std::cell::RefCell;
use std::fmt::{self, Display};
use std::rc::Rc;

use crate::ast::{BlockStatement, Identifier};
use crate::environment::Environment;

pub type BuiltinFn = fn(&[Object]) -> Object;

/// A runtime Monkey value. Closed variant set with a uniform type tag
/// (see [`Object::type_name`]) and an `inspect()` printed form.
#[derive(Clone)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    Null,
    ReturnValue(Box<Object>),
    Error(String),
    Function {
        parameters: Vec<Identifier>,
        body: BlockStatement,
        env: Rc<RefCell<Environment>>,
    },
    String(String),
    Builtin(BuiltinFn),
    Array(Vec<Object>),
    /// Insertion-ordered `(HashKey, key, value)` triples. A `Vec` rather
    /// than a `HashMap` because spec.md §6 requires `inspect()` to render
    /// pairs in the order the hash literal defined them.
    Hash(Vec<(HashKey, Object, Object)>),
}

impl Object {
    /// The capitalized type-tag string embedded in error messages (spec.md §7).
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Integer(_) => "Integer",
            Object::Boolean(_) => "Boolean",
            Object::Null => "Null",
            Object::ReturnValue(_) => "ReturnValue",
            Object::Error(_) => "Error",
            Object::Function { .. } => "Function",
            Object::String(_) => "String",
            Object::Builtin(_) => "Builtin",
            Object::Array(_) => "Array",
            Object::Hash(_) => "Hash",
        }
    }

    /// `true` for everything except the shared `NULL` and `FALSE` singletons
    /// (spec.md's Truthy glossary entry).
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Null | Object::Boolean(false))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(v) => write!(f, "{v}"),
            Object::Boolean(v) => {
                if *v {
                    write!(f, "True")
                } else {
                    write!(f, "False")
                }
            }
            Object::Null => write!(f, "null"),
            Object::ReturnValue(v) => write!(f, "{v}"),
            Object::Error(msg) => write!(f, "Error: {msg}"),
            Object::Function {
                parameters, body, ..
            } => {
                use crate::ast::NodeString;
                let params = parameters
                    .iter()
                    .map(|p| p.node_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "fn({params}) {{\n{}\n}}", body.node_string())
            }
            Object::String(s) => write!(f, "{s}"),
            Object::Builtin(_) => write!(f, "builtin function"),
            Object::Array(elements) => {
                let rendered = elements
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "[{rendered}]")
            }
            Object::Hash(pairs) => {
                let rendered = pairs
                    .iter()
                    .map(|(_, k, v)| format!("{k}: {v}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{{{rendered}}}")
            }
        }
    }
}
