//! The runtime error-message taxonomy (spec.md §7). Centralized here so the
//! exact wording — part of the contract, since tests match strings — has one
//! place of truth.
use crate::object::Object;

pub fn type_mismatch(left_ty: &str, op: &str, right_ty: &str) -> Object {
    Object::Error(format!("Type mismatch: {left_ty} {op} {right_ty}"))
}

pub fn unknown_prefix(op: &str, ty: &str) -> Object {
    Object::Error(format!("Unknown operator: {op}{ty}"))
}

pub fn unknown_infix(left_ty: &str, op: &str, right_ty: &str) -> Object {
    Object::Error(format!("Unknown operator: {left_ty} {op} {right_ty}"))
}

pub fn identifier_not_found(name: &str) -> Object {
    Object::Error(format!("Identifier not found: {name}"))
}

pub fn unusable_hash_key(ty: &str) -> Object {
    Object::Error(format!("Unusable as hash key: {ty}"))
}

pub fn not_a_function(ty: &str) -> Object {
    Object::Error(format!("Not a function: {ty}"))
}

pub fn index_not_supported(ty: &str) -> Object {
    Object::Error(format!("Index operator not supported {ty}"))
}

pub fn division_by_zero() -> Object {
    Object::Error("Division by zero".to_string())
}

pub fn wrong_arity(got: usize, want: usize) -> Object {
    Object::Error(format!("Wrong number of arguments. Got={got}, want={want}"))
}
