//! Abstract syntax tree for Monkey.
//!
//! One file per node kind, aggregated here, mirroring the teacher's
//! `src/ast/*.rs` layout (`integer.rs`, `if_statement.rs`, `call.rs`, ...).
//! Unlike the teacher's generic-over-`T` AST (which threads a type-checker
//! annotation through every node), Monkey has no type checker, so nodes carry
//! only the data spec.md §3 asks for plus the originating `Token` for
//! diagnostics and canonical rendering.
mod array_literal;
mod block_statement;
mod boolean_literal;
mod call_expression;
mod expression_statement;
mod function_literal;
mod hash_literal;
mod identifier;
mod if_expression;
mod index_expression;
mod infix_expression;
mod integer_literal;
mod let_statement;
mod prefix_expression;
mod program;
mod return_statement;
mod string_literal;

pub use array_literal::ArrayLiteral;
pub use block_statement::BlockStatement;
pub use boolean_literal::BooleanLiteral;
pub use call_expression::CallExpression;
pub use expression_statement::ExpressionStatement;
pub use function_literal::FunctionLiteral;
pub use hash_literal::HashLiteral;
pub use identifier::Identifier;
pub use if_expression::IfExpression;
pub use index_expression::IndexExpression;
pub use infix_expression::InfixExpression;
pub use integer_literal::IntegerLiteral;
pub use let_statement::LetStatement;
pub use prefix_expression::PrefixExpression;
pub use program::Program;
pub use return_statement::ReturnStatement;
pub use string_literal::StringLiteral;

/// Renders an AST node back to a canonical source form, used for diagnostics
/// and the canonicalization law in spec.md §8. Named `NodeString` (rather
/// than `String`, which the original implementation's convention would
/// suggest) to avoid colliding with `std::string::String`.
pub trait NodeString {
    fn node_string(&self) -> String;
}

/// Top-level statement variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
}

impl NodeString for Statement {
    fn node_string(&self) -> String {
        match self {
            Statement::Let(s) => s.node_string(),
            Statement::Return(s) => s.node_string(),
            Statement::Expression(s) => s.node_string(),
        }
    }
}

/// Expression variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(IntegerLiteral),
    BooleanLiteral(BooleanLiteral),
    StringLiteral(StringLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    FunctionLiteral(FunctionLiteral),
    Call(CallExpression),
    ArrayLiteral(ArrayLiteral),
    Index(IndexExpression),
    HashLiteral(HashLiteral),
}

impl NodeString for Expression {
    fn node_string(&self) -> String {
        match self {
            Expression::Identifier(e) => e.node_string(),
            Expression::IntegerLiteral(e) => e.node_string(),
            Expression::BooleanLiteral(e) => e.node_string(),
            Expression::StringLiteral(e) => e.node_string(),
            Expression::Prefix(e) => e.node_string(),
            Expression::Infix(e) => e.node_string(),
            Expression::If(e) => e.node_string(),
            Expression::FunctionLiteral(e) => e.node_string(),
            Expression::Call(e) => e.node_string(),
            Expression::ArrayLiteral(e) => e.node_string(),
            Expression::Index(e) => e.node_string(),
            Expression::HashLiteral(e) => e.node_string(),
        }
    }
}
