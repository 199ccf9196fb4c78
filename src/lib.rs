//! # monkey-lang
//!
//! A lexer, parser, and tree-walking evaluator for the Monkey language:
//! integers, booleans, strings, arrays, hashes, and first-class functions
//! with lexical closures.
//!
//! The embedding API is small on purpose — build a [`Lexer`], feed it to a
//! [`Parser`], evaluate the resulting [`ast::Program`] against an
//! [`Environment`] with [`evaluator::Evaluator`]:
//!
//! ```
//! use monkey_lang::{Environment, Evaluator, Lexer, Parser};
//!
//! let lexer = Lexer::new("let x = 5; x + 1");
//! let mut parser = Parser::new(lexer);
//! let program = parser.parse_program();
//! assert!(parser.errors.is_empty());
//!
//! let env = Environment::new();
//! let result = Evaluator::eval(&program, &env);
//! assert_eq!(result.to_string(), "6");
//! ```
pub mod ast;
pub mod builtins;
pub mod environment;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod object;
pub mod parser;

pub use environment::Environment;
pub use error::SourceLoadError;
pub use evaluator::Evaluator;
pub use lexer::{Lexer, Token, TokenKind};
pub use object::Object;
pub use parser::Parser;
