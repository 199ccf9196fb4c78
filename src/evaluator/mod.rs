//! Tree-walking evaluator.
//!
//! Grounded in the teacher's `Interpreter` (`src/interpreter/mod.rs`), which
//! dispatches on AST variants via a set of `Self::run_*` associated
//! functions rather than an instance method per node. That shape survives
//! here almost unchanged; what's generalized is the teacher's `VariableType`
//! (a closed four-case enum with no error channel and no closures) into the
//! full `Object` model, with every sub-evaluation checked for `Object::Error`
//! and short-circuited (spec.md §4.5).
pub(crate) mod error;

use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::{
    BlockStatement, CallExpression, Expression, HashLiteral, Identifier, IfExpression,
    IndexExpression, InfixExpression, PrefixExpression, Program, Statement,
};
use crate::builtins;
use crate::environment::Environment;
use crate::object::{Hashable, Object};

pub struct Evaluator;

impl Evaluator {
    /// Evaluates a parsed program against `env`. Never returns a bare
    /// `Object::ReturnValue` — exactly one `return` unwind is absorbed here,
    /// at the program boundary (spec.md §4.5, §9).
    pub fn eval(program: &Program, env: &Rc<RefCell<Environment>>) -> Object {
        let mut result = Object::Null;

        for statement in &program.statements {
            result = Self::eval_statement(statement, env);

            match result {
                Object::ReturnValue(value) => return *value,
                Object::Error(_) => return result,
                _ => {}
            }
        }

        result
    }

    fn eval_block_statement(block: &BlockStatement, env: &Rc<RefCell<Environment>>) -> Object {
        let mut result = Object::Null;

        for statement in &block.statements {
            result = Self::eval_statement(statement, env);

            if matches!(result, Object::ReturnValue(_) | Object::Error(_)) {
                return result;
            }
        }

        result
    }

    fn eval_statement(statement: &Statement, env: &Rc<RefCell<Environment>>) -> Object {
        match statement {
            Statement::Let(let_stmt) => {
                let value = Self::eval_expression(&let_stmt.value, env);
                if value.is_error() {
                    return value;
                }
                env.borrow_mut().set(let_stmt.name.value.clone(), value);
                Object::Null
            }
            Statement::Return(return_stmt) => {
                let value = Self::eval_expression(&return_stmt.return_value, env);
                if value.is_error() {
                    return value;
                }
                Object::ReturnValue(Box::new(value))
            }
            Statement::Expression(expr_stmt) => Self::eval_expression(&expr_stmt.expression, env),
        }
    }

    fn eval_expression(expr: &Expression, env: &Rc<RefCell<Environment>>) -> Object {
        match expr {
            Expression::IntegerLiteral(lit) => Object::Integer(lit.value),
            Expression::BooleanLiteral(lit) => Object::Boolean(lit.value),
            Expression::StringLiteral(lit) => Object::String(lit.value.clone()),
            Expression::Identifier(ident) => Self::eval_identifier(ident, env),
            Expression::Prefix(prefix) => Self::eval_prefix_expression(prefix, env),
            Expression::Infix(infix) => Self::eval_infix_expression(infix, env),
            Expression::If(if_expr) => Self::eval_if_expression(if_expr, env),
            Expression::FunctionLiteral(f) => Object::Function {
                parameters: f.parameters.clone(),
                body: f.body.clone(),
                env: env.clone(),
            },
            Expression::Call(call) => Self::eval_call_expression(call, env),
            Expression::ArrayLiteral(arr) => match Self::eval_expressions(&arr.elements, env) {
                Ok(elements) => Object::Array(elements),
                Err(err) => err,
            },
            Expression::Index(idx) => Self::eval_index_expression(idx, env),
            Expression::HashLiteral(hash) => Self::eval_hash_literal(hash, env),
        }
    }

    fn eval_identifier(ident: &Identifier, env: &Rc<RefCell<Environment>>) -> Object {
        if let Some(value) = env.borrow().get(&ident.value) {
            return value;
        }
        if let Some(builtin) = builtins::lookup(&ident.value) {
            return builtin;
        }
        error::identifier_not_found(&ident.value)
    }

    fn eval_prefix_expression(prefix: &PrefixExpression, env: &Rc<RefCell<Environment>>) -> Object {
        let right = Self::eval_expression(&prefix.right, env);
        if right.is_error() {
            return right;
        }

        match prefix.operator.as_str() {
            "!" => Self::eval_bang_operator(right),
            "-" => match right {
                Object::Integer(value) => Object::Integer(-value),
                other => error::unknown_prefix("-", other.type_name()),
            },
            other => error::unknown_prefix(other, right.type_name()),
        }
    }

    fn eval_bang_operator(right: Object) -> Object {
        match right {
            Object::Boolean(true) => Object::Boolean(false),
            Object::Boolean(false) => Object::Boolean(true),
            Object::Null => Object::Boolean(true),
            _ => Object::Boolean(false),
        }
    }

    fn eval_infix_expression(infix: &InfixExpression, env: &Rc<RefCell<Environment>>) -> Object {
        let left = Self::eval_expression(&infix.left, env);
        if left.is_error() {
            return left;
        }
        let right = Self::eval_expression(&infix.right, env);
        if right.is_error() {
            return right;
        }

        Self::eval_infix(&infix.operator, left, right)
    }

    fn eval_infix(op: &str, left: Object, right: Object) -> Object {
        match (&left, &right) {
            (Object::Integer(l), Object::Integer(r)) => Self::eval_integer_infix(op, *l, *r),
            (Object::String(l), Object::String(r)) => {
                if op == "+" {
                    Object::String(format!("{l}{r}"))
                } else {
                    error::unknown_infix("String", op, "String")
                }
            }
            _ if op == "==" => Object::Boolean(Self::objects_identical(&left, &right)),
            _ if op == "!=" => Object::Boolean(!Self::objects_identical(&left, &right)),
            _ if left.type_name() != right.type_name() => {
                error::type_mismatch(left.type_name(), op, right.type_name())
            }
            _ => error::unknown_infix(left.type_name(), op, right.type_name()),
        }
    }

    /// `==`/`!=` outside the integer/string fast paths compare by value for
    /// the shared `Boolean`/`Null` singletons — the observable effect of the
    /// original implementation's identity comparison on interned objects
    /// (spec.md §9).
    fn objects_identical(left: &Object, right: &Object) -> bool {
        matches!(
            (left, right),
            (Object::Null, Object::Null)
        ) || matches!((left, right), (Object::Boolean(a), Object::Boolean(b)) if a == b)
    }

    fn eval_integer_infix(op: &str, l: i64, r: i64) -> Object {
        match op {
            "+" => Object::Integer(l + r),
            "-" => Object::Integer(l - r),
            "*" => Object::Integer(l * r),
            "/" => {
                if r == 0 {
                    error::division_by_zero()
                } else {
                    Object::Integer(l / r)
                }
            }
            "<" => Object::Boolean(l < r),
            ">" => Object::Boolean(l > r),
            "==" => Object::Boolean(l == r),
            "!=" => Object::Boolean(l != r),
            other => error::unknown_infix("Integer", other, "Integer"),
        }
    }

    fn eval_if_expression(if_expr: &IfExpression, env: &Rc<RefCell<Environment>>) -> Object {
        let condition = Self::eval_expression(&if_expr.condition, env);
        if condition.is_error() {
            return condition;
        }

        if condition.is_truthy() {
            Self::eval_block_statement(&if_expr.consequence, env)
        } else if let Some(alternative) = &if_expr.alternative {
            Self::eval_block_statement(alternative, env)
        } else {
            Object::Null
        }
    }

    fn eval_call_expression(call: &CallExpression, env: &Rc<RefCell<Environment>>) -> Object {
        let function = Self::eval_expression(&call.function, env);
        if function.is_error() {
            return function;
        }

        let args = match Self::eval_expressions(&call.arguments, env) {
            Ok(args) => args,
            Err(err) => return err,
        };

        Self::apply_function(function, args)
    }

    fn apply_function(function: Object, args: Vec<Object>) -> Object {
        match function {
            Object::Function {
                parameters,
                body,
                env,
            } => {
                if parameters.len() != args.len() {
                    return error::wrong_arity(args.len(), parameters.len());
                }

                let call_env = Environment::enclosed(env);
                for (param, arg) in parameters.iter().zip(args) {
                    call_env.borrow_mut().set(param.value.clone(), arg);
                }

                let evaluated = Self::eval_block_statement(&body, &call_env);
                Self::unwrap_return_value(evaluated)
            }
            Object::Builtin(f) => f(&args),
            other => error::not_a_function(other.type_name()),
        }
    }

    fn unwrap_return_value(obj: Object) -> Object {
        match obj {
            Object::ReturnValue(value) => *value,
            other => other,
        }
    }

    fn eval_expressions(
        exprs: &[Expression],
        env: &Rc<RefCell<Environment>>,
    ) -> Result<Vec<Object>, Object> {
        let mut result = Vec::with_capacity(exprs.len());
        for expr in exprs {
            let evaluated = Self::eval_expression(expr, env);
            if evaluated.is_error() {
                return Err(evaluated);
            }
            result.push(evaluated);
        }
        Ok(result)
    }

    fn eval_index_expression(idx: &IndexExpression, env: &Rc<RefCell<Environment>>) -> Object {
        let left = Self::eval_expression(&idx.left, env);
        if left.is_error() {
            return left;
        }
        let index = Self::eval_expression(&idx.index, env);
        if index.is_error() {
            return index;
        }

        match (&left, &index) {
            (Object::Array(elements), Object::Integer(i)) => {
                if *i < 0 || *i as usize >= elements.len() {
                    Object::Null
                } else {
                    elements[*i as usize].clone()
                }
            }
            (Object::Hash(pairs), key) => match key.hash_key() {
                Some(hash_key) => pairs
                    .iter()
                    .find(|(k, _, _)| *k == hash_key)
                    .map(|(_, _, v)| v.clone())
                    .unwrap_or(Object::Null),
                None => error::unusable_hash_key(key.type_name()),
            },
            _ => error::index_not_supported(left.type_name()),
        }
    }

    fn eval_hash_literal(hash: &HashLiteral, env: &Rc<RefCell<Environment>>) -> Object {
        let mut pairs = Vec::with_capacity(hash.pairs.len());

        for (key_expr, value_expr) in &hash.pairs {
            let key = Self::eval_expression(key_expr, env);
            if key.is_error() {
                return key;
            }
            let value = Self::eval_expression(value_expr, env);
            if value.is_error() {
                return value;
            }

            match key.hash_key() {
                Some(hash_key) => match pairs.iter_mut().find(|(k, _, _)| *k == hash_key) {
                    Some(entry) => *entry = (hash_key, key, value),
                    None => pairs.push((hash_key, key, value)),
                },
                None => return error::unusable_hash_key(key.type_name()),
            }
        }

        Object::Hash(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::parser::Parser;

    fn eval(input: &str) -> Object {
        let lexer = Lexer::new(input);
        let mut parser = Parser::new(lexer);
        let program = parser.parse_program();
        assert!(
            parser.errors.is_empty(),
            "parser errors for {input:?}: {:?}",
            parser.errors
        );
        let env = Environment::new();
        Evaluator::eval(&program, &env)
    }

    #[test]
    fn arithmetic_with_precedence_and_negation() {
        let result = eval("(5 + 10 * 2 + 15 / 3) * 2 + -10");
        assert!(matches!(result, Object::Integer(50)));
    }

    #[test]
    fn closures_capture_their_defining_environment() {
        let result = eval(
            "let newAdder = fn(x) { fn(y) { x + y } }; \
             let addTwo = newAdder(2); addTwo(2);",
        );
        assert!(matches!(result, Object::Integer(4)));
    }

    #[test]
    fn return_unwinds_through_nested_blocks() {
        let result = eval("if (10 > 1) { if (10 > 1) { return 10; } return 1; }");
        assert!(matches!(result, Object::Integer(10)));
    }

    #[test]
    fn recursive_builtins_map_and_reduce() {
        let result = eval(
            "let map = fn(arr, f) { \
                 let iter = fn(arr, accumulated) { \
                     if (len(arr) == 0) { accumulated } \
                     else { iter(rest(arr), push(accumulated, f(first(arr)))) } \
                 }; \
                 iter(arr, []); \
             }; \
             let reduce = fn(arr, initial, f) { \
                 let iter = fn(arr, result) { \
                     if (len(arr) == 0) { result } \
                     else { iter(rest(arr), f(result, first(arr))) } \
                 }; \
                 iter(arr, initial); \
             }; \
             let sum = fn(arr) { reduce(arr, 0, fn(initial, el) { initial + el }) }; \
             sum([1, 2, 3, 4, 5]);",
        );
        assert!(matches!(result, Object::Integer(15)));
    }

    #[test]
    fn hash_literal_with_expression_keys_and_lookup() {
        let result = eval(
            r#"let two = "two";
            {"one": 10 - 9, two: 1 + 1, "thr" + "ee": 6 / 2, 4: 4, true: 5, false: 6}["one"]"#,
        );
        assert!(matches!(result, Object::Integer(1)));
    }

    #[test]
    fn string_minus_string_is_an_error() {
        let result = eval(r#""Hello" - "World""#);
        match result {
            Object::Error(msg) => assert_eq!(msg, "Unknown operator: String - String"),
            other => panic!("expected error, got {other}"),
        }
    }

    #[test]
    fn function_used_as_hash_key_is_rejected() {
        let result = eval(r#"{"name": "Monkey"}[fn(x){x}]"#);
        match result {
            Object::Error(msg) => assert_eq!(msg, "Unusable as hash key: Function"),
            other => panic!("expected error, got {other}"),
        }
    }

    #[test]
    fn errors_short_circuit_through_nested_expressions() {
        let result = eval("5 + true;");
        match result {
            Object::Error(msg) => assert_eq!(msg, "Type mismatch: Integer + Boolean"),
            other => panic!("expected error, got {other}"),
        }
    }

    #[test]
    fn unknown_identifier_is_an_error() {
        let result = eval("foobar;");
        match result {
            Object::Error(msg) => assert_eq!(msg, "Identifier not found: foobar"),
            other => panic!("expected error, got {other}"),
        }
    }

    #[test]
    fn truthiness_treats_any_non_null_non_false_value_as_true() {
        assert!(matches!(eval("if (0) { 10 }"), Object::Integer(10)));
        assert!(matches!(eval("if (false) { 10 }"), Object::Null));
    }

    #[test]
    fn array_index_out_of_bounds_is_null() {
        assert!(matches!(eval("[1, 2, 3][3]"), Object::Null));
        assert!(matches!(eval("[1, 2, 3][-1]"), Object::Null));
    }

    #[test]
    fn division_by_zero_is_reported() {
        let result = eval("1 / 0");
        match result {
            Object::Error(msg) => assert_eq!(msg, "Division by zero"),
            other => panic!("expected error, got {other}"),
        }
    }

    #[test]
    fn wrong_arity_on_user_function_call_is_a_runtime_error() {
        let result = eval("let add = fn(a, b) { a + b }; add(1);");
        match result {
            Object::Error(msg) => assert_eq!(msg, "Wrong number of arguments. Got=1, want=2"),
            other => panic!("expected error, got {other}"),
        }
    }

    #[test]
    fn user_bindings_shadow_builtins() {
        let result = eval("let len = fn(x) { 99 }; len(\"hi\")");
        assert!(matches!(result, Object::Integer(99)));
    }

    #[test]
    fn equality_across_differing_types_is_false_not_a_type_error() {
        assert!(matches!(eval("5 == true"), Object::Boolean(false)));
        assert!(matches!(eval("5 != true"), Object::Boolean(true)));
        assert!(matches!(
            eval("(if (false) { 1 }) == 5"),
            Object::Boolean(false)
        ));
    }

    #[test]
    fn duplicate_hash_literal_keys_let_the_last_value_win() {
        let result = eval(r#"{"a": 1, "a": 2}["a"]"#);
        assert!(matches!(result, Object::Integer(2)));

        let rendered = eval(r#"{"a": 1, "a": 2}"#).to_string();
        assert_eq!(rendered, r#"{"a": 2}"#);
    }
}
