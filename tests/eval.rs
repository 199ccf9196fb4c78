//! End-to-end lex → parse → eval scenarios, mirroring spec.md §8's literal
//! examples.
use monkey_lang::{Environment, Evaluator, Lexer, Parser};

fn run(input: &str) -> String {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();
    assert!(
        parser.errors.is_empty(),
        "unexpected parser errors for {input:?}: {:?}",
        parser.errors
    );
    let env = Environment::new();
    Evaluator::eval(&program, &env).to_string()
}

#[test]
fn arithmetic_with_grouping_and_precedence() {
    assert_eq!(run("(5 + 10 * 2 + 15 / 3) * 2 + -10"), "50");
}

#[test]
fn higher_order_functions_and_closures() {
    let program = r#"
        let newAdder = fn(x) {
            fn(y) { x + y };
        };
        let addTwo = newAdder(2);
        addTwo(2);
    "#;
    assert_eq!(run(program), "4");
}

#[test]
fn early_return_unwinds_through_nested_blocks() {
    let program = r#"
        if (10 > 1) {
            if (10 > 1) {
                return 10;
            }
            return 1;
        }
    "#;
    assert_eq!(run(program), "10");
}

#[test]
fn recursive_map_reduce_sum_over_an_array() {
    let program = r#"
        let map = fn(arr, f) {
            let iter = fn(arr, accumulated) {
                if (len(arr) == 0) {
                    accumulated
                } else {
                    iter(rest(arr), push(accumulated, f(first(arr))))
                }
            };
            iter(arr, []);
        };
        let reduce = fn(arr, initial, f) {
            let iter = fn(arr, result) {
                if (len(arr) == 0) {
                    result
                } else {
                    iter(rest(arr), f(result, first(arr)))
                }
            };
            iter(arr, initial);
        };
        let sum = fn(arr) {
            reduce(arr, 0, fn(initial, el) { initial + el });
        };
        let doubled = map([1, 2, 3, 4, 5], fn(x) { x * 2 });
        sum(doubled);
    "#;
    assert_eq!(run(program), "30");
}

#[test]
fn hash_literal_lookup_by_computed_key() {
    let program = r#"
        let two = "two";
        let data = {
            "one": 10 - 9,
            two: 1 + 1,
            "thr" + "ee": 6 / 2,
            4: 4,
            true: 5,
            false: 6
        };
        data["one"] + data[two] + data["three"] + data[4] + data[true] + data[false];
    "#;
    assert_eq!(run(program), "21");
}

#[test]
fn string_minus_string_surfaces_as_a_runtime_error() {
    assert_eq!(run(r#""Hello" - "World""#), "Error: Unknown operator: String - String");
}

#[test]
fn function_as_hash_key_surfaces_as_a_runtime_error() {
    assert_eq!(
        run(r#"{"name": "Monkey"}[fn(x) { x }]"#),
        "Error: Unusable as hash key: Function"
    );
}

#[test]
fn shared_environment_across_successive_statements() {
    let lexer = Lexer::new("let counter = 0; let counter = counter + 1;");
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();
    assert!(parser.errors.is_empty());

    let env = Environment::new();
    let result = Evaluator::eval(&program, &env);
    assert_eq!(result.to_string(), "null");
    assert_eq!(env.borrow().get("counter").unwrap().to_string(), "1");
}

#[test]
fn array_literal_and_index_expressions() {
    assert_eq!(run("let a = [1, 2 * 2, 3 + 3]; a[1]"), "4");
    assert_eq!(run("[1, 2, 3][10]"), "null");
}

#[test]
fn string_concatenation_via_plus() {
    assert_eq!(run(r#""Hello" + " " + "World!""#), "Hello World!");
}
