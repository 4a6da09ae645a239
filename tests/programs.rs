//! End-to-end programs exercising the whole pipeline at once.

mod common;

use common::{run_output, run_program};
use plaintalk::Value;

#[test]
fn test_hello_world_program() {
    let (lines, env) = run_program("say \"Hello, World!\"");
    assert_eq!(lines, ["Hello, World!"]);
    assert!(env.is_empty());
}

#[test]
fn test_guarded_print_program() {
    let source = "\
let x be 5
if x is greater than 3 then say \"big\"";
    assert_eq!(run_output(source), ["big"]);
}

#[test]
fn test_while_convergence_program() {
    let source = "\
let y be 0
while y is less than 3 do
    let y be 3
end";
    let (lines, env) = run_program(source);
    assert!(lines.is_empty());
    assert_eq!(env.get("y"), Some(&Value::Int(3)));
}

#[test]
fn test_greeting_repeated() {
    let source = "\
let name be \"world\"
repeat 2 times say \"hello\"
if name is equal to \"world\" then say \"goodbye\"";
    assert_eq!(run_output(source), ["hello", "hello", "goodbye"]);
}

#[test]
fn test_full_feature_program() {
    let source = "\
say \"start\"
let count be 0
let limit be 1
while count is less than limit do
    say \"working\"
    repeat 2 times say \"step\"
    let count be 1
end
if count is equal to limit then say \"done\"";
    let (lines, env) = run_program(source);
    assert_eq!(lines, ["start", "working", "step", "step", "done"]);
    assert_eq!(env.get("count"), Some(&Value::Int(1)));
    assert_eq!(env.get("limit"), Some(&Value::Int(1)));
}

#[test]
fn test_free_text_between_statements_is_ignored() {
    // Unmatched punctuation is skipped by the lexer, so lightly decorated
    // prose still parses as long as the words line up with the grammar.
    assert_eq!(run_output("say \"hi\"!!!"), ["hi"]);
}

#[test]
fn test_environment_dump_order_matches_definition_order() {
    let (_, env) = run_program("let b be 2 let a be 1 let b be 3");
    let names: Vec<&str> = env.bindings().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["b", "a"]);
    assert_eq!(env.get("b"), Some(&Value::Int(3)));
}
