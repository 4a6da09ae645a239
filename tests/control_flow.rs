mod common;

use common::{run_output, run_program};
use plaintalk::Value;

#[test]
fn test_if_true_executes_body() {
    assert_eq!(
        run_output("let x be 5 if x is greater than 3 then say \"big\""),
        ["big"]
    );
}

#[test]
fn test_if_false_skips_body() {
    assert_eq!(
        run_output("let x be 2 if x is greater than 3 then say \"big\""),
        Vec::<String>::new()
    );
}

#[test]
fn test_if_has_no_else_branch() {
    let (lines, env) = run_program("let x be 2 if x is equal to 3 then let x be 99");
    assert!(lines.is_empty());
    assert_eq!(env.get("x"), Some(&Value::Int(2)));
}

#[test]
fn test_repeat_runs_exact_count() {
    assert_eq!(run_output("repeat 3 times say \"hi\""), ["hi", "hi", "hi"]);
}

#[test]
fn test_repeat_zero_times_is_silent() {
    let (lines, env) = run_program("repeat 0 times say \"never\"");
    assert!(lines.is_empty());
    assert!(env.is_empty());
}

#[test]
fn test_repeat_with_assignment_body() {
    let (_, env) = run_program("repeat 4 times let x be 1");
    assert_eq!(env.get("x"), Some(&Value::Int(1)));
}

#[test]
fn test_repeat_nested_if() {
    assert_eq!(
        run_output("let x be 1 repeat 2 times if x is equal to 1 then say \"one\""),
        ["one", "one"]
    );
}

#[test]
fn test_while_initially_false_runs_zero_times() {
    let (lines, env) = run_program("let y be 5 while y is less than 3 do say \"never\" end");
    assert!(lines.is_empty());
    assert_eq!(env.get("y"), Some(&Value::Int(5)));
}

#[test]
fn test_while_runs_until_condition_falsified() {
    // The body reassigns y to a value that falsifies the condition, so
    // the loop runs exactly once.
    let (lines, env) = run_program("let y be 0 while y is less than 3 do say \"tick\" let y be 3 end");
    assert_eq!(lines, ["tick"]);
    assert_eq!(env.get("y"), Some(&Value::Int(3)));
}

#[test]
fn test_while_body_runs_fully_each_iteration() {
    let (lines, _) = run_program(
        "let y be 0 while y is equal to 0 do say \"a\" say \"b\" let y be 1 end",
    );
    assert_eq!(lines, ["a", "b"]);
}

#[test]
fn test_while_with_empty_body_and_false_condition() {
    let (lines, _) = run_program("let y be 1 while y is equal to 0 do end");
    assert!(lines.is_empty());
}

#[test]
fn test_while_condition_reevaluated_each_iteration() {
    // Two-step convergence: the inner if flips y only on the second pass.
    let source = "\
let y be 0
let step be 0
while y is equal to 0 do
    say \"tick\"
    if step is equal to 1 then let y be 1
    let step be 1
end";
    let (lines, env) = run_program(source);
    assert_eq!(lines, ["tick", "tick"]);
    assert_eq!(env.get("y"), Some(&Value::Int(1)));
}

#[test]
fn test_repeat_inside_while_body() {
    let source = "let y be 0 while y is equal to 0 do repeat 2 times say \"hi\" let y be 1 end";
    assert_eq!(run_output(source), ["hi", "hi"]);
}
