use plaintalk::interpreter::{run_with_sink, Environment, MemorySink};
use plaintalk::Error;

/// Runs a source program, returning the captured output lines and the
/// final variable environment.
pub fn run_program(source: &str) -> (Vec<String>, Environment) {
    let mut sink = MemorySink::new();
    let env = run_with_sink(source, &mut sink).expect("program should run");
    (sink.into_lines(), env)
}

#[allow(dead_code)]
pub fn run_output(source: &str) -> Vec<String> {
    run_program(source).0
}

#[allow(dead_code)]
pub fn run_error(source: &str) -> Error {
    let mut sink = MemorySink::new();
    run_with_sink(source, &mut sink).expect_err("program should fail")
}
