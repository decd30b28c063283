use std::fs;

use numscript::{interpreter::evaluator::core::Context, run_line, run_script_to};
use walkdir::WalkDir;

#[test]
fn demo_scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "nums"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = run_script_to(&content, Vec::new()) {
            panic!("Demo script {path:?} failed:\n{content}\nError: {e:?}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos");
}

fn assert_success(src: &str) {
    if let Err(e) = run_script_to(src, Vec::new()) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if run_script_to(src, Vec::new()).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

fn output_of(src: &str) -> String {
    let mut out = Vec::new();
    if let Err(e) = run_script_to(src, &mut out) {
        panic!("Script failed: {e}");
    }
    String::from_utf8(out).unwrap()
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_eq!(output_of("let x = 1 + 2; print(x);"), "3.00\n");
    assert_eq!(output_of("let x = 7 * 9; print(x);"), "63.00\n");
    assert_eq!(output_of("let x = 8 - 5; print(x);"), "3.00\n");
    assert_eq!(output_of("let x = 10 / 2; print(x);"), "5.00\n");
}

#[test]
fn precedence_and_grouping() {
    assert_eq!(output_of("print(2 + 3 * 4);"), "14.00\n");
    assert_eq!(output_of("print((2 + 3) * 4);"), "20.00\n");
    assert_eq!(output_of("print(10 / (2 + 3));"), "2.00\n");
}

#[test]
fn unary_minus_binds_tightest() {
    assert_eq!(output_of("print(-5 + 3);"), "-2.00\n");
    assert_eq!(output_of("print(2 * -3);"), "-6.00\n");
    assert_eq!(output_of("print(--4);"), "4.00\n");
}

#[test]
fn comparisons_yield_numeric_truth() {
    assert_eq!(output_of("print(2 < 3);"), "1.00\n");
    assert_eq!(output_of("print(3 < 2);"), "0.00\n");
    assert_eq!(output_of("print(3 > 2);"), "1.00\n");
    assert_eq!(output_of("print(2 > 3);"), "0.00\n");
}

#[test]
fn comparisons_share_the_additive_tier() {
    // ((2 + 3) < 4) + 1
    assert_eq!(output_of("print(2 + 3 < 4 + 1);"), "1.00\n");
    // ((1 < 2) + 10)
    assert_eq!(output_of("print(1 < 2 + 10);"), "11.00\n");
}

#[test]
fn decimal_literals() {
    assert_eq!(output_of("print(0.5 + 0.25);"), "0.75\n");
    assert_eq!(output_of("print(2.5 * 4);"), "10.00\n");
}

#[test]
fn reassignment_keeps_one_entry() {
    let mut context = Context::with_output(Vec::new());

    run_line(&mut context, "let x = 1;").unwrap();
    run_line(&mut context, "x = 2;").unwrap();

    assert_eq!(context.env.len(), 1);
    assert_eq!(context.env.get("x"), Some(2.0));
}

#[test]
fn assignments_yield_the_stored_value() {
    let mut context = Context::with_output(Vec::new());

    assert_eq!(run_line(&mut context, "let x = 5;").unwrap(), 5.0);
    assert_eq!(run_line(&mut context, "x = x + 1;").unwrap(), 6.0);
}

#[test]
fn loops_terminate_and_update_state() {
    let mut context = Context::with_output(Vec::new());

    run_line(&mut context, "let x = 5;").unwrap();
    run_line(&mut context, "while (x > 0) { x = x - 1; }").unwrap();

    assert_eq!(context.env.get("x"), Some(0.0));
}

#[test]
fn countdown_prints_every_value() {
    let src = "let x = 3; while (x > 0) { print(x); x = x - 1; }";
    assert_eq!(output_of(src), "3.00\n2.00\n1.00\n");
}

#[test]
fn conditionals_gate_on_nonzero() {
    let src = "let s = 85; if (s > 90) { print(1); } if (s > 60) { print(2); }";
    assert_eq!(output_of(src), "2.00\n");

    assert_eq!(output_of("if (0) { print(1); }"), "");
    assert_eq!(output_of("if (0.5) { print(1); }"), "1.00\n");
}

#[test]
fn variables_persist_across_blocks() {
    // A single flat scope: bindings made inside a body stay visible after it.
    let src = "let x = 1; if (x) { let y = 2; } print(y);";
    assert_eq!(output_of(src), "2.00\n");
}

#[test]
fn undefined_variables_fail_by_name() {
    assert_failure("print(missing);");

    let err = run_script_to("print(missing);", Vec::new()).unwrap_err();
    assert!(err.to_string().contains("missing"));
}

#[test]
fn division_by_zero_is_an_error() {
    assert_failure("print(1 / 0);");
    assert_success("print(0 / 1);");
}

#[test]
fn malformed_input_is_a_parse_error() {
    assert_failure("print((1 + 2;"); // unmatched '('
    assert_failure("let x 5;"); // missing '='
    assert_failure("let x = 5"); // missing ';'
    assert_failure("while (1 < 2 { }"); // unclosed condition
    assert_failure("if (1) { let x = 1;"); // unterminated block
    assert_failure("let x = 5 @ 3;"); // unknown character
    assert_failure("1 + 2;"); // no bare-expression statements
}

#[test]
fn comments_and_whitespace_are_ignored() {
    let src = "// greeting\nlet x = 1; // trailing\nprint(x);";
    assert_eq!(output_of(src), "1.00\n");
}

#[test]
fn errors_carry_line_numbers() {
    let err = run_script_to("let a = 1;\nprint(b);", Vec::new()).unwrap_err();
    assert_eq!(err.to_string(), "Error on line 2: Unknown variable 'b'.");
}

#[test]
fn interactive_lines_reject_trailing_tokens() {
    let mut context = Context::with_output(Vec::new());

    assert!(run_line(&mut context, "let x = 1; let y = 2;").is_err());
    assert!(context.env.get("y").is_none());
}
