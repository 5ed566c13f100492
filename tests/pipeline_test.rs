//! Integration tests for the full evaluation pipeline on the local path.

use evalscope_core::{CapturedValue, Config, Evaluator};

fn evaluator() -> Evaluator {
    Evaluator::with_config(Config::default())
        .unwrap()
        .without_remote()
}

#[test]
fn test_basic_capture_scenario() {
    let mut evaluator = evaluator();
    let result = evaluator.evaluate(r#"let taskName = "Ship it"; let progress = 50;"#);

    assert_eq!(result.variables.len(), 2);
    assert_eq!(result.variables[0].name, "taskName");
    assert_eq!(result.variables[1].name, "progress");
    assert_eq!(
        result.get("taskName"),
        Some(&CapturedValue::String("Ship it".to_string()))
    );
    assert_eq!(result.get("progress"), Some(&CapturedValue::Number(50.0)));
    assert!(result.console_output.is_empty());
    assert!(result.error.is_none());
}

#[test]
fn test_console_ordering() {
    let mut evaluator = evaluator();
    let result = evaluator.evaluate(r#"console.log("a"); console.log("b");"#);

    let lines: Vec<Vec<CapturedValue>> = result
        .console_output
        .iter()
        .map(|entry| entry.args.clone())
        .collect();
    assert_eq!(
        lines,
        vec![
            vec![CapturedValue::String("a".to_string())],
            vec![CapturedValue::String("b".to_string())],
        ]
    );
}

#[test]
fn test_throw_preserves_bindings_created_before_the_throw() {
    let mut evaluator = evaluator();
    let result = evaluator.evaluate(r#"let x = 1; throw new Error("boom");"#);

    // Partial capture: x was bound before the throw, so it is reported
    // alongside the error
    assert_eq!(result.error.as_deref(), Some("boom"));
    assert_eq!(result.get("x"), Some(&CapturedValue::Number(1.0)));
}

#[test]
fn test_undefined_is_distinct_from_missing() {
    let mut evaluator = evaluator();
    let result = evaluator.evaluate("let a;");

    assert_eq!(result.get("a"), Some(&CapturedValue::Undefined));
    assert!(result.get("never_declared").is_none());
}

#[test]
fn test_class_instance_marking() {
    let mut evaluator = evaluator();
    let result = evaluator.evaluate("class Foo {}\nlet x = new Foo();");

    let value = result.get("x").expect("x should be captured");
    assert!(value.is_class_instance());
    assert_eq!(value.class_name(), Some("Foo"));
}

#[test]
fn test_constructor_function_instance_marking() {
    let mut evaluator = evaluator();
    let result = evaluator.evaluate(
        r#"
function Task(name) {
    this.name = name;
}
var todo = new Task("write docs");
"#,
    );

    let value = result.get("todo").expect("todo should be captured");
    assert_eq!(value.class_name(), Some("Task"));
}

#[test]
fn test_idempotent_evaluation() {
    let mut evaluator = evaluator();
    let source = r#"
let total = 0;
for (let i = 1; i <= 4; i++) {
    total = total + i;
}
console.log("total", total);
"#;

    let first = evaluator.evaluate(source);
    let second = evaluator.evaluate(source);

    assert_eq!(first.variables, second.variables);
    assert_eq!(first.console_output, second.console_output);
    assert_eq!(first.get("total"), Some(&CapturedValue::Number(10.0)));
}

#[test]
fn test_evaluating_source_read_from_disk() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "let fromFile = true;").unwrap();

    let source = std::fs::read_to_string(file.path()).unwrap();
    let mut evaluator = evaluator();
    let result = evaluator.evaluate(&source);

    assert_eq!(result.get("fromFile"), Some(&CapturedValue::Bool(true)));
}

#[test]
fn test_evaluation_never_panics_on_garbage() {
    let mut evaluator = evaluator();
    for source in ["let = ;", "}{", "class {", "function (", "\0\0\0", ""] {
        let result = evaluator.evaluate(source);
        assert!(!result.ai_enhanced);
    }
}

#[test]
fn test_lesson_sized_program() {
    let mut evaluator = evaluator();
    let result = evaluator.evaluate(
        r#"
class Lesson {
    constructor(title) {
        this.title = title;
        this.completed = false;
    }
}

let lesson = new Lesson("Variables");
let steps = ["read", "edit", "run"];
let progress = 2 / steps.length;

function describe(l) {
    return l.title + (l.completed ? " (done)" : "");
}

console.log(describe(lesson));
"#,
    );

    assert!(result.error.is_none());
    assert_eq!(result.get("lesson").unwrap().class_name(), Some("Lesson"));
    assert_eq!(
        result.get("steps"),
        Some(&CapturedValue::Array(vec![
            CapturedValue::String("read".to_string()),
            CapturedValue::String("edit".to_string()),
            CapturedValue::String("run".to_string()),
        ]))
    );
    assert!(matches!(
        result.get("describe"),
        Some(CapturedValue::Function { .. })
    ));
    assert_eq!(result.console_output.len(), 1);
    assert_eq!(result.console_output[0].text(), "Variables");
}
