//! End-to-end tour of the evaluation pipeline on the local path.
//!
//! Run with: cargo run --example showcase

use evalscope_core::{Config, Evaluator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut evaluator = Evaluator::with_config(Config::default())?.without_remote();

    let source = r#"
class Task {
    constructor(name) {
        this.name = name;
        this.done = false;
    }
}

let taskName = "Ship it";
let progress = 50;
let current = new Task(taskName);

function finish(task) {
    task.done = true;
    return task;
}

finish(current);
console.log("working on:", taskName);
console.log("progress:", progress);
"#;

    let result = evaluator.evaluate(source);

    println!("=== Variables ===");
    for binding in &result.variables {
        println!(
            "{}: {} ({})",
            binding.name,
            binding.value,
            binding.value.type_label()
        );
    }

    println!("\n=== Console ===");
    for entry in &result.console_output {
        println!("> {}", entry.text());
    }

    if let Some(error) = &result.error {
        println!("\nError: {error}");
    }

    Ok(())
}
