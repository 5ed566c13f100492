use evalscope_core::patterns::DeclarationScanner;
use evalscope_core::types::{DeclarationKind, EvaluationResult};

pub fn print_analysis(filepath: &str, source: &str, scanner: &DeclarationScanner) {
    println!("🔍 Analyzing: {filepath}");
    println!("{}", "=".repeat(80));

    let declarations = scanner.scan(source);
    let classes = scanner.class_names(source);

    if declarations.is_empty() {
        println!("\n❌ No declarations found.");
        return;
    }

    println!("\n📦 Declarations ({}):", declarations.len());
    for decl in &declarations {
        let kind = match decl.kind {
            DeclarationKind::Variable => "variable",
            DeclarationKind::Function => "function",
            DeclarationKind::Assignment => "assignment",
            DeclarationKind::Class => "class",
            DeclarationKind::ConstructorFunction => "constructor function",
        };
        match &decl.initializer {
            Some(init) => println!("   • {} ({kind}) = {init}", decl.name),
            None => println!("   • {} ({kind})", decl.name),
        }
    }

    if !classes.is_empty() {
        println!("\n🏛  Classes ({}):", classes.len());
        for class in &classes {
            println!("   • {class}");
        }
    }

    println!("\n{}", "=".repeat(80));
}

pub fn print_evaluation(filepath: &str, result: &EvaluationResult) {
    println!("🔍 Evaluated: {filepath}");
    println!("{}", "=".repeat(80));

    if result.ai_enhanced {
        println!("✨ AI-enhanced analysis");
    } else {
        println!("🛠️  Local sandbox");
    }

    if let Some(error) = &result.error {
        println!("\n❌ Error: {error}");
    }

    if result.variables.is_empty() {
        println!("\n📦 No variables captured.");
    } else {
        println!("\n📦 Variables ({}):", result.variables.len());
        for binding in &result.variables {
            println!(
                "   • {}: {} ({})",
                binding.name,
                binding.value,
                binding.value.type_label()
            );
        }
    }

    if !result.console_output.is_empty() {
        println!("\n🖥️  Console ({} lines):", result.console_output.len());
        for entry in &result.console_output {
            println!("   > {}", entry.text());
        }
    }

    if !result.execution_path.is_empty() {
        println!("\n🧭 Execution flow:");
        for (i, step) in result.execution_path.iter().enumerate() {
            println!("   {}. {step}", i + 1);
        }
    }

    if !result.scopes.is_empty() {
        println!("\n🗂  Scopes described: {}", result.scopes.len());
    }

    println!("\n{}", "=".repeat(80));
}
