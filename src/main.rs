use anyhow::Result;
use std::env;
use tracing_subscriber::EnvFilter;

use bartender::{Bartender, BartenderRegistry};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        None | Some("demo") => run_demo(),
        Some("list-json") => run_list_json(),
        Some(other) => {
            eprintln!("❌ Unknown command: {}", other);
            eprintln!("   Usage: bartender [demo|list-json]");
            std::process::exit(1);
        }
    }
}

/// Hire the two demo bartenders into `registry`
fn hire_staff(registry: &BartenderRegistry) {
    Bartender::new(registry, "Phil");
    Bartender::new(registry, "Nancy");
}

fn run_demo() -> Result<()> {
    println!("🍸 Bartender v{}", bartender::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let registry = BartenderRegistry::new();
    hire_staff(&registry);

    if let Some(phil) = registry.find_by_name("Phil").first() {
        println!("\n{}", phil.intro());
        println!("{}", phil.make_drink());
    }

    println!("\n📋 Registry ({} bartenders):", registry.len());
    for bartender in registry.list_all() {
        println!("   {:?}", bartender);
    }

    Ok(())
}

fn run_list_json() -> Result<()> {
    let registry = BartenderRegistry::new();
    hire_staff(&registry);

    println!("{}", registry.to_json()?);

    Ok(())
}
