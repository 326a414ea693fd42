//! TinyLang demo driver
//!
//! Usage: tinylang [--tokens] [--ast] [--stop-on-error] [FILE]
//!
//! Without FILE the built-in sample programs are run. Log output is
//! controlled by the `TINYLANG_LOG` environment variable (default `warn`).

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use tinylang::{
    LineHook, LineOutcome, Program, Session, SessionConfig, Statement, StdoutSink, Token, Value,
};
use tracing_subscriber::EnvFilter;

const SAMPLES: &[(&str, &str)] = &[
    ("Basic Math", "5 + 3 * 2\n(10 + 5) / 3\n8 - 4"),
    ("Variables", "let x = 10\nlet y = x + 5\nlet z = y * 2\nprint(z)"),
    ("Complex Expressions", "let a = 5\nlet b = 3\nlet result = (a + b) * 2 - 1\nprint(result)"),
    (
        "Error Handling",
        "let ok = 1\nprint(undefined_name)\n5 / 0\nlet broken =\nlet at = 5 @ 2\nprint(ok)",
    ),
];

#[derive(Debug, Default)]
struct Options {
    show_tokens: bool,
    show_ast: bool,
    stop_on_error: bool,
    file: Option<String>,
}

fn parse_args() -> Result<Option<Options>> {
    let mut options = Options::default();

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--tokens" => options.show_tokens = true,
            "--ast" => options.show_ast = true,
            "--stop-on-error" => options.stop_on_error = true,
            "-h" | "--help" => return Ok(None),
            flag if flag.starts_with('-') => bail!("unknown option '{}'", flag),
            path => {
                if options.file.is_some() {
                    bail!("only one script file may be given");
                }
                options.file = Some(path.to_string());
            }
        }
    }

    Ok(Some(options))
}

fn print_usage() {
    println!("Usage: tinylang [--tokens] [--ast] [--stop-on-error] [FILE]");
    println!();
    println!("  --tokens          print the token sequence of each line");
    println!("  --ast             print each parsed line as JSON");
    println!("  --stop-on-error   stop a program at its first failing line");
    println!();
    println!("Without FILE, the built-in sample programs are run.");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TINYLANG_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let Some(options) = parse_args()? else {
        print_usage();
        return Ok(());
    };

    match &options.file {
        Some(path) => {
            let code = fs::read_to_string(path)
                .with_context(|| format!("failed to read script '{}'", path))?;
            run_program(&code, path, &options)?;
        }
        None => {
            for (description, code) in SAMPLES {
                run_program(code, description, &options)?;
            }
        }
    }

    Ok(())
}

/// Prints tokens, ASTs, expression echoes and errors as lines run
struct Reporter<'a> {
    options: &'a Options,
}

impl LineHook for Reporter<'_> {
    fn on_tokens(&mut self, tokens: &[Token]) {
        if self.options.show_tokens {
            let kinds: Vec<String> = tokens.iter().map(|t| t.kind.to_string()).collect();
            println!("tokens: [{}]", kinds.join(", "));
        }
    }

    fn on_program(&mut self, program: &Program) {
        if !self.options.show_ast {
            return;
        }
        match serde_json::to_string(program) {
            Ok(json) => println!("ast: {}", json),
            Err(err) => tracing::warn!(error = %err, "failed to serialize AST"),
        }
    }

    fn on_statement(&mut self, statement: &Statement, value: &Value) {
        if let Statement::Expression(_) = statement {
            println!("{} => {}", statement, value);
        }
    }

    fn on_outcome(&mut self, outcome: &LineOutcome) {
        if let Err(err) = &outcome.result {
            println!("Error: {}", err);
        }
    }
}

fn run_program(code: &str, description: &str, options: &Options) -> Result<()> {
    println!("\n{}", "=".repeat(50));
    println!("PROGRAM: {}", description);
    println!("{}", "=".repeat(50));
    println!("Code:\n{}\n\nOutput:", code.trim());

    let config = SessionConfig {
        stop_on_error: options.stop_on_error,
    };
    let mut session = Session::with_config(StdoutSink, config);
    let outcomes = session.run_source_with(code, &mut Reporter { options });
    tracing::debug!(
        program = description,
        lines = outcomes.len(),
        failed = outcomes.iter().filter(|o| o.is_err()).count(),
        "program finished"
    );

    println!("\nFinal variables:");
    for (name, value) in session.environment().sorted() {
        println!("  {} = {}", name, value);
    }

    Ok(())
}
