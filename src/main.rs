use std::{fs, path::PathBuf, process::ExitCode, rc::Rc, time::Instant};

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use exprc::{
    ast::statements::Program, compiler::compiler::compile, evaluator::evaluator::evaluate,
    lexer::lexer::tokenize, lexer::tokens::Token, parser::parser::parse, render_error,
};
use log::{error, info};

mod logger;

#[derive(Parser)]
#[command(name = "exprc")]
#[command(version, about = "Compiles semicolon-separated arithmetic statements to x86-64 assembly")]
struct Cli {
    /// Source file to compile
    #[arg(required_unless_present = "expr")]
    file: Option<PathBuf>,

    /// Compile the given source text instead of a file
    #[arg(short, long, conflicts_with = "file")]
    expr: Option<String>,

    /// Which stage's output to print
    #[arg(long, value_enum, default_value_t = Emit::Asm)]
    emit: Emit,

    /// Write output here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// The token stream
    Tokens,
    /// One fully parenthesised tree per statement
    Ast,
    /// x86-64 assembly
    Asm,
    /// The value of the last statement
    Eval,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    logger::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let (source, file_name) = match (&cli.expr, &cli.file) {
        (Some(expr), _) => (expr.clone(), String::from("<expr>")),
        (None, Some(path)) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            (source, path.display().to_string())
        }
        (None, None) => return Err(anyhow!("no input given")),
    };

    let start = Instant::now();

    let tokens = tokenize(source.clone(), Some(file_name.clone()))
        .map_err(|err| anyhow!("{}", render_error(&err, &source).trim_end()))?;

    info!("Tokenized in {:?}", start.elapsed());

    let output = match cli.emit {
        Emit::Tokens => tokens.iter().map(|token| token.debug() + "\n").collect::<String>(),
        Emit::Ast => parse_program(tokens, file_name, &source)?.to_string(),
        Emit::Eval => {
            let program = parse_program(tokens, file_name, &source)?;
            let value = evaluate(&program).context("evaluation failed")?;
            format!("{}\n", value)
        }
        Emit::Asm => {
            let program = parse_program(tokens, file_name, &source)?;
            let compile_start = Instant::now();
            let assembly = compile(&program).context("code generation failed")?;
            info!("Compiled in {:?}", compile_start.elapsed());
            assembly
        }
    };

    info!("Total time: {:?}", start.elapsed());

    write_output(cli, &output)
}

fn parse_program(tokens: Vec<Token>, file_name: String, source: &str) -> Result<Program> {
    let parse_start = Instant::now();
    let program = parse(tokens, Rc::new(file_name))
        .map_err(|err| anyhow!("{}", render_error(&err, source).trim_end()))?;

    info!("Parsed {} statements in {:?}", program.len(), parse_start.elapsed());
    Ok(program)
}

fn write_output(cli: &Cli, output: &str) -> Result<()> {
    match &cli.output {
        Some(path) => fs::write(path, output).with_context(|| {
            error!("write to {} failed", path.display());
            format!("failed to write {}", path.display())
        }),
        None => {
            print!("{}", output);
            Ok(())
        }
    }
}
