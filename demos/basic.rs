use anyhow::Context;
use dash_args::{ArgParser, OptionDef};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn usage(parser: &ArgParser) -> String {
    format!("Usage: basic [OPTIONS] <INPUT> [-- ARGS...]\n\n{parser}")
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut parser = ArgParser::new([
        OptionDef::new("help", "Show this message"),
        OptionDef::new("verbose", "Be loud"),
        OptionDef::new("output", "Where to write").takes_value(),
        OptionDef::new("jobs", "How many workers to run").takes_value(),
    ]);

    if let Err(e) = parser.parse_env() {
        eprintln!("error: {e}\n\n{}", usage(&parser));
        std::process::exit(2);
    }

    if parser.get("help").value::<bool>()? {
        print!("{}", usage(&parser));
        return Ok(());
    }

    let input: PathBuf = parser.positional(0).value().context("no input given")?;
    let output = parser.get("output").value_or(PathBuf::from("out.txt"))?;
    let jobs = parser.get("jobs").value_or(1u32)?;

    println!("executable: {}", parser.executable_path().display());
    println!("input:      {}", input.display());
    println!("output:     {}", output.display());
    println!("jobs:       {jobs}");
    println!("verbose:    {}", parser.get("verbose").value::<bool>()?);
    println!("passed on:  {:?}", parser.remaining_arguments());

    Ok(())
}
