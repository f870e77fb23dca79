use anyhow::{Context, Result, bail};
use std::{
    env,
    io::{self, Read, Write},
    process,
};
use wikiweave_config::Config;
use wikiweave_engine::Parser;

const USAGE: &str = "\
Usage: wikiweave < page.txt > page.html

Converts DokuWiki-style markup on stdin to HTML on stdout.

Configuration comes from WIKIWEAVE_* environment variables and an optional
TOML file named by WIKIWEAVE_CONFIG. Set RUST_LOG=debug for parser tracing.
";

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [] => {}
        [flag] if flag == "-h" || flag == "--help" => {
            print!("{USAGE}");
            return;
        }
        _ => {
            eprint!("{USAGE}");
            process::exit(1);
        }
    }

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::from_env().context("failed to load configuration")?;

    let mut markup = String::new();
    io::stdin()
        .read_to_string(&mut markup)
        .context("failed to read stdin")?;
    if markup.trim().is_empty() {
        bail!("no input on stdin");
    }

    let parser = Parser::new(config.into_parser_config());
    let rendered = parser.parse_with_diagnostics(&markup);
    log::debug!(
        "rendered {} headings and {} footnotes",
        rendered.heading_count,
        rendered.footnote_count
    );
    for diagnostic in &rendered.diagnostics {
        log::warn!("{diagnostic}");
    }

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.html.as_bytes())
        .context("failed to write stdout")?;
    stdout.flush()?;
    Ok(())
}
