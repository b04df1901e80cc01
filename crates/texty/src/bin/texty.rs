//! texty - rewrite clipboard HTML as rich-text operations

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use texty::{
    to_json_pretty, GenericAdapter, GoogleDocsAdapter, Result, TextyError, TextyService,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Adapter {
    /// Plain HTML
    Generic,
    /// HTML copied from Google Docs
    GoogleDocs,
}

#[derive(Parser)]
#[command(name = "texty")]
#[command(version, about = "Convert clipboard HTML to rich-text operations", long_about = None)]
#[command(after_help = "EXAMPLES:
    texty page.html                      Print the rich-text payload
    pbpaste | texty --adapter google-docs Convert HTML from stdin
    texty --plain page.html              Print the plain-text fallback")]
struct Cli {
    /// Input HTML file; stdin when omitted
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Site the HTML was copied from
    #[arg(short, long, value_enum, default_value = "generic")]
    adapter: Adapter,

    /// Print the plain-text fallback instead
    #[arg(short, long)]
    plain: bool,

    /// Indent JSON output
    #[arg(long)]
    pretty: bool,

    /// Convert even when the HTML has no list items
    #[arg(short, long)]
    force: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let html = read_input(cli.input.as_deref())?;

    let mut service = match cli.adapter {
        Adapter::Generic => TextyService::with_adapter(GenericAdapter),
        Adapter::GoogleDocs => TextyService::with_adapter(GoogleDocsAdapter),
    };
    if cli.force {
        service = service.with_prefilter(|_| true);
    }

    let Some(payload) = service.rewrite(&html) else {
        info!("nothing to convert; clipboard would be left unchanged");
        return Ok(());
    };

    if cli.plain {
        print!("{}", payload.plain_text);
    } else if cli.pretty {
        println!("{}", to_json_pretty(&payload.delta)?);
    } else {
        println!("{}", payload.to_json()?);
    }
    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| TextyError::InvalidInput(format!("{path}: {e}"))),
        None => {
            let mut html = String::new();
            io::stdin()
                .read_to_string(&mut html)
                .map_err(|e| TextyError::InvalidInput(format!("stdin: {e}")))?;
            Ok(html)
        }
    }
}
