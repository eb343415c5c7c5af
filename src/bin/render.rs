use clap::{error::ErrorKind, Parser};
use std::fs::File;
use std::io::stdout;
use std::process::exit;
use log::info;

use grammar_render::{
    backends::{self, Renderer},
    grammar::Grammar,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Write into this file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Name of the renderer, e.g. "ebnf"
    renderer: String,

    /// Grammar files in JSON format. Multiple files are merged.
    #[arg(required = true, value_name = "GRAMMAR")]
    grammars: Vec<String>,
}

fn fail<E: std::fmt::Display>(err: E) -> ! {
    eprintln!("{}", err);
    exit(1);
}

fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                let _ = err.print();
                exit(1);
            },
        },
    }
}

fn find_renderer(name: &str) -> &'static dyn Renderer {
    if let Some(renderer) = backends::renderer(name) {
        return renderer;
    }

    eprintln!("Unknown renderer: {}", name);
    eprintln!("Available renderers:");

    for renderer in backends::renderers() {
        eprintln!("  {:<8} {}", renderer.name(), renderer.description());
    }

    exit(1);
}

fn main() {
    pretty_env_logger::init();

    let args = parse_args();
    let renderer = find_renderer(&args.renderer);

    let mut builder = Grammar::builder();

    for path in &args.grammars {
        builder = builder.json_grammar(path).unwrap_or_else(|e| fail(e));
    }

    let grammar = builder.build().unwrap_or_else(|e| fail(e));
    info!("Rendering {} productions with '{}'", grammar.len(), renderer.name());

    let result = match &args.output {
        Some(path) => {
            let mut file = File::create(path).unwrap_or_else(|e| fail(format!("Could not create {}: {}", path, e)));
            renderer.render(&grammar, &mut file)
        },
        None => renderer.render(&grammar, &mut stdout().lock()),
    };

    if let Err(e) = result {
        fail(e);
    }
}
