//! Pixelsmith command line editor.
//!
//! Reads commands one line at a time and applies them to the current image.
//! Logs go to stderr; control them with `RUST_LOG` or `--log-level`.

mod args;
mod preview;
mod repl;

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};

use anyhow::Context;
use clap::Parser;
use pixelsmith_core::{CommandDispatcher, FileCodec};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::args::Args;
use crate::preview::PreviewDisplay;

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let options = args.codec_options();
    let display = match &args.preview {
        Some(path) => PreviewDisplay::with_file(path.clone(), options)
            .with_context(|| format!("invalid preview path {}", path.display()))?,
        None => PreviewDisplay::terminal(),
    };
    let mut dispatcher = CommandDispatcher::new(FileCodec::new(options), display);
    info!("=== Pixelsmith starting ===");

    if let Some(path) = &args.image {
        dispatcher
            .load(path)
            .with_context(|| format!("cannot load {}", path.display()))?;
    }

    let mut stderr = io::stderr();
    match &args.script {
        Some(script) => {
            let file = File::open(script)
                .with_context(|| format!("cannot open script {}", script.display()))?;
            repl::run::<_, _, _, io::Stdout, _>(
                &mut dispatcher,
                BufReader::new(file),
                None,
                &mut stderr,
            )?;
        }
        None => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            let prompt = stdin
                .is_terminal()
                .then_some((args.prompt.as_str(), &mut stdout));
            repl::run(&mut dispatcher, stdin.lock(), prompt, &mut stderr)?;
        }
    }

    info!(
        published = dispatcher.display().published(),
        "=== Pixelsmith exiting ==="
    );
    Ok(())
}
