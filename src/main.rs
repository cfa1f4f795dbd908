use anyhow::Result;
use censo::{cli::Cli, generator::PersonaGenerator, session::Session};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let generator = match args.seed {
        Some(seed) => PersonaGenerator::with_seed(seed),
        None => PersonaGenerator::new(),
    }
    .starting_at(args.start_id);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session =
        Session::new(stdin.lock(), stdout.lock(), generator).with_stats_file(args.stats_file);

    if let Some(n) = args.generate {
        if let Err(err) = session.build_collection(n) {
            anyhow::bail!("Invalid value for --generate: {}", err);
        }
    }

    session.run()?;

    Ok(())
}
