use clap::Parser;
use log::LevelFilter;
use shotscale::{Catalog, Cli, InteractiveSession, Method, ResizeEngine, ResizeOptions};
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    log::debug!("Args are {:?}", cli);

    let method = match cli.method.as_deref() {
        None => Method::DEFAULT,
        Some(name) => Method::from_name(name).unwrap_or_else(|| {
            log::warn!("Method is not available, using \"area\" as default");
            Method::DEFAULT
        }),
    };

    let options = ResizeOptions {
        target_width: cli.width,
        compare: cli.compare,
        method,
    };
    options.validate()?;

    let directory = cli.dir.unwrap_or_else(shotscale::default_scan_dir);

    let catalog = Catalog::scan(&directory, cli.filter.as_deref())?;
    let engine = ResizeEngine::new(options)?;

    let stdin = io::stdin();
    let mut session = InteractiveSession::new(catalog, engine, stdin.lock(), io::stdout());
    session.run()?;

    Ok(())
}
