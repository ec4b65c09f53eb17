use std::fs::File;
use std::io;
use std::path::Path;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use clap::Parser;
use folio::app::App;
use folio::cli::{Args, write_json_report};
use folio::infra::snapshot::{self, FsSnapshotFetcher};
use tracing::info;

#[tokio::main]
async fn main() -> io::Result<ExitCode> {
    let args = Args::parse();
    if let Some(log_file) = &args.log_file {
        init_tracing(log_file, args.log_level)?;
    }
    info!(location = args.location.label(), json = args.json, "starting folio");

    if args.json {
        let path = args.location.path();
        let snapshot =
            snapshot::fetch_resolved(&FsSnapshotFetcher, path.as_deref(), args.location.label());
        write_json_report(&mut io::stdout().lock(), args.location, path.as_deref(), &snapshot)?;

        return Ok(if snapshot.is_ok() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let mut app = App::new(args.location, Arc::new(FsSnapshotFetcher));
    folio::runtime::run(&mut app).await?;

    Ok(ExitCode::SUCCESS)
}

/// Sends tracing output to `path`; the TUI owns stdout, so logs never go
/// there.
fn init_tracing(path: &Path, max_level: tracing::Level) -> io::Result<()> {
    let file = File::options().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(max_level)
        .init();

    Ok(())
}
