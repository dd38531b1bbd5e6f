use anyhow::{Context, Result};
use tracing::{info, info_span};

use mart_cli::pipeline::{PipelineOptions, RunOutcome, run_pipeline};
use mart_ingest::{ConfiguredSources, DEFAULT_REQUEST_TIMEOUT, SourceConfig, seed_source_store};
use mart_load::{LoadMode, MartConfig, SqliteMart};
use mart_transform::build_mart_frames;

use crate::cli::{RunArgs, SeedArgs};
use crate::summary::print_preview;

pub fn source_config(args: &RunArgs) -> SourceConfig {
    SourceConfig {
        tables_csv: args.tables.clone(),
        reservations_json: args.reservations.clone(),
        customer_api_url: args.customer_api.clone(),
        source_db: args.source_db.clone(),
        request_timeout: DEFAULT_REQUEST_TIMEOUT,
    }
}

pub fn mart_config(args: &RunArgs) -> MartConfig {
    MartConfig {
        path: args.mart_db.clone(),
        mode: if args.non_atomic {
            LoadMode::PerTable
        } else {
            LoadMode::Atomic
        },
    }
}

pub fn run_etl(args: &RunArgs) -> Result<RunOutcome> {
    let run_span = info_span!("run", mart = %args.mart_db.display());
    let _run_guard = run_span.enter();

    let extractor = ConfiguredSources::new(source_config(args));
    let mut sink = SqliteMart::new(mart_config(args));
    let options = PipelineOptions {
        dry_run: args.dry_run,
    };
    let outcome = run_pipeline(&extractor, &mut sink, options);

    if let (Some(rows), Some(report)) = (args.preview, outcome.report()) {
        let frames = build_mart_frames(&report.tables).context("materialize preview frames")?;
        print_preview(&frames, rows);
    }
    Ok(outcome)
}

pub fn seed_source(args: &SeedArgs) -> Result<usize> {
    let inserted = seed_source_store(&args.db)
        .with_context(|| format!("seed source store {}", args.db.display()))?;
    info!(path = %args.db.display(), employees = inserted, "source store seeded");
    Ok(inserted)
}
