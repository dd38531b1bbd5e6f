//! Extract → Transform → Load orchestration.
//!
//! Each stage only starts when the previous one produced a complete result:
//! all four raw sources non-empty before Transform, all five mart tables
//! non-empty before Load. A failed gate ends the run in
//! [`RunOutcome::Aborted`] without touching later stages, so an aborted run
//! never writes to the destination.

use std::fmt;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{error, info, info_span};

use mart_ingest::{ExtractionError, SourceExtractor};
use mart_load::{LoadError, LoadReport, MartSink};
use mart_model::{MartTableKind, MartTables, RawSources, SourceKind};
use mart_transform::{ResolutionStats, TransformError, transform};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Extract,
    Transform,
    Load,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Extract => "extract",
            Stage::Transform => "transform",
            Stage::Load => "load",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a run stopped before completing.
#[derive(Debug, Error)]
pub enum AbortReason {
    #[error("extraction failed: {0}")]
    ExtractionFailed(#[source] ExtractionError),

    #[error("extraction incomplete, empty sources: {}", join(.empty))]
    IncompleteExtraction { empty: Vec<SourceKind> },

    #[error("transform failed: {0}")]
    TransformFailed(#[source] TransformError),

    #[error("transform incomplete, tables not produced: {}", join(.missing))]
    IncompleteTransform { missing: Vec<MartTableKind> },

    #[error("load failed: {0}")]
    LoadFailed(#[source] LoadError),
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Stop after Transform without calling the sink.
    pub dry_run: bool,
}

/// Wall time spent in each stage that ran.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageTimings {
    pub extract: Duration,
    pub transform: Duration,
    pub load: Option<Duration>,
}

/// Everything a completed run produced.
#[derive(Debug)]
pub struct RunReport {
    /// Record count per raw source, in extraction order.
    pub extracted: Vec<(SourceKind, usize)>,
    pub tables: MartTables,
    pub stats: ResolutionStats,
    /// `None` for dry runs.
    pub load: Option<LoadReport>,
    pub timings: StageTimings,
}

impl RunReport {
    pub fn is_dry_run(&self) -> bool {
        self.load.is_none()
    }
}

#[derive(Debug)]
pub enum RunOutcome {
    Completed(RunReport),
    Aborted { stage: Stage, reason: AbortReason },
}

impl RunOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, RunOutcome::Completed(_))
    }

    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        if self.is_completed() { 0 } else { 1 }
    }

    pub fn report(&self) -> Option<&RunReport> {
        match self {
            RunOutcome::Completed(report) => Some(report),
            RunOutcome::Aborted { .. } => None,
        }
    }
}

/// Gate between Extract and Transform.
pub fn check_sources(sources: &RawSources) -> Result<(), AbortReason> {
    let empty = sources.empty_sources();
    if empty.is_empty() {
        Ok(())
    } else {
        Err(AbortReason::IncompleteExtraction { empty })
    }
}

/// Gate between Transform and Load.
pub fn check_tables(tables: &MartTables) -> Result<(), AbortReason> {
    let missing = tables.missing_tables();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AbortReason::IncompleteTransform { missing })
    }
}

fn aborted(stage: Stage, reason: AbortReason) -> RunOutcome {
    error!(stage = %stage, reason = %reason, "pipeline aborted");
    RunOutcome::Aborted { stage, reason }
}

/// Run one full pipeline pass.
pub fn run_pipeline<E, S>(extractor: &E, sink: &mut S, options: PipelineOptions) -> RunOutcome
where
    E: SourceExtractor + ?Sized,
    S: MartSink + ?Sized,
{
    let mut timings = StageTimings::default();

    let sources = {
        let span = info_span!("extract");
        let _guard = span.enter();
        let start = Instant::now();
        let sources = match extractor.extract() {
            Ok(sources) => sources,
            Err(error) => return aborted(Stage::Extract, AbortReason::ExtractionFailed(error)),
        };
        timings.extract = start.elapsed();
        if let Err(reason) = check_sources(&sources) {
            return aborted(Stage::Extract, reason);
        }
        info!(duration_ms = timings.extract.as_millis(), "stage finished");
        sources
    };
    let extracted = SourceKind::ALL
        .iter()
        .map(|kind| (*kind, sources.record_count(*kind)))
        .collect();

    let output = {
        let span = info_span!("transform");
        let _guard = span.enter();
        let start = Instant::now();
        let output = match transform(&sources) {
            Ok(output) => output,
            Err(error) => return aborted(Stage::Transform, AbortReason::TransformFailed(error)),
        };
        timings.transform = start.elapsed();
        if let Err(reason) = check_tables(&output.tables) {
            return aborted(Stage::Transform, reason);
        }
        info!(duration_ms = timings.transform.as_millis(), "stage finished");
        output
    };

    let load = if options.dry_run {
        info!("dry run, load skipped");
        None
    } else {
        let span = info_span!("load");
        let _guard = span.enter();
        let start = Instant::now();
        let report = match sink.load(&output.tables) {
            Ok(report) => report,
            Err(error) => return aborted(Stage::Load, AbortReason::LoadFailed(error)),
        };
        let elapsed = start.elapsed();
        timings.load = Some(elapsed);
        info!(duration_ms = elapsed.as_millis(), "stage finished");
        Some(report)
    };

    RunOutcome::Completed(RunReport {
        extracted,
        tables: output.tables,
        stats: output.stats,
        load,
        timings,
    })
}

#[cfg(test)]
mod tests {
    use mart_model::{CustomerDim, EmployeeDim};

    use super::*;

    #[test]
    fn transform_gate_names_missing_tables() {
        let tables = MartTables {
            customers: vec![CustomerDim::unknown()],
            employees: vec![EmployeeDim::unknown()],
            ..MartTables::default()
        };

        let reason = check_tables(&tables).unwrap_err();

        assert_eq!(
            reason.to_string(),
            "transform incomplete, tables not produced: DimTable, DimDate, FactReservations"
        );
    }

    #[test]
    fn exit_codes() {
        let outcome = RunOutcome::Aborted {
            stage: Stage::Extract,
            reason: AbortReason::IncompleteExtraction {
                empty: vec![SourceKind::Customers],
            },
        };
        assert_eq!(outcome.exit_code(), 1);
        assert!(outcome.report().is_none());
    }
}
