//! Run driver - reads inputs line by line and feeds the router
//!
//! A run is all-or-nothing: the first error stops processing, every
//! destination created so far is removed, and only then is the error
//! handed back.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use classifier::LineClassifier;
use contracts::{ContractError, Delimiter, DestinationName, LineClass, RunConfig, SinkFactory};
use observability::{record_run_outcome, RunOutcome};
use tracing::{debug, info, instrument, warn};

use crate::metrics::RouterMetrics;
use crate::router::Router;
use crate::sinks::FileSinkFactory;

/// Summary of a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Input files fully consumed
    pub inputs: Vec<PathBuf>,
    /// Lines read across all inputs, directives included
    pub lines_read: u64,
    /// Destinations written, in creation order
    pub destinations: Vec<DestinationName>,
    /// Router counters
    pub router: RouterMetrics,
}

/// One run: a classifier, a router, and the bookkeeping between them.
///
/// The active targets carry over from one input to the next, so a later
/// input can continue writing where an earlier one left off.
pub struct Splitter<F: SinkFactory> {
    classifier: LineClassifier,
    router: Router<F>,
    inputs: Vec<PathBuf>,
    lines_read: u64,
}

impl<F: SinkFactory> Splitter<F> {
    pub fn new(delimiter: Delimiter, factory: F) -> Self {
        Self {
            classifier: LineClassifier::new(delimiter),
            router: Router::new(factory),
            inputs: Vec::new(),
            lines_read: 0,
        }
    }

    /// Open `path` and process all of it.
    ///
    /// The input handle is dropped when this returns, whichever way.
    #[instrument(name = "splitter_process_path", skip(self, path), fields(input = %path.display()))]
    pub fn process_path(&mut self, path: &Path) -> Result<(), ContractError> {
        let file = File::open(path).map_err(|source| ContractError::input_open(path, source))?;
        info!("Processing input");
        self.process_reader(path, BufReader::new(file))
    }

    /// Process every line of `reader`; `path` only labels errors and logs.
    pub fn process_reader<R: BufRead>(
        &mut self,
        path: &Path,
        mut reader: R,
    ) -> Result<(), ContractError> {
        let mut line = Vec::new();
        let mut line_no = 0u64;
        loop {
            line.clear();
            let read = reader
                .read_until(b'\n', &mut line)
                .map_err(|source| ContractError::read(path, line_no + 1, source))?;
            if read == 0 {
                break;
            }
            line_no += 1;
            self.lines_read += 1;
            self.process_line(path, line_no, &line)?;
        }

        debug!(input = %path.display(), lines = line_no, "Input consumed");
        self.inputs.push(path.to_path_buf());
        Ok(())
    }

    fn process_line(
        &mut self,
        path: &Path,
        line_no: u64,
        line: &[u8],
    ) -> Result<(), ContractError> {
        let text = String::from_utf8_lossy(line);
        let class = self
            .classifier
            .classify(&text)
            .map_err(|source| ContractError::directive(path, line_no, source))?;

        match class {
            LineClass::Directive(names) => {
                debug!(line = line_no, targets = ?names, "Switching targets");
                self.router
                    .ensure_open(&names)
                    .map_err(|err| err.at(path, line_no))
            }
            LineClass::Payload => self
                .router
                .route(line)
                .map_err(|err| err.at(path, line_no)),
        }
    }

    /// Finish a run whose inputs were all consumed, keeping the outputs.
    ///
    /// A destination that fails to close fails the run after all, and every
    /// output is removed before the error is returned.
    pub fn finish(self) -> Result<RunReport, ContractError> {
        let destinations: Vec<DestinationName> =
            self.router.destination_names().cloned().collect();

        let router = self.router.finalize(true).inspect_err(|_| {
            record_run_outcome(RunOutcome::Failure);
        })?;
        record_run_outcome(RunOutcome::Success);

        Ok(RunReport {
            inputs: self.inputs,
            lines_read: self.lines_read,
            destinations,
            router,
        })
    }

    /// Abandon the run: every destination created so far is removed.
    pub fn abort(self) {
        let metrics = self.router.discard();
        record_run_outcome(RunOutcome::Failure);
        debug!(
            lines_read = self.lines_read,
            lines_routed = metrics.lines_routed,
            "Run aborted"
        );
    }
}

/// Split `inputs` in order through `factory`.
///
/// On the first error every destination created by this run is removed
/// before the error is returned.
pub fn split<F, P>(
    delimiter: &Delimiter,
    inputs: &[P],
    factory: F,
) -> Result<RunReport, ContractError>
where
    F: SinkFactory,
    P: AsRef<Path>,
{
    let mut splitter = Splitter::new(delimiter.clone(), factory);

    let outcome = inputs
        .iter()
        .try_for_each(|input| splitter.process_path(input.as_ref()));

    match outcome {
        Ok(()) => {
            let report = splitter.finish()?;
            info!(
                inputs = report.inputs.len(),
                lines = report.lines_read,
                destinations = report.destinations.len(),
                "Run complete"
            );
            Ok(report)
        }
        Err(err) => {
            warn!(error = %err, kind = ?err.kind(), "Run failed");
            splitter.abort();
            Err(err)
        }
    }
}

/// Split `inputs` into files on disk using `config`
pub fn split_files<P: AsRef<Path>>(
    config: &RunConfig,
    inputs: &[P],
) -> Result<RunReport, ContractError> {
    split(
        &config.delimiter,
        inputs,
        FileSinkFactory::new(config.output_buffer_bytes),
    )
}
