//! The report pipeline: resolve one graph, then write its tables.

use std::io;
use std::process::ExitCode;

use crate::constants::SELECTED_PREFIX;
use crate::domain::Configuration;
use crate::ports::{InteractionPort, OutputSink};
use crate::render::render_graph;
use crate::resolver::{lookup, select_graph_name};

// ============================================================================
// ReportStatus
// ============================================================================

/// Outcome of a report run, mapped to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStatus {
    /// Every table was written.
    Success,
    /// Resolution failed and an error line was written instead.
    Failure,
}

impl ReportStatus {
    /// Numeric exit code: `0` on success, `1` on failure.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
        }
    }
}

impl From<ReportStatus> for ExitCode {
    fn from(status: ReportStatus) -> Self {
        ExitCode::from(status.code())
    }
}

// ============================================================================
// Report
// ============================================================================

/// Resolves a graph and writes its report to `output`.
///
/// When the graph is chosen interactively the choice is echoed before it is
/// looked up. Resolution failures write a single error line and no tables.
///
/// # Arguments
///
/// * `config` - Every configured graph
/// * `requested` - Graph name from the command line, if any
/// * `interact` - Asked only when `requested` is `None`
/// * `output` - Receives messages and tables
///
/// # Errors
///
/// Returns an error if the prompt or the output sink fails.
///
/// # Returns
///
/// [`ReportStatus::Failure`] when no graph could be resolved, otherwise
/// [`ReportStatus::Success`].
pub fn report(
    config: &Configuration,
    requested: Option<&str>,
    interact: &mut dyn InteractionPort,
    output: &mut dyn OutputSink,
) -> io::Result<ReportStatus> {
    let resolved = match select_graph_name(config, requested, interact) {
        Ok(selection) => {
            if selection.chosen {
                output.info(&format!("{SELECTED_PREFIX}{}", selection.name))?;
            }
            lookup(config, &selection.name)
        }
        Err(err) => Err(err),
    };

    let resolved = match resolved {
        Ok(resolved) => resolved,
        Err(err) if err.is_user_facing() => {
            tracing::debug!("Graph resolution failed: {err:?}");
            output.error(&err.to_string())?;
            return Ok(ReportStatus::Failure);
        }
        Err(err) => return Err(err.into_io_error()),
    };

    let tables = render_graph(resolved.definition);
    tracing::debug!(
        "Rendering graph '{}' as {} table(s)",
        resolved.name,
        tables.len()
    );
    for table in &tables {
        output.table(table)?;
    }

    Ok(ReportStatus::Success)
}

// ============================================================================
// Tests
// ============================================================================
