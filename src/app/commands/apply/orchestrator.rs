//! Provisioning Orchestrator.

use crate::app::ProvisionContext;
use crate::domain::dependencies::declarations_for;
use crate::domain::provisioning::plan;
use crate::domain::{AppError, SelectionMap, Step};
use crate::ports::Scaffold;

use super::steps;
use super::summary;

/// Declare gems, cross the install boundary, run the plan, then report.
///
/// Returns the steps that ran. The first failing step aborts the run.
pub fn provision(
    selection: &SelectionMap,
    scaffold: &dyn Scaffold,
    ctx: &ProvisionContext<'_>,
) -> Result<Vec<Step>, AppError> {
    let declarations = declarations_for(selection);
    tracing::debug!(count = declarations.len(), "declaring gems");
    scaffold.declare_dependencies(&declarations)?;
    scaffold.complete_install()?;

    let planned = plan(selection);
    tracing::debug!(
        steps = ?planned.iter().map(|s| s.name()).collect::<Vec<_>>(),
        "provisioning plan"
    );

    for step in &planned {
        tracing::debug!(step = step.name(), "running step");
        steps::perform(*step, ctx).map_err(|err| err.in_step(step.name()))?;
    }

    summary::report(ctx.console(), selection);
    Ok(planned)
}
