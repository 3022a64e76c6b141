use crate::app::ProvisionContext;
use crate::app::commands::apply::manifest::{APPLICATION_ANCHOR, APPLICATION_CONFIG};
use crate::domain::edits::{Injection, inject_after};
use crate::domain::templates::{GeneratedFile, render_static};
use crate::domain::AppError;
use crate::ports::Tone;

/// Default every generated model to UUID primary keys.
pub fn configure_application(ctx: &ProvisionContext<'_>) -> Result<(), AppError> {
    ctx.say(Tone::Heading, "Configuring UUID primary keys...");
    let content = ctx.read_required(APPLICATION_CONFIG)?;
    let block = render_static(GeneratedFile::ApplicationGenerators)?;

    match inject_after(&content, APPLICATION_ANCHOR, &block) {
        Injection::Applied(updated) => ctx.fs().write_file(APPLICATION_CONFIG, &updated),
        Injection::AlreadyPresent => {
            tracing::debug!("generators block already present in {}", APPLICATION_CONFIG);
            Ok(())
        }
        Injection::AnchorMissing => Err(AppError::AnchorNotFound {
            path: APPLICATION_CONFIG.to_string(),
            anchor: APPLICATION_ANCHOR.trim_end().to_string(),
        }),
    }
}
