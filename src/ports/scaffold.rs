use crate::domain::{AppError, GemDeclaration};

/// The base application generator's dependency phase.
///
/// `declare_dependencies` records gems; `complete_install` is the one-shot
/// install boundary after which provisioning steps may run.
pub trait Scaffold {
    fn declare_dependencies(&self, declarations: &[GemDeclaration]) -> Result<(), AppError>;

    fn complete_install(&self) -> Result<(), AppError>;
}
