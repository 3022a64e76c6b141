pub mod app_name;
pub mod dependencies;
pub mod edits;
pub mod environment;
pub mod error;
pub mod feature;
pub mod provisioning;
pub mod selection;
pub mod templates;

pub use app_name::AppName;
pub use dependencies::GemDeclaration;
pub use environment::Environment;
pub use error::AppError;
pub use feature::{CATALOG, Feature, FeatureGroup};
pub use provisioning::{Gate, Step};
pub use selection::SelectionMap;
