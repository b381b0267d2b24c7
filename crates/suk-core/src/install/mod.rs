//! Component installation
//!
//! - `paths`: manifest entry -> target path (pure)
//! - `materialize`: conflict-aware file writes
//! - `pipeline`: the batch installer and its per-component outcomes
//! - `plan`: dry-run description of a batch
//! - `remove`: deleting installed files through the same path mapping

pub mod materialize;
pub mod paths;
pub mod pipeline;
pub mod plan;
pub mod remove;

pub use materialize::materialize;
pub use paths::map_target;
pub use pipeline::{BatchResult, ComponentOutcome, ComponentReport, FileFailure, Installer};
pub use plan::{ComponentPlan, PlannedComponent, PlannedFile};
pub use remove::{RemoveOutcome, RemoveReport};
