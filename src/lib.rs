// Patchplan - deterministic physical-termination planner
// Turns rack-to-rack connectivity demands into panels, modules, trunks and sessions.

pub mod models;
pub mod ordering;
pub mod ident;
pub mod validate;
pub mod demand;
pub mod slots;
pub mod planner;
pub mod report;

mod alloc;

pub use models::{
    AllocationResult, Cable, CableType, Demand, FiberKind, Media, Module, ModuleKind, Panel,
    PolarityType, PolarityVariant, Project, Rack, Session,
};
pub use ordering::{natural_cmp, natural_key};
pub use ident::deterministic_id;
pub use planner::allocate_project;

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("invalid project document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate rack id '{0}'")]
    DuplicateRackId(String),

    #[error("demand '{demand}' references unknown rack '{rack}'")]
    UnknownRack { demand: String, rack: String },

    #[error("demand '{0}' connects a rack to itself")]
    SelfLoop(String),

    #[error("demand '{0}' must have a positive count")]
    NonPositiveCount(String),
}
