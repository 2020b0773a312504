// Type aliases used across models
pub type RackId = String;
pub type DemandId = String;

// Module declarations
mod project;
mod panel;
mod module;
mod cable;
mod session;
mod result;

// Re-exports
pub use project::{Demand, Media, Project, Rack};
pub use panel::{Panel, SLOTS_PER_U};
pub use module::{Module, ModuleKind};
pub use cable::{Cable, CableType, FiberKind, PolarityType, PolarityVariant};
pub use session::Session;
pub(crate) use session::port_label;
pub use result::AllocationResult;
