use serde::{Deserialize, Serialize};

use super::{Cable, Module, Panel, Session};

/// The complete physical plan. Lists carry a total deterministic order:
/// panels and modules by (rack natural order, u, slot), cables by `cable_id`,
/// sessions by `session_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub panels: Vec<Panel>,
    pub modules: Vec<Module>,
    pub cables: Vec<Cable>,
    pub sessions: Vec<Session>,
}

impl AllocationResult {
    /// Modules of one rack in placement order.
    pub fn modules_in_rack<'a>(&'a self, rack_id: &'a str) -> impl Iterator<Item = &'a Module> {
        self.modules.iter().filter(move |m| m.rack_id == rack_id)
    }

    pub fn cable(&self, cable_id: &str) -> Option<&Cable> {
        self.cables.iter().find(|c| c.cable_id == cable_id)
    }
}
