use serde::{Deserialize, Serialize};

use super::{DemandId, RackId};
use crate::PlanError;

/// Validated planner input: the racks of the room and the aggregated
/// inter-rack connectivity demands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub racks: Vec<Rack>,
    #[serde(default)]
    pub demands: Vec<Demand>,
}

impl Project {
    /// Parse a project document from JSON. Unknown media tokens and missing
    /// required fields surface as `PlanError::Parse`.
    pub fn from_json(document: &str) -> Result<Self, PlanError> {
        Ok(serde_json::from_str(document)?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rack {
    pub id: RackId,
}

/// One aggregated connectivity demand between two racks. Demands are
/// symmetric physical connectivity; direction only matters for readability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Demand {
    pub id: DemandId,
    pub src: RackId,
    pub dst: RackId,
    pub endpoint_type: Media,
    pub count: u32,
}

/// The four supported termination media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Media {
    MmfLcDuplex,
    SmfLcDuplex,
    Mpo12,
    UtpRj45,
}

impl Media {
    pub fn as_str(&self) -> &'static str {
        match self {
            Media::MmfLcDuplex => "mmf_lc_duplex",
            Media::SmfLcDuplex => "smf_lc_duplex",
            Media::Mpo12 => "mpo12",
            Media::UtpRj45 => "utp_rj45",
        }
    }
}

impl std::fmt::Display for Media {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
