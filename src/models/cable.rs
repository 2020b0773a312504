use serde::{Deserialize, Serialize};

use super::RackId;

/// Inter-rack trunk cable. `cable_id` is a 32-hex deterministic identifier
/// derived from the cable's canonical string, suitable for labeling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cable {
    pub cable_id: String,
    pub cable_type: CableType,
    pub fiber_kind: Option<FiberKind>,
    pub polarity_type: Option<PolarityType>,
    pub src_rack: RackId,
    pub dst_rack: RackId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CableType {
    Mpo12Trunk,
    UtpCable,
}

impl CableType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CableType::Mpo12Trunk => "mpo12_trunk",
            CableType::UtpCable => "utp_cable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FiberKind {
    Mmf,
    Smf,
}

impl FiberKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FiberKind::Mmf => "mmf",
            FiberKind::Smf => "smf",
        }
    }
}

/// Trunk wiring convention that determines end-to-end signal alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolarityType {
    A,
    B,
}

impl PolarityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolarityType::A => "A",
            PolarityType::B => "B",
        }
    }
}

/// Module-side polarity variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolarityVariant {
    A,
    #[serde(rename = "AF")]
    Af,
}

impl PolarityVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolarityVariant::A => "A",
            PolarityVariant::Af => "AF",
        }
    }
}
