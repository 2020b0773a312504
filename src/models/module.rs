use serde::{Deserialize, Serialize};

use super::{FiberKind, PolarityVariant, RackId};

/// A replaceable adapter cassette occupying exactly one slot of a panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub rack_id: RackId,
    pub panel_u: u32,
    pub slot: u32,
    pub module_type: ModuleKind,
    pub fiber_kind: Option<FiberKind>,
    pub polarity_variant: Option<PolarityVariant>,
    /// Opposite rack for dedicated modules; for UTP modules the single peer
    /// when the module ended up unshared, `None` when shared.
    pub peer_rack_id: Option<RackId>,
    pub dedicated: bool,
}

/// The closed set of module families. Port layouts are fixed per family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ModuleKind {
    /// Back ports MPO#1..2, front ports LC#1..12. MPO#1 serves LC#1..6,
    /// MPO#2 serves LC#7..12.
    #[serde(rename = "lc_breakout_2xmpo12_to_12xlcduplex")]
    LcBreakout,
    /// Back ports MPO#1..12 mapped 1:1 to front ports MPO#1..12.
    #[serde(rename = "mpo12_pass_through_12port")]
    MpoPassThrough,
    /// Front ports RJ45#1..6. The only family that may serve multiple peers.
    #[serde(rename = "utp_6xrj45")]
    Utp,
}

impl ModuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleKind::LcBreakout => "lc_breakout_2xmpo12_to_12xlcduplex",
            ModuleKind::MpoPassThrough => "mpo12_pass_through_12port",
            ModuleKind::Utp => "utp_6xrj45",
        }
    }

    pub fn front_ports(&self) -> u32 {
        match self {
            ModuleKind::LcBreakout => 12,
            ModuleKind::MpoPassThrough => 12,
            ModuleKind::Utp => 6,
        }
    }
}
