use serde::{Deserialize, Serialize};

use super::RackId;

/// Module bays per 1U panel.
pub const SLOTS_PER_U: u32 = 4;

/// One 1U patch panel. Panels are created lazily as slots fill up and are
/// numbered 1, 2, 3, ... per rack with no gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    pub rack_id: RackId,
    pub u: u32,
    pub slots_per_u: u32,
}
