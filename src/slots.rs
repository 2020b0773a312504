use std::collections::HashMap;

use crate::models::{RackId, SLOTS_PER_U};

/// Next free (u, slot) position in one rack. Fills top-down: slots 1..4
/// within a U, then the next U. Panels carry no category tagging; category
/// order falls out of the order in which the allocators reserve slots.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlotCursor {
    index: u32,
}

impl SlotCursor {
    pub fn reserve(&mut self) -> (u32, u32) {
        let u = self.index / SLOTS_PER_U + 1;
        let slot = self.index % SLOTS_PER_U + 1;
        self.index += 1;
        debug_assert!((1..=SLOTS_PER_U).contains(&slot));
        (u, slot)
    }

    /// Highest U touched so far; 0 when nothing was reserved.
    pub fn highest_u(&self) -> u32 {
        (self.index + SLOTS_PER_U - 1) / SLOTS_PER_U
    }
}

/// Call-local slot ledger for all racks of one allocation run.
#[derive(Debug, Default)]
pub struct SlotLedger {
    cursors: HashMap<RackId, SlotCursor>,
}

impl SlotLedger {
    pub fn reserve(&mut self, rack_id: &str) -> (u32, u32) {
        self.cursors
            .entry(rack_id.to_string())
            .or_default()
            .reserve()
    }

    pub fn highest_u(&self, rack_id: &str) -> u32 {
        self.cursors.get(rack_id).map_or(0, SlotCursor::highest_u)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_slots_then_opens_next_u() {
        let mut cursor = SlotCursor::default();
        let positions: Vec<(u32, u32)> = (0..6).map(|_| cursor.reserve()).collect();
        assert_eq!(
            positions,
            vec![(1, 1), (1, 2), (1, 3), (1, 4), (2, 1), (2, 2)]
        );
        assert_eq!(cursor.highest_u(), 2);
    }

    #[test]
    fn ledger_tracks_racks_independently() {
        let mut ledger = SlotLedger::default();
        assert_eq!(ledger.reserve("R01"), (1, 1));
        assert_eq!(ledger.reserve("R02"), (1, 1));
        assert_eq!(ledger.reserve("R01"), (1, 2));
        assert_eq!(ledger.highest_u("R01"), 1);
        assert_eq!(ledger.highest_u("R03"), 0);
    }
}
