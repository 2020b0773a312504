use super::{Endpoint, PlanRecorder};
use crate::demand::PairDemand;
use crate::models::{CableType, Media, ModuleKind, PolarityType, PolarityVariant};
use crate::slots::SlotLedger;

/// MPO end-to-end allocation. Runs first, so pass-through modules occupy the
/// top of every rack. Each slot pair carries up to 12 trunks; the i-th module
/// on the lo side is paired with the i-th module on the hi side, and port k
/// lands on port k.
pub(crate) fn allocate(pairs: &[PairDemand], ledger: &mut SlotLedger, rec: &mut PlanRecorder) {
    for pair in pairs {
        let count = pair.counts.of(Media::Mpo12);
        if count == 0 {
            continue;
        }
        let slot_pairs = count.div_ceil(ModuleKind::MpoPassThrough.front_ports());
        let mut remaining = count;
        for pair_index in 1..=slot_pairs {
            let (src_u, src_slot) = ledger.reserve(&pair.lo);
            let (dst_u, dst_slot) = ledger.reserve(&pair.hi);
            rec.add_dedicated_module(
                &pair.lo,
                &pair.hi,
                src_u,
                src_slot,
                ModuleKind::MpoPassThrough,
                None,
                PolarityVariant::A,
            );
            rec.add_dedicated_module(
                &pair.hi,
                &pair.lo,
                dst_u,
                dst_slot,
                ModuleKind::MpoPassThrough,
                None,
                PolarityVariant::A,
            );

            let ports = remaining.min(ModuleKind::MpoPassThrough.front_ports());
            for port in 1..=ports {
                let canonical = format!(
                    "mpo12|B|{}|{}|{}|{}",
                    pair.lo, pair.hi, pair_index, port
                );
                let cable_id = rec.add_cable(
                    &canonical,
                    CableType::Mpo12Trunk,
                    None,
                    Some(PolarityType::B),
                    &pair.lo,
                    &pair.hi,
                );
                rec.add_session(
                    Media::Mpo12,
                    &cable_id,
                    ModuleKind::MpoPassThrough,
                    Endpoint {
                        rack: &pair.lo,
                        u: src_u,
                        slot: src_slot,
                        port,
                    },
                    Endpoint {
                        rack: &pair.hi,
                        u: dst_u,
                        slot: dst_slot,
                        port,
                    },
                    None,
                );
            }
            remaining -= ports;
        }
    }
}
