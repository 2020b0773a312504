use super::{Endpoint, PlanRecorder};
use crate::demand::PairDemand;
use crate::models::{CableType, FiberKind, Media, ModuleKind, PolarityType, PolarityVariant};
use crate::slots::SlotLedger;

/// LC front ports served per back-side MPO connector.
const LC_PER_MPO: u32 = 6;

/// LC breakout allocation for one fiber kind. Invoked once for MMF and once
/// for SMF, in that order. Every module pair owns both back-side MPO-12
/// trunks - the cassette has both connectors populated - so a pair always
/// accounts for exactly two polarity-A trunks.
pub(crate) fn allocate(
    fiber_kind: FiberKind,
    pairs: &[PairDemand],
    ledger: &mut SlotLedger,
    rec: &mut PlanRecorder,
) {
    let media = match fiber_kind {
        FiberKind::Mmf => Media::MmfLcDuplex,
        FiberKind::Smf => Media::SmfLcDuplex,
    };

    for pair in pairs {
        let count = pair.counts.of(media);
        if count == 0 {
            continue;
        }
        let module_pairs = count.div_ceil(ModuleKind::LcBreakout.front_ports());
        let mut remaining = count;
        for module_index in 1..=module_pairs {
            let (src_u, src_slot) = ledger.reserve(&pair.lo);
            let (dst_u, dst_slot) = ledger.reserve(&pair.hi);
            rec.add_dedicated_module(
                &pair.lo,
                &pair.hi,
                src_u,
                src_slot,
                ModuleKind::LcBreakout,
                Some(fiber_kind),
                PolarityVariant::Af,
            );
            rec.add_dedicated_module(
                &pair.hi,
                &pair.lo,
                dst_u,
                dst_slot,
                ModuleKind::LcBreakout,
                Some(fiber_kind),
                PolarityVariant::Af,
            );

            let trunk_ids: Vec<String> = (1..=2u32)
                .map(|mpo_port| {
                    let canonical = format!(
                        "{}|{}|A|{}|{}|{}|{}",
                        media.as_str(),
                        fiber_kind.as_str(),
                        pair.lo,
                        pair.hi,
                        module_index,
                        mpo_port,
                    );
                    rec.add_cable(
                        &canonical,
                        CableType::Mpo12Trunk,
                        Some(fiber_kind),
                        Some(PolarityType::A),
                        &pair.lo,
                        &pair.hi,
                    )
                })
                .collect();

            let ports = remaining.min(ModuleKind::LcBreakout.front_ports());
            for port in 1..=ports {
                // MPO#1 serves LC#1..6, MPO#2 serves LC#7..12; front port
                // LC#(6(j-1)+q) rides fiber strands (2q-1, 2q).
                let (mpo_port, q) = if port <= LC_PER_MPO {
                    (1u32, port)
                } else {
                    (2u32, port - LC_PER_MPO)
                };
                rec.add_session(
                    media,
                    &trunk_ids[(mpo_port - 1) as usize],
                    ModuleKind::LcBreakout,
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
                    Some((2 * q - 1, 2 * q)),
                );
            }
            remaining -= ports;
        }
    }
}
