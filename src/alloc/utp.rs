use std::collections::HashMap;

use super::{Endpoint, PlanRecorder};
use crate::demand::PairDemand;
use crate::models::{CableType, Media, Module, ModuleKind, RackId};
use crate::ordering::natural_cmp;
use crate::slots::SlotLedger;

/// Ports one rack assigned toward one peer, in intra-peer sequence order.
type PortMap = HashMap<(RackId, RackId), Vec<(u32, u32, u32)>>;

/// A 6-port module under construction, plus the peers that landed in it.
#[derive(Debug)]
struct ModuleFill {
    u: u32,
    slot: u32,
    used: u32,
    peers: Vec<RackId>,
}

impl ModuleFill {
    fn take_port(&mut self) -> u32 {
        self.used += 1;
        self.used
    }
}

/// UTP allocation. Runs last. Modules are shared: each rack packs its peers'
/// RJ-45 counts into 6-port modules with strong grouping - a peer consumes
/// an open tail module first, then full modules, then leaves a new tail.
/// Both racks run the identical packer over the same natural-ordered peer
/// list, so the i-th port of a peer's contiguous range on one side faces the
/// i-th port of the mirrored range on the other.
pub(crate) fn allocate(pairs: &[PairDemand], ledger: &mut SlotLedger, rec: &mut PlanRecorder) {
    let mut peer_counts: HashMap<&str, HashMap<&str, u32>> = HashMap::new();
    for pair in pairs {
        let count = pair.counts.of(Media::UtpRj45);
        if count == 0 {
            continue;
        }
        *peer_counts
            .entry(&pair.lo)
            .or_default()
            .entry(&pair.hi)
            .or_insert(0) += count;
        *peer_counts
            .entry(&pair.hi)
            .or_default()
            .entry(&pair.lo)
            .or_insert(0) += count;
    }

    let mut rack_order: Vec<&str> = peer_counts.keys().copied().collect();
    rack_order.sort_by(|a, b| natural_cmp(a, b));

    let mut port_map: PortMap = HashMap::new();
    for rack in rack_order {
        let peers = &peer_counts[rack];
        let mut peer_order: Vec<&str> = peers.keys().copied().collect();
        peer_order.sort_by(|a, b| natural_cmp(a, b));

        let mut fills: Vec<ModuleFill> = Vec::new();
        // Index into `fills` of the module with free ports, if any.
        let mut open: Option<usize> = None;
        for peer in peer_order {
            let mut remaining = peers[peer];
            let ports = port_map
                .entry((rack.to_string(), peer.to_string()))
                .or_default();

            if let Some(index) = open {
                let fill = &mut fills[index];
                let take = remaining.min(ModuleKind::Utp.front_ports() - fill.used);
                if take > 0 {
                    fill.peers.push(peer.to_string());
                    for _ in 0..take {
                        let port = fill.take_port();
                        ports.push((fill.u, fill.slot, port));
                    }
                    remaining -= take;
                }
                if fill.used == ModuleKind::Utp.front_ports() {
                    open = None;
                }
            }

            while remaining >= ModuleKind::Utp.front_ports() {
                let (u, slot) = ledger.reserve(rack);
                for port in 1..=ModuleKind::Utp.front_ports() {
                    ports.push((u, slot, port));
                }
                fills.push(ModuleFill {
                    u,
                    slot,
                    used: ModuleKind::Utp.front_ports(),
                    peers: vec![peer.to_string()],
                });
                remaining -= ModuleKind::Utp.front_ports();
            }

            if remaining > 0 {
                let (u, slot) = ledger.reserve(rack);
                let mut fill = ModuleFill {
                    u,
                    slot,
                    used: 0,
                    peers: vec![peer.to_string()],
                };
                for _ in 0..remaining {
                    let port = fill.take_port();
                    ports.push((fill.u, fill.slot, port));
                }
                fills.push(fill);
                open = Some(fills.len() - 1);
            }
        }

        for fill in fills {
            let peer_rack_id = match fill.peers.as_slice() {
                [single] => Some(single.clone()),
                _ => None,
            };
            rec.modules.push(Module {
                rack_id: rack.to_string(),
                panel_u: fill.u,
                slot: fill.slot,
                module_type: ModuleKind::Utp,
                fiber_kind: None,
                polarity_variant: None,
                peer_rack_id,
                dedicated: false,
            });
        }
    }

    // Pair sessions by intra-peer sequence number; the mirrored port lists
    // have identical lengths by construction.
    for pair in pairs {
        let count = pair.counts.of(Media::UtpRj45);
        if count == 0 {
            continue;
        }
        let src_ports = &port_map[&(pair.lo.clone(), pair.hi.clone())];
        let dst_ports = &port_map[&(pair.hi.clone(), pair.lo.clone())];
        for index in 0..count as usize {
            let (src_u, src_slot, src_port) = src_ports[index];
            let (dst_u, dst_slot, dst_port) = dst_ports[index];
            let canonical = format!("utp_rj45|{}|{}|{}", pair.lo, pair.hi, index + 1);
            let cable_id = rec.add_cable(
                &canonical,
                CableType::UtpCable,
                None,
                None,
                &pair.lo,
                &pair.hi,
            );
            rec.add_session(
                Media::UtpRj45,
                &cable_id,
                ModuleKind::Utp,
                Endpoint {
                    rack: &pair.lo,
                    u: src_u,
                    slot: src_slot,
                    port: src_port,
                },
                Endpoint {
                    rack: &pair.hi,
                    u: dst_u,
                    slot: dst_slot,
                    port: dst_port,
                },
                None,
            );
        }
    }
}
