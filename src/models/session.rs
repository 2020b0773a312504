use serde::{Deserialize, Serialize};

use super::{Media, ModuleKind, RackId};

/// One logical endpoint-to-endpoint connection, wired through a trunk cable.
/// `src` is always the natural-order-smaller rack, so session identifiers are
/// stable under swapped demand direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    pub media: Media,
    pub cable_id: String,
    pub adapter_type: ModuleKind,
    pub label_a: String,
    pub label_b: String,
    pub src_rack: RackId,
    pub src_face: String,
    pub src_u: u32,
    pub src_slot: u32,
    pub src_port: u32,
    pub dst_rack: RackId,
    pub dst_face: String,
    pub dst_u: u32,
    pub dst_slot: u32,
    pub dst_port: u32,
    pub fiber_a: Option<u32>,
    pub fiber_b: Option<u32>,
    pub notes: Option<String>,
}

/// Termination label printed on both ends: `{rack}U{u}S{slot}P{port}`.
pub(crate) fn port_label(rack: &str, u: u32, slot: u32, port: u32) -> String {
    format!("{rack}U{u}S{slot}P{port}")
}
