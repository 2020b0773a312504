use crate::ident::deterministic_id;
use crate::models::{
    port_label, Cable, CableType, FiberKind, Media, Module, ModuleKind, PolarityType,
    PolarityVariant, Session,
};

pub(crate) mod lc;
pub(crate) mod mpo;
pub(crate) mod utp;

/// One side of a session: rack, panel position, front port.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Endpoint<'a> {
    pub rack: &'a str,
    pub u: u32,
    pub slot: u32,
    pub port: u32,
}

/// Collects modules, cables and sessions as the category allocators run.
/// Strictly call-local: each planning call owns one recorder and hands it to
/// the sub-allocators by exclusive reference.
#[derive(Debug, Default)]
pub(crate) struct PlanRecorder {
    pub modules: Vec<Module>,
    pub cables: Vec<Cable>,
    pub sessions: Vec<Session>,
}

impl PlanRecorder {
    /// Register a trunk cable; the id is derived from the canonical string.
    pub fn add_cable(
        &mut self,
        canonical: &str,
        cable_type: CableType,
        fiber_kind: Option<FiberKind>,
        polarity_type: Option<PolarityType>,
        src_rack: &str,
        dst_rack: &str,
    ) -> String {
        let cable_id = deterministic_id(canonical);
        self.cables.push(Cable {
            cable_id: cable_id.clone(),
            cable_type,
            fiber_kind,
            polarity_type,
            src_rack: src_rack.to_string(),
            dst_rack: dst_rack.to_string(),
        });
        cable_id
    }

    /// Register one dedicated module on `rack` serving `peer`.
    pub fn add_dedicated_module(
        &mut self,
        rack: &str,
        peer: &str,
        u: u32,
        slot: u32,
        module_type: ModuleKind,
        fiber_kind: Option<FiberKind>,
        polarity_variant: PolarityVariant,
    ) {
        self.modules.push(Module {
            rack_id: rack.to_string(),
            panel_u: u,
            slot,
            module_type,
            fiber_kind,
            polarity_variant: Some(polarity_variant),
            peer_rack_id: Some(peer.to_string()),
            dedicated: true,
        });
    }

    /// Synthesize the session for one allocated port pair. Caller passes the
    /// endpoints already oriented src = natural-order-smaller rack; fiber
    /// strand indices are present for LC sessions only and extend the
    /// canonical string.
    pub fn add_session(
        &mut self,
        media: Media,
        cable_id: &str,
        adapter_type: ModuleKind,
        src: Endpoint<'_>,
        dst: Endpoint<'_>,
        fibers: Option<(u32, u32)>,
    ) {
        let mut canonical = format!(
            "{}|{}|{}|{}|{}|{}|{}|{}|{}|{}",
            media.as_str(),
            src.rack,
            src.u,
            src.slot,
            src.port,
            dst.rack,
            dst.u,
            dst.slot,
            dst.port,
            cable_id,
        );
        if let Some((fiber_a, fiber_b)) = fibers {
            canonical.push_str(&format!("|{fiber_a}|{fiber_b}"));
        }
        self.sessions.push(Session {
            session_id: deterministic_id(&canonical),
            media,
            cable_id: cable_id.to_string(),
            adapter_type,
            label_a: port_label(src.rack, src.u, src.slot, src.port),
            label_b: port_label(dst.rack, dst.u, dst.slot, dst.port),
            src_rack: src.rack.to_string(),
            src_face: "front".to_string(),
            src_u: src.u,
            src_slot: src.slot,
            src_port: src.port,
            dst_rack: dst.rack.to_string(),
            dst_face: "front".to_string(),
            dst_u: dst.u,
            dst_slot: dst.slot,
            dst_port: dst.port,
            fiber_a: fibers.map(|f| f.0),
            fiber_b: fibers.map(|f| f.1),
            notes: None,
        });
    }
}
