use crate::alloc::{self, PlanRecorder};
use crate::demand::normalize_demands;
use crate::models::{AllocationResult, FiberKind, Panel, Project, SLOTS_PER_U};
use crate::ordering::natural_cmp;
use crate::slots::SlotLedger;
use crate::validate::validate_project;
use crate::PlanError;

/// Compute the complete physical plan for a project.
///
/// Category order is fixed: MPO end-to-end, then LC breakout (MMF before
/// SMF), then UTP. Within a category, rack pairs are walked in natural order,
/// module indices ascending, ports ascending. All state is call-local, so the
/// same input always yields the same result, ids included.
pub fn allocate_project(project: &Project) -> Result<AllocationResult, PlanError> {
    validate_project(project)?;
    let pairs = normalize_demands(project);

    let mut ledger = SlotLedger::default();
    let mut rec = PlanRecorder::default();

    alloc::mpo::allocate(&pairs, &mut ledger, &mut rec);
    alloc::lc::allocate(FiberKind::Mmf, &pairs, &mut ledger, &mut rec);
    alloc::lc::allocate(FiberKind::Smf, &pairs, &mut ledger, &mut rec);
    alloc::utp::allocate(&pairs, &mut ledger, &mut rec);

    let mut rack_ids: Vec<&str> = project.racks.iter().map(|r| r.id.as_str()).collect();
    rack_ids.sort_by(|a, b| natural_cmp(a, b));

    let mut panels = Vec::new();
    for rack_id in &rack_ids {
        for u in 1..=ledger.highest_u(rack_id) {
            panels.push(Panel {
                rack_id: rack_id.to_string(),
                u,
                slots_per_u: SLOTS_PER_U,
            });
        }
    }

    let PlanRecorder {
        mut modules,
        mut cables,
        mut sessions,
    } = rec;
    modules.sort_by(|a, b| {
        natural_cmp(&a.rack_id, &b.rack_id)
            .then_with(|| a.panel_u.cmp(&b.panel_u))
            .then_with(|| a.slot.cmp(&b.slot))
    });
    cables.sort_by(|a, b| a.cable_id.cmp(&b.cable_id));
    sessions.sort_by(|a, b| a.session_id.cmp(&b.session_id));

    Ok(AllocationResult {
        panels,
        modules,
        cables,
        sessions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Demand, Media, ModuleKind, Rack};

    fn project(demands: Vec<(&str, &str, Media, u32)>) -> Project {
        Project {
            racks: vec![
                Rack { id: "R01".into() },
                Rack { id: "R02".into() },
                Rack { id: "R03".into() },
            ],
            demands: demands
                .into_iter()
                .enumerate()
                .map(|(i, (src, dst, media, count))| Demand {
                    id: format!("D{:02}", i + 1),
                    src: src.into(),
                    dst: dst.into(),
                    endpoint_type: media,
                    count,
                })
                .collect(),
        }
    }

    #[test]
    fn empty_project_yields_empty_plan() {
        let result = allocate_project(&project(vec![])).unwrap();
        assert!(result.panels.is_empty());
        assert!(result.modules.is_empty());
        assert!(result.cables.is_empty());
        assert!(result.sessions.is_empty());
    }

    #[test]
    fn identical_input_yields_identical_plan() {
        let p = project(vec![
            ("R01", "R02", Media::Mpo12, 5),
            ("R01", "R02", Media::MmfLcDuplex, 2),
            ("R01", "R03", Media::UtpRj45, 3),
        ]);
        assert_eq!(allocate_project(&p).unwrap(), allocate_project(&p).unwrap());
    }

    #[test]
    fn categories_fill_slots_in_fixed_order() {
        let p = project(vec![
            ("R01", "R03", Media::UtpRj45, 1),
            ("R01", "R02", Media::MmfLcDuplex, 2),
            ("R01", "R02", Media::Mpo12, 1),
        ]);
        let result = allocate_project(&p).unwrap();
        let kinds: Vec<ModuleKind> = result
            .modules_in_rack("R01")
            .map(|m| m.module_type)
            .collect();
        assert_eq!(
            kinds,
            vec![
                ModuleKind::MpoPassThrough,
                ModuleKind::LcBreakout,
                ModuleKind::Utp
            ]
        );
        let positions: Vec<(u32, u32)> = result
            .modules_in_rack("R01")
            .map(|m| (m.panel_u, m.slot))
            .collect();
        assert_eq!(positions, vec![(1, 1), (1, 2), (1, 3)]);
    }

    #[test]
    fn session_orientation_ignores_demand_direction() {
        let forward = project(vec![("R02", "R03", Media::Mpo12, 1)]);
        let backward = project(vec![("R03", "R02", Media::Mpo12, 1)]);
        let a = allocate_project(&forward).unwrap();
        let b = allocate_project(&backward).unwrap();
        assert_eq!(a.sessions[0].src_rack, "R02");
        assert_eq!(a.sessions[0].dst_rack, "R03");
        assert_eq!(a.sessions[0].session_id, b.sessions[0].session_id);
    }
}
