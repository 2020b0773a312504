use std::collections::HashSet;

use crate::models::Project;
use crate::PlanError;

/// Reject malformed projects with a categorical error before any allocation
/// runs. A project that passes here cannot make the allocator fail.
pub fn validate_project(project: &Project) -> Result<(), PlanError> {
    let mut rack_ids: HashSet<&str> = HashSet::new();
    for rack in &project.racks {
        if !rack_ids.insert(rack.id.as_str()) {
            return Err(PlanError::DuplicateRackId(rack.id.clone()));
        }
    }

    for demand in &project.demands {
        if demand.src == demand.dst {
            return Err(PlanError::SelfLoop(demand.id.clone()));
        }
        for rack in [&demand.src, &demand.dst] {
            if !rack_ids.contains(rack.as_str()) {
                return Err(PlanError::UnknownRack {
                    demand: demand.id.clone(),
                    rack: rack.clone(),
                });
            }
        }
        if demand.count == 0 {
            return Err(PlanError::NonPositiveCount(demand.id.clone()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Demand, Media, Rack};

    fn project(demands: Vec<Demand>) -> Project {
        Project {
            racks: vec![Rack { id: "R01".into() }, Rack { id: "R02".into() }],
            demands,
        }
    }

    fn demand(src: &str, dst: &str, count: u32) -> Demand {
        Demand {
            id: "D01".into(),
            src: src.into(),
            dst: dst.into(),
            endpoint_type: Media::Mpo12,
            count,
        }
    }

    #[test]
    fn accepts_well_formed_project() {
        assert!(validate_project(&project(vec![demand("R01", "R02", 1)])).is_ok());
    }

    #[test]
    fn rejects_duplicate_rack_ids() {
        let bad = Project {
            racks: vec![Rack { id: "R01".into() }, Rack { id: "R01".into() }],
            demands: vec![],
        };
        assert!(matches!(
            validate_project(&bad),
            Err(PlanError::DuplicateRackId(_))
        ));
    }

    #[test]
    fn rejects_self_loop() {
        assert!(matches!(
            validate_project(&project(vec![demand("R01", "R01", 1)])),
            Err(PlanError::SelfLoop(_))
        ));
    }

    #[test]
    fn rejects_unknown_rack() {
        assert!(matches!(
            validate_project(&project(vec![demand("R01", "R99", 1)])),
            Err(PlanError::UnknownRack { .. })
        ));
    }

    #[test]
    fn rejects_zero_count() {
        assert!(matches!(
            validate_project(&project(vec![demand("R01", "R02", 0)])),
            Err(PlanError::NonPositiveCount(_))
        ));
    }

    #[test]
    fn unknown_media_token_fails_at_parse() {
        let document = r#"{
            "racks": [{"id": "R01"}, {"id": "R02"}],
            "demands": [
                {"id": "D01", "src": "R01", "dst": "R02",
                 "endpoint_type": "fiber_100g", "count": 1}
            ]
        }"#;
        assert!(matches!(
            Project::from_json(document),
            Err(PlanError::Parse(_))
        ));
    }
}
