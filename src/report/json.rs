use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::AllocationResult;

/// Identification the caller attaches to a rendered report. `generated_at`
/// stays `None` when byte-reproducible output matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportContext<'a> {
    pub project_id: &'a str,
    pub revision_id: Option<&'a str>,
    pub input_hash: Option<&'a str>,
    pub generated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
struct Report<'a> {
    project_id: &'a str,
    revision_id: Option<&'a str>,
    input_hash: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generated_at: Option<DateTime<Utc>>,
    metrics: Metrics,
    panels: &'a [crate::models::Panel],
    modules: &'a [crate::models::Module],
    cables: &'a [crate::models::Cable],
    sessions: &'a [crate::models::Session],
    warnings: Vec<String>,
}

#[derive(Serialize)]
struct Metrics {
    total_sessions: usize,
    sessions_by_media: BTreeMap<&'static str, usize>,
    total_cables: usize,
    cables_by_type: BTreeMap<&'static str, usize>,
    total_modules: usize,
    modules_by_type: BTreeMap<&'static str, usize>,
    total_panels: usize,
}

/// Render the full result plus aggregate metrics as pretty-printed JSON.
pub fn result_json(
    context: &ReportContext<'_>,
    result: &AllocationResult,
) -> Result<String, serde_json::Error> {
    let mut sessions_by_media: BTreeMap<&'static str, usize> = BTreeMap::new();
    for session in &result.sessions {
        *sessions_by_media.entry(session.media.as_str()).or_insert(0) += 1;
    }
    let mut cables_by_type: BTreeMap<&'static str, usize> = BTreeMap::new();
    for cable in &result.cables {
        *cables_by_type.entry(cable.cable_type.as_str()).or_insert(0) += 1;
    }
    let mut modules_by_type: BTreeMap<&'static str, usize> = BTreeMap::new();
    for module in &result.modules {
        *modules_by_type
            .entry(module.module_type.as_str())
            .or_insert(0) += 1;
    }

    serde_json::to_string_pretty(&Report {
        project_id: context.project_id,
        revision_id: context.revision_id,
        input_hash: context.input_hash,
        generated_at: context.generated_at,
        metrics: Metrics {
            total_sessions: result.sessions.len(),
            sessions_by_media,
            total_cables: result.cables.len(),
            cables_by_type,
            total_modules: result.modules.len(),
            modules_by_type,
            total_panels: result.panels.len(),
        },
        panels: &result.panels,
        modules: &result.modules,
        cables: &result.cables,
        sessions: &result.sessions,
        warnings: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Demand, Media, Project, Rack};
    use crate::planner::allocate_project;

    #[test]
    fn report_carries_metrics_and_empty_warnings() {
        let project = Project {
            racks: vec![Rack { id: "R01".into() }, Rack { id: "R02".into() }],
            demands: vec![Demand {
                id: "D01".into(),
                src: "R01".into(),
                dst: "R02".into(),
                endpoint_type: Media::Mpo12,
                count: 2,
            }],
        };
        let result = allocate_project(&project).unwrap();
        let context = ReportContext {
            project_id: "proj-1",
            ..Default::default()
        };
        let rendered = result_json(&context, &result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["metrics"]["total_sessions"], 2);
        assert_eq!(value["metrics"]["sessions_by_media"]["mpo12"], 2);
        assert_eq!(value["metrics"]["cables_by_type"]["mpo12_trunk"], 2);
        assert_eq!(value["warnings"].as_array().unwrap().len(), 0);
        assert!(value.get("generated_at").is_none());
    }
}
