use patchplan::report::{render_svgs, result_json, session_table_csv, ReportContext};
use patchplan::{allocate_project, Project};

fn main() {
    println!("Patchplan - Example Usage\n");

    let project = Project::from_json(
        r#"{
            "racks": [{"id": "R01"}, {"id": "R02"}, {"id": "R03"}, {"id": "R10"}],
            "demands": [
                {"id": "D01", "src": "R01", "dst": "R02", "endpoint_type": "mpo12", "count": 14},
                {"id": "D02", "src": "R01", "dst": "R02", "endpoint_type": "mmf_lc_duplex", "count": 13},
                {"id": "D03", "src": "R02", "dst": "R10", "endpoint_type": "smf_lc_duplex", "count": 4},
                {"id": "D04", "src": "R01", "dst": "R02", "endpoint_type": "utp_rj45", "count": 7},
                {"id": "D05", "src": "R01", "dst": "R03", "endpoint_type": "utp_rj45", "count": 2}
            ]
        }"#,
    )
    .expect("demo project parses");

    let result = match allocate_project(&project) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Failed to plan project: {e}");
            return;
        }
    };

    println!("=== Plan Summary ===");
    println!("Panels:   {}", result.panels.len());
    println!("Modules:  {}", result.modules.len());
    println!("Cables:   {}", result.cables.len());
    println!("Sessions: {}", result.sessions.len());

    println!("\n=== Rack Layouts ===");
    for panel in &result.panels {
        println!("{} U{}:", panel.rack_id, panel.u);
        for module in result
            .modules_in_rack(&panel.rack_id)
            .filter(|m| m.panel_u == panel.u)
        {
            let peer = module.peer_rack_id.as_deref().unwrap_or("shared");
            println!(
                "  slot {}: {} -> {}",
                module.slot,
                module.module_type.as_str(),
                peer
            );
        }
    }

    println!("\n=== Sessions (first 10) ===");
    for session in result.sessions.iter().take(10) {
        println!(
            "{}  {}  {} <-> {}",
            &session.session_id[..12],
            session.media,
            session.label_a,
            session.label_b
        );
    }
    if result.sessions.len() > 10 {
        println!("... and {} more sessions", result.sessions.len() - 10);
    }

    let csv = session_table_csv("demo-project", None, &result.sessions);
    println!("\n=== CSV ({} rows) ===", csv.lines().count() - 1);
    for line in csv.lines().take(3) {
        println!("{line}");
    }

    let context = ReportContext {
        project_id: "demo-project",
        ..Default::default()
    };
    let json = result_json(&context, &result).expect("report serializes");
    println!("\nJSON report: {} bytes", json.len());

    let views = render_svgs(&result);
    println!(
        "SVG views: topology + {} rack layouts + {} pair details",
        views.rack_panels.len(),
        views.pair_detail.len()
    );
}
