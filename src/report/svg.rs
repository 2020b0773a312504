use std::collections::BTreeMap;

use crate::models::{AllocationResult, FiberKind, Media, Module, ModuleKind, SLOTS_PER_U};
use crate::ordering::natural_cmp;

/// The three rendered views: room topology, per-rack panel occupancy, and
/// per-pair session detail. Rack and pair entries are in natural order.
#[derive(Debug, Clone)]
pub struct SvgViews {
    pub topology: String,
    pub rack_panels: Vec<(String, String)>,
    pub pair_detail: Vec<(String, String)>,
}

pub fn render_svgs(result: &AllocationResult) -> SvgViews {
    let mut racks: Vec<&str> = result
        .panels
        .iter()
        .map(|p| p.rack_id.as_str())
        .collect();
    racks.sort_by(|a, b| natural_cmp(a, b));
    racks.dedup();

    let rack_panels = racks
        .iter()
        .map(|&rack| (rack.to_string(), render_rack_panels(rack, result)))
        .collect();

    let mut pairs: Vec<(&str, &str)> = result
        .sessions
        .iter()
        .map(|s| (s.src_rack.as_str(), s.dst_rack.as_str()))
        .collect();
    pairs.sort_by(|a, b| natural_cmp(a.0, b.0).then_with(|| natural_cmp(a.1, b.1)));
    pairs.dedup();

    let pair_detail = pairs
        .iter()
        .map(|&(a, b)| (format!("{a}_{b}"), render_pair_detail(a, b, result)))
        .collect();

    SvgViews {
        topology: render_topology(&racks, result),
        rack_panels,
        pair_detail,
    }
}

fn media_color(media: Media) -> &'static str {
    match media {
        Media::MmfLcDuplex => "#4a90d9",
        Media::SmfLcDuplex => "#9b59b6",
        Media::Mpo12 => "#7b68ee",
        Media::UtpRj45 => "#5cb85c",
    }
}

fn media_abbrev(media: Media) -> &'static str {
    match media {
        Media::MmfLcDuplex => "MMF-LC",
        Media::SmfLcDuplex => "SMF-LC",
        Media::Mpo12 => "MPO12",
        Media::UtpRj45 => "UTP",
    }
}

fn module_fill(kind: ModuleKind) -> &'static str {
    match kind {
        ModuleKind::LcBreakout => "#d0e8ff",
        ModuleKind::MpoPassThrough => "#e0d8ff",
        ModuleKind::Utp => "#d8f0d8",
    }
}

fn module_abbrev(module: &Module) -> String {
    match module.module_type {
        ModuleKind::LcBreakout => match module.fiber_kind {
            Some(FiberKind::Mmf) => "LC-MMF".to_string(),
            Some(FiberKind::Smf) => "LC-SMF".to_string(),
            None => "LC".to_string(),
        },
        ModuleKind::MpoPassThrough => "MPO-PT".to_string(),
        ModuleKind::Utp => "UTP".to_string(),
    }
}

fn xml_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn empty_view(kind: &str, attrs: &[(&str, &str)], text: &str) -> String {
    let attr_markup: String = attrs
        .iter()
        .map(|(k, v)| format!(" {}=\"{}\"", xml_escape(k), xml_escape(v)))
        .collect();
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\"{attr_markup}>\
         <title>{}</title><text>{}</text></svg>",
        xml_escape(kind),
        xml_escape(text)
    )
}

fn render_topology(racks: &[&str], result: &AllocationResult) -> String {
    if racks.is_empty() {
        return empty_view("topology", &[("data-kind", "topology")], "Topology (empty)");
    }

    let mut pair_summary: BTreeMap<(String, String), BTreeMap<Media, usize>> = BTreeMap::new();
    for session in &result.sessions {
        *pair_summary
            .entry((session.src_rack.clone(), session.dst_rack.clone()))
            .or_default()
            .entry(session.media)
            .or_insert(0) += 1;
    }

    let (rack_w, rack_h) = (90i64, 36i64);
    let (h_gap, v_gap) = (50i64, 80i64);
    let margin = 30i64;
    let title_h = 40i64;
    let cols = racks.len().min(6) as i64;
    let rows = (racks.len() as i64 + cols - 1) / cols;
    let svg_w = margin * 2 + cols * rack_w + (cols - 1).max(0) * h_gap;
    let svg_h = title_h + margin * 2 + rows * rack_h + (rows - 1).max(0) * v_gap + 20;

    let mut pos: BTreeMap<&str, (i64, i64)> = BTreeMap::new();
    for (index, &rack) in racks.iter().enumerate() {
        let col = index as i64 % cols;
        let row = index as i64 / cols;
        pos.insert(
            rack,
            (
                margin + col * (rack_w + h_gap),
                title_h + margin + row * (rack_h + v_gap),
            ),
        );
    }

    let mut parts: Vec<String> = vec![
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" data-kind=\"topology\" \
             width=\"{svg_w}\" height=\"{svg_h}\" \
             style=\"font-family:monospace;font-size:12px;background:#fff;\">"
        ),
        "<title>Topology</title>".to_string(),
        format!(
            "<text x=\"{}\" y=\"26\" text-anchor=\"middle\" \
             style=\"font-size:15px;font-weight:bold;\">Topology</text>",
            svg_w / 2
        ),
    ];

    for ((rack_a, rack_b), media_counts) in &pair_summary {
        let (ax, ay) = pos[rack_a.as_str()];
        let (bx, by) = pos[rack_b.as_str()];
        let (x1, y1) = (ax + rack_w / 2, ay + rack_h / 2);
        let (x2, y2) = (bx + rack_w / 2, by + rack_h / 2);
        let label = media_counts
            .iter()
            .map(|(media, count)| format!("{}×{}", media_abbrev(*media), count))
            .collect::<Vec<_>>()
            .join(" | ");
        parts.push(format!(
            "<line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\" \
             stroke=\"#aaa\" stroke-width=\"2\"/>"
        ));
        parts.push(format!(
            "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" \
             style=\"font-size:10px;fill:#444;\">{}</text>",
            (x1 + x2) / 2,
            (y1 + y2) / 2 - 6,
            xml_escape(&label)
        ));
    }

    for &rack in racks {
        let (x, y) = pos[rack];
        parts.push(format!(
            "<rect x=\"{x}\" y=\"{y}\" width=\"{rack_w}\" height=\"{rack_h}\" \
             rx=\"5\" fill=\"#e8f0fe\" stroke=\"#4a90d9\" stroke-width=\"2\"/>"
        ));
        parts.push(format!(
            "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" \
             style=\"font-weight:bold;\">{}</text>",
            x + rack_w / 2,
            y + rack_h / 2 + 5,
            xml_escape(rack)
        ));
    }

    parts.push("</svg>".to_string());
    parts.concat()
}

fn render_rack_panels(rack_id: &str, result: &AllocationResult) -> String {
    let rack_modules: Vec<&Module> = result.modules_in_rack(rack_id).collect();
    let max_u = rack_modules.iter().map(|m| m.panel_u).max().unwrap_or(0);
    if max_u == 0 {
        return empty_view(
            "rack-panels",
            &[("data-kind", "rack-panels"), ("data-rack", rack_id)],
            &format!("Rack {rack_id} (empty)"),
        );
    }

    let mod_map: BTreeMap<(u32, u32), &Module> = rack_modules
        .iter()
        .map(|m| ((m.panel_u, m.slot), *m))
        .collect();

    let (slot_w, slot_h) = (130i64, 34i64);
    let label_w = 38i64;
    let margin = 20i64;
    let title_h = 44i64;
    let legend_h = 28i64;
    let svg_w = margin * 2 + label_w + SLOTS_PER_U as i64 * slot_w;
    let svg_h = title_h + max_u as i64 * slot_h + margin * 2 + legend_h;
    let safe_rack = xml_escape(rack_id);

    let mut parts: Vec<String> = vec![
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" data-kind=\"rack-panels\" \
             data-rack=\"{safe_rack}\" width=\"{svg_w}\" height=\"{svg_h}\" \
             style=\"font-family:monospace;font-size:11px;background:#fff;\">"
        ),
        format!("<title>Rack {safe_rack}</title>"),
        format!(
            "<text x=\"{}\" y=\"26\" text-anchor=\"middle\" \
             style=\"font-size:14px;font-weight:bold;\">Rack {safe_rack} Panel Layout</text>",
            svg_w / 2
        ),
    ];

    for slot in 1..=SLOTS_PER_U as i64 {
        parts.push(format!(
            "<text x=\"{}\" y=\"42\" text-anchor=\"middle\" \
             style=\"font-size:10px;fill:#666;\">Slot {slot}</text>",
            margin + label_w + (slot - 1) * slot_w + slot_w / 2
        ));
    }

    for u in 1..=max_u {
        let ry = title_h + (u as i64 - 1) * slot_h + margin;
        parts.push(format!(
            "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" \
             style=\"font-size:10px;fill:#666;\">U{u}</text>",
            margin + label_w / 2,
            ry + slot_h / 2 + 4
        ));
        for slot in 1..=SLOTS_PER_U {
            let sx = margin + label_w + (slot as i64 - 1) * slot_w;
            match mod_map.get(&(u, slot)) {
                Some(module) => {
                    let peer = module.peer_rack_id.as_deref().unwrap_or("shared");
                    parts.push(format!(
                        "<rect x=\"{sx}\" y=\"{ry}\" width=\"{slot_w}\" height=\"{slot_h}\" \
                         fill=\"{}\" stroke=\"#888\" stroke-width=\"1\"/>",
                        module_fill(module.module_type)
                    ));
                    parts.push(format!(
                        "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" \
                         style=\"font-size:9px;font-weight:bold;\">{}</text>",
                        sx + slot_w / 2,
                        ry + slot_h / 2 - 4,
                        xml_escape(&module_abbrev(module))
                    ));
                    parts.push(format!(
                        "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" \
                         style=\"font-size:9px;\">&gt;{}</text>",
                        sx + slot_w / 2,
                        ry + slot_h / 2 + 9,
                        xml_escape(peer)
                    ));
                }
                None => {
                    parts.push(format!(
                        "<rect x=\"{sx}\" y=\"{ry}\" width=\"{slot_w}\" height=\"{slot_h}\" \
                         fill=\"#fafafa\" stroke=\"#ccc\" stroke-width=\"1\" \
                         stroke-dasharray=\"4 2\"/>"
                    ));
                }
            }
        }
    }

    let ly = title_h + max_u as i64 * slot_h + margin + 8;
    let mut lx = margin;
    for (kind, label) in [
        (ModuleKind::LcBreakout, "LC Breakout"),
        (ModuleKind::MpoPassThrough, "MPO Pass-Through"),
        (ModuleKind::Utp, "UTP"),
    ] {
        parts.push(format!(
            "<rect x=\"{lx}\" y=\"{ly}\" width=\"12\" height=\"12\" \
             fill=\"{}\" stroke=\"#888\" stroke-width=\"1\"/>",
            module_fill(kind)
        ));
        parts.push(format!(
            "<text x=\"{}\" y=\"{}\" style=\"font-size:10px;\">{label}</text>",
            lx + 16,
            ly + 10
        ));
        lx += 145;
    }

    parts.push("</svg>".to_string());
    parts.concat()
}

fn render_pair_detail(rack_a: &str, rack_b: &str, result: &AllocationResult) -> String {
    let mut sessions: Vec<_> = result
        .sessions
        .iter()
        .filter(|s| s.src_rack == rack_a && s.dst_rack == rack_b)
        .collect();
    sessions.sort_by_key(|s| (s.src_u, s.src_slot, s.src_port));

    let pair_key = format!("{rack_a}_{rack_b}");
    if sessions.is_empty() {
        return empty_view(
            "pair-detail",
            &[("data-kind", "pair-detail"), ("data-pair", pair_key.as_str())],
            &format!("Pair {rack_a}-{rack_b} (no sessions)"),
        );
    }

    let row_h = 18i64;
    let title_h = 48i64;
    let port_col_w = 150i64;
    let mid_w = 100i64;
    let margin = 20i64;
    let svg_w = margin * 2 + port_col_w * 2 + mid_w;
    let svg_h = title_h + sessions.len() as i64 * row_h + margin * 2;
    let safe_a = xml_escape(rack_a);
    let safe_b = xml_escape(rack_b);

    let mut parts: Vec<String> = vec![
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" data-kind=\"pair-detail\" \
             data-pair=\"{}\" width=\"{svg_w}\" height=\"{svg_h}\" \
             style=\"font-family:monospace;font-size:11px;background:#fff;\">",
            xml_escape(&pair_key)
        ),
        format!("<title>Pair {safe_a}-{safe_b}</title>"),
        format!(
            "<text x=\"{}\" y=\"22\" text-anchor=\"middle\" \
             style=\"font-size:14px;font-weight:bold;\">Pair Detail: {safe_a} - {safe_b}</text>",
            svg_w / 2
        ),
        format!(
            "<text x=\"{}\" y=\"40\" text-anchor=\"middle\" \
             style=\"font-size:11px;font-weight:bold;\">{safe_a}</text>",
            margin + port_col_w / 2
        ),
        format!(
            "<text x=\"{}\" y=\"40\" text-anchor=\"middle\" \
             style=\"font-size:11px;font-weight:bold;\">{safe_b}</text>",
            margin + port_col_w + mid_w + port_col_w / 2
        ),
    ];

    let x_src_right = margin + port_col_w;
    let x_dst_left = margin + port_col_w + mid_w;
    for (index, session) in sessions.iter().enumerate() {
        let cy = title_h + index as i64 * row_h + margin + row_h / 2;
        let src_label = format!("U{}S{}P{}", session.src_u, session.src_slot, session.src_port);
        let dst_label = format!("U{}S{}P{}", session.dst_u, session.dst_slot, session.dst_port);
        let mid_label = match (session.fiber_a, session.fiber_b) {
            (Some(a), Some(b)) => format!("{} f{a}/{b}", media_abbrev(session.media)),
            _ => media_abbrev(session.media).to_string(),
        };
        parts.push(format!(
            "<text x=\"{}\" y=\"{}\" text-anchor=\"end\" \
             style=\"font-size:10px;\">{}</text>",
            x_src_right - 4,
            cy + 4,
            xml_escape(&src_label)
        ));
        parts.push(format!(
            "<line x1=\"{x_src_right}\" y1=\"{cy}\" x2=\"{x_dst_left}\" y2=\"{cy}\" \
             stroke=\"{}\" stroke-width=\"1.5\"/>",
            media_color(session.media)
        ));
        parts.push(format!(
            "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" \
             style=\"font-size:8px;fill:#555;\">{}</text>",
            x_src_right + mid_w / 2,
            cy - 2,
            xml_escape(&mid_label)
        ));
        parts.push(format!(
            "<text x=\"{}\" y=\"{}\" text-anchor=\"start\" \
             style=\"font-size:10px;\">{}</text>",
            x_dst_left + 4,
            cy + 4,
            xml_escape(&dst_label)
        ));
    }

    parts.push("</svg>".to_string());
    parts.concat()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Demand, Media, Project, Rack};
    use crate::planner::allocate_project;

    #[test]
    fn views_carry_data_kind_markers() {
        let project = Project {
            racks: vec![Rack { id: "R01".into() }, Rack { id: "R02".into() }],
            demands: vec![Demand {
                id: "D01".into(),
                src: "R01".into(),
                dst: "R02".into(),
                endpoint_type: Media::MmfLcDuplex,
                count: 2,
            }],
        };
        let result = allocate_project(&project).unwrap();
        let views = render_svgs(&result);
        assert!(views.topology.contains("data-kind=\"topology\""));
        assert_eq!(views.rack_panels.len(), 2);
        for (_, svg) in &views.rack_panels {
            assert!(svg.contains("data-kind=\"rack-panels\""));
        }
        assert_eq!(views.pair_detail.len(), 1);
        assert!(views.pair_detail[0].1.contains("data-pair=\"R01_R02\""));
    }

    #[test]
    fn empty_result_renders_placeholder_topology() {
        let project = Project {
            racks: vec![Rack { id: "R01".into() }],
            demands: vec![],
        };
        let result = allocate_project(&project).unwrap();
        let views = render_svgs(&result);
        assert!(views.topology.contains("Topology (empty)"));
        assert!(views.rack_panels.is_empty());
    }
}
