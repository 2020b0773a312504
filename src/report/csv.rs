use crate::models::Session;

const HEADER: [&str; 21] = [
    "project_id",
    "revision_id",
    "session_id",
    "media",
    "cable_id",
    "adapter_type",
    "label_a",
    "label_b",
    "src_rack",
    "src_face",
    "src_u",
    "src_slot",
    "src_port",
    "dst_rack",
    "dst_face",
    "dst_u",
    "dst_slot",
    "dst_port",
    "fiber_a",
    "fiber_b",
    "notes",
];

/// Render the 21-column session table, rows sorted by session id. Absent
/// fiber indices and notes render as blank cells.
pub fn session_table_csv(
    project_id: &str,
    revision_id: Option<&str>,
    sessions: &[Session],
) -> String {
    let mut rows: Vec<&Session> = sessions.iter().collect();
    rows.sort_by(|a, b| a.session_id.cmp(&b.session_id));

    let mut out = String::new();
    push_row(&mut out, HEADER.iter().map(|s| s.to_string()));
    for session in rows {
        push_row(
            &mut out,
            [
                project_id.to_string(),
                revision_id.unwrap_or_default().to_string(),
                session.session_id.clone(),
                session.media.as_str().to_string(),
                session.cable_id.clone(),
                session.adapter_type.as_str().to_string(),
                session.label_a.clone(),
                session.label_b.clone(),
                session.src_rack.clone(),
                session.src_face.clone(),
                session.src_u.to_string(),
                session.src_slot.to_string(),
                session.src_port.to_string(),
                session.dst_rack.clone(),
                session.dst_face.clone(),
                session.dst_u.to_string(),
                session.dst_slot.to_string(),
                session.dst_port.to_string(),
                blank_or(session.fiber_a),
                blank_or(session.fiber_b),
                session.notes.clone().unwrap_or_default(),
            ]
            .into_iter(),
        );
    }
    out
}

fn blank_or(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn push_row(out: &mut String, fields: impl Iterator<Item = String>) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(',');
        }
        first = false;
        out.push_str(&quote(&field));
    }
    out.push('\n');
}

// Minimal RFC-4180 quoting.
fn quote(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_has_21_columns() {
        let out = session_table_csv("proj-1", None, &[]);
        let header: Vec<&str> = out.lines().next().unwrap().split(',').collect();
        assert_eq!(header.len(), 21);
        assert_eq!(header[0], "project_id");
        assert_eq!(header[20], "notes");
    }

    #[test]
    fn quoting_escapes_commas_and_quotes() {
        assert_eq!(quote("plain"), "plain");
        assert_eq!(quote("a,b"), "\"a,b\"");
        assert_eq!(quote("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
