// Rendering layer: consumes a finished plan, never feeds back into allocation.

mod csv;
mod json;
mod svg;

pub use csv::session_table_csv;
pub use json::{result_json, ReportContext};
pub use svg::{render_svgs, SvgViews};
