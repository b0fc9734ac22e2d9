//! The sector area table shown under the plot.

use kepler_config::AreaReadout;
use kepler_math::{Orbit, Sector};
use serde::Serialize;

/// Area shown for every sector in [`AreaReadout::Placeholder`] mode.
///
/// A fixed teaching value, not derived from the orbit. Select
/// [`AreaReadout::Computed`] for the actual swept area.
pub const PLACEHOLDER_AREA: f64 = 2703.89;

/// One table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaRow {
    pub sector: String,
    pub t_start: f64,
    pub t_end: f64,
    pub area: f64,
}

/// One row per visible sector, labelled from 1.
pub fn area_rows(orbit: &Orbit, sectors: &[Sector], readout: AreaReadout) -> Vec<AreaRow> {
    sectors
        .iter()
        .map(|s| AreaRow {
            sector: format!("Sector {}", s.index + 1),
            t_start: s.t_start,
            t_end: s.t_end,
            area: match readout {
                AreaReadout::Placeholder => PLACEHOLDER_AREA,
                AreaReadout::Computed => s.area(orbit),
            },
        })
        .collect()
}

/// Plain-text table with a header line.
pub fn format_table(rows: &[AreaRow]) -> String {
    let mut out = format!("{:<12} {:>14} {:>16}\n", "Sector", "Days", "Area (u²)");
    if rows.is_empty() {
        out.push_str("(no completed sectors)\n");
    }
    for row in rows {
        let days = format!("{:.0}-{:.0}", row.t_start, row.t_end);
        out.push_str(&format!("{:<12} {:>14} {:>16.6}\n", row.sector, days, row.area));
    }
    out
}

/// The rows as a JSON array.
pub fn to_json(rows: &[AreaRow]) -> Result<String, serde_json::Error> {
    serde_json::to_string(rows)
}
