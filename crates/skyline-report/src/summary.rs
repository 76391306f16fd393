//! Height histogram and human-readable panel summary.

use std::collections::BTreeMap;

use skyline_table::TableResult;

/// Histogram of offset well heights: each distinct height mapped to the
/// number of wells cut to it, keys ascending. This is the panel's cut
/// list.
pub fn well_counts(result: &TableResult, offset: i64) -> BTreeMap<i64, usize> {
    let mut counts = BTreeMap::new();
    for &height in result.well_heights() {
        *counts.entry(height + offset).or_insert(0) += 1;
    }
    counts
}

/// Human-readable summary of a computed panel: grid shape, physical
/// envelope, frequency range, and the [`well_counts`] cut list as
/// `height: count` lines in ascending height order. No trailing newline.
pub fn summary(result: &TableResult, offset: i64) -> String {
    let parameters = result.parameters();
    let mut lines = vec![
        format!(
            "{} x {} wells ({} total)",
            parameters.columns,
            parameters.rows,
            result.cells().len()
        ),
        format!(
            "panel: {:.2} x {:.2} cm",
            parameters.total_width_cm(),
            parameters.total_height_cm()
        ),
        format!("well width: {:.2} cm", parameters.well_width),
        format!("design frequency: {} Hz", parameters.design_frequency),
        format!("high frequency: {} Hz", parameters.high_frequency()),
        String::from("well heights (cm):"),
    ];
    for (height, count) in well_counts(result, offset) {
        lines.push(format!("{height:>4}: {count}"));
    }
    lines.join("\n")
}
