use crate::markers::MarkerTable;

/// Appends the classes of every style marker found in `run`.
///
/// Markers are tested in priority order and every match is kept: a run that
/// contains a combination pattern and a single-style pattern yields both, and
/// nothing is deduplicated.
pub fn resolve_classes<'t>(table: &'t MarkerTable, run: &str, out: &mut Vec<&'t str>) {
    out.extend(
        table
            .style_markers()
            .iter()
            .filter(|marker| run.contains(marker.pattern()))
            .map(|marker| marker.classes()),
    );
}
