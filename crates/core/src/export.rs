//! CSV rendering for the full-collection export.

/// Fixed header row of the export, in column order.
pub const CSV_HEADERS: [&str; 11] = [
    "ID",
    "Name",
    "Height",
    "Mass",
    "Hair Color",
    "Skin Color",
    "Eye Color",
    "Birth Year",
    "Gender",
    "Homeworld",
    "Created At",
];

/// Escape a single CSV value (RFC 4180 quoting).
pub fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r')
    {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// The header line, newline-terminated.
pub fn header_line() -> String {
    let mut line = CSV_HEADERS.join(",");
    line.push('\n');
    line
}

/// Render one row. Absent values become empty cells. Newline-terminated.
pub fn render_row(values: &[Option<&str>]) -> String {
    let mut line = values
        .iter()
        .map(|v| v.map(csv_escape).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",");
    line.push('\n');
    line
}

/// Download filename for an export taken at `millis` since the Unix epoch.
pub fn export_filename(millis: i64) -> String {
    format!("characters_{millis}.csv")
}
