use serde::Serialize;

/// Flat row shape for entry exports.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub id: i64,
    pub trip_id: i64,
    pub log_date: String,
    pub status: String,
    pub start_time: String,
    pub end_time: String,
    pub mileage: f64,
    pub automated: bool,
    pub source: String,
}

/// Header for CSV / JSON / XLSX / PDF.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "trip_id",
        "log_date",
        "status",
        "start_time",
        "end_time",
        "mileage",
        "automated",
        "source",
    ]
}

/// Convert entries into a table of strings (for PDF).
pub(crate) fn entry_to_row(e: &EntryExport) -> Vec<String> {
    vec![
        e.id.to_string(),
        e.trip_id.to_string(),
        e.log_date.clone(),
        e.status.clone(),
        e.start_time.clone(),
        e.end_time.clone(),
        format!("{:.1}", e.mileage),
        e.automated.to_string(),
        e.source.clone(),
    ]
}

pub(crate) fn entries_to_table(entries: &[EntryExport]) -> Vec<Vec<String>> {
    entries.iter().map(entry_to_row).collect()
}
