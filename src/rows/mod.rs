use log::warn;


/// One body record of a question bank file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Row {
    /// 1-based line the record starts on.
    pub line: u64,
    pub fields: Vec<String>,
}

/// Reads every record after the header line.
///
/// Records may have any number of fields; callers decide what is too short.
/// Blank lines are skipped. A quote only opens a quoted field at the start
/// of that field, so a stray quote stays a literal character.
pub fn read_rows(text: &str) -> Vec<Row> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        match record {
            Ok(record) => rows.push(Row {
                line: record.position().map(|p| p.line()).unwrap_or(0),
                fields: record.iter().map(str::to_owned).collect(),
            }),
            Err(e) => warn!("Skipping unreadable question line: {}", e),
        }
    }
    rows
}
