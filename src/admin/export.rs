use anyhow::{anyhow, bail, Result};
use log::warn;

use crate::admin::AdminQuestion;


pub const EXPORT_HEADER: [&str; 10] = [
    "ID",
    "Câu hỏi",
    "Lựa chọn 1",
    "Lựa chọn 2",
    "Lựa chọn 3",
    "Lựa chọn 4",
    "Đáp án đúng",
    "Điểm liệt",
    "Chương",
    "Hình ảnh",
];

/// Writes the header and one row per question, in order.
///
/// A column is quoted only when it holds a comma, a quote or a line break;
/// quotes inside a quoted column are doubled.
pub fn to_csv(questions: &[AdminQuestion]) -> Result<String> {
    if questions.is_empty() {
        bail!("There are no questions to export");
    }

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(&EXPORT_HEADER)?;
    for (index, question) in questions.iter().enumerate() {
        if let Err(e) = question.check() {
            warn!(
                "Question {} (id {:?}) is exported as is: {:#}",
                index + 1,
                question.id,
                e
            );
        }
        writer.write_record(&question.csv_row())?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow!("could not finish CSV output: {}", e))?;
    Ok(String::from_utf8(bytes)?)
}
