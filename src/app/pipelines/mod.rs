pub mod bsn_fixture_pipeline;
pub mod download_pipeline;
pub mod personen_pipeline;

pub use bsn_fixture_pipeline::BsnFixturePipeline;
pub use download_pipeline::DownloadPipeline;
pub use personen_pipeline::PersonenPipeline;

use crate::domain::model::Dataset;
use crate::utils::error::{Result, TestDataError};

/// Renders a dataset as CSV with a header row.
pub(crate) fn render_csv(dataset: &Dataset) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&dataset.headers)?;
    for row in &dataset.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    let bytes = writer
        .into_inner()
        .map_err(|err| TestDataError::IoError(err.into_error()))?;
    String::from_utf8(bytes).map_err(|err| TestDataError::ProcessingError {
        message: format!("CSV output is not UTF-8: {}", err),
    })
}

/// Parses CSV text with a header row into a dataset.
pub(crate) fn parse_csv(data: &[u8]) -> Result<Dataset> {
    let mut reader = csv::Reader::from_reader(data);
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(TestDataError::ProcessingError {
            message: "CSV input has no header row".to_string(),
        });
    }

    let mut dataset = Dataset::new(headers);
    for record in reader.records() {
        dataset.push(record?.iter().map(str::to_string).collect());
    }
    Ok(dataset)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_csv_quotes_fields_with_commas() {
        let mut dataset = Dataset::new(vec!["naam".to_string(), "plaats".to_string()]);
        dataset.push(vec!["de Vries, Jan".to_string(), "Utrecht".to_string()]);

        let output = render_csv(&dataset).unwrap();

        assert_eq!(output, "naam,plaats\n\"de Vries, Jan\",Utrecht\n");
    }

    #[test]
    fn test_parse_csv_reads_header_and_rows() {
        let dataset = parse_csv(b"gender,name.first\nfemale,Anna\nmale,Daan\n").unwrap();

        assert_eq!(dataset.headers, vec!["gender", "name.first"]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.rows[1], vec!["male", "Daan"]);
    }

    #[test]
    fn test_parse_csv_rejects_empty_input() {
        assert!(parse_csv(b"").is_err());
    }

    #[test]
    fn test_parse_csv_rejects_ragged_rows() {
        assert!(parse_csv(b"a,b\n1,2,3\n").is_err());
    }
}
