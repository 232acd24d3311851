//! Release-file discovery and relationship parsing.
//!
//! A terminology release ships as tab-delimited snapshot files whose
//! names carry a `_Concept_` / `_Description_` / `_Relationship_`
//! marker. Discovery matches those markers case-insensitively; parsing
//! trusts the header row to locate columns and maps blank or
//! unparsable fields to `None`, leaving the graph builder to aggregate
//! them as malformed rows.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::StringRecord;

use taxograph_core::{ConceptId, RecordId, RelationshipRow, RelationshipType};

use crate::error::{CliError, CliResult};

/// Date format used by effective-time columns.
const EFFECTIVE_TIME_FORMAT: &str = "%Y%m%d";

/// Paths of the release files a query session may need.
#[derive(Debug, Clone, Default)]
pub struct ReleaseFiles {
    pub concept: Option<PathBuf>,
    pub description: Option<PathBuf>,
    pub relationship: Option<PathBuf>,
}

impl ReleaseFiles {
    /// The relationship file, required for every command.
    pub fn relationship(&self, dir: &Path) -> CliResult<&Path> {
        self.relationship
            .as_deref()
            .ok_or_else(|| CliError::MissingReleaseFile {
                kind: "Relationship",
                dir: dir.to_path_buf(),
            })
    }
}

/// Locate release files under a terminology directory.
///
/// File-name markers are matched case-insensitively; when several
/// files carry the same marker the last one scanned wins.
pub fn find_release_files(dir: &Path) -> CliResult<ReleaseFiles> {
    if !dir.is_dir() {
        return Err(CliError::ReleasePath(dir.to_path_buf()));
    }

    let mut files = ReleaseFiles::default();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let name = name.to_lowercase();

        if name.contains("_concept_") {
            files.concept = Some(path);
        } else if name.contains("_description_") {
            files.description = Some(path);
        } else if name.contains("_relationship_") {
            files.relationship = Some(path);
        }
    }

    tracing::debug!(
        concept = files.concept.is_some(),
        description = files.description.is_some(),
        relationship = files.relationship.is_some(),
        dir = %dir.display(),
        "release files discovered"
    );
    Ok(files)
}

/// Column indices of the relationship file fields we consume.
struct RelationshipColumns {
    id: usize,
    effective_time: usize,
    active: usize,
    source: usize,
    destination: usize,
    relationship_type: usize,
}

impl RelationshipColumns {
    fn from_headers(headers: &StringRecord, path: &Path) -> CliResult<Self> {
        let find = |column: &'static str| -> CliResult<usize> {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| CliError::MissingColumn {
                    column,
                    path: path.to_path_buf(),
                })
        };

        Ok(Self {
            id: find("id")?,
            effective_time: find("effectiveTime")?,
            active: find("active")?,
            source: find("sourceId")?,
            destination: find("destinationId")?,
            relationship_type: find("typeId")?,
        })
    }
}

/// Parse the relationship file into raw rows.
///
/// Every field is best-effort: blanks and garbage become `None` so the
/// builder can report them in aggregate instead of this parser
/// deciding what to drop.
pub fn read_relationship_rows(path: &Path) -> CliResult<Vec<RelationshipRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_path(path)?;

    let columns = RelationshipColumns::from_headers(reader.headers()?, path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(RelationshipRow {
            id: field_i64(&record, columns.id).map(RecordId),
            source: field_i64(&record, columns.source).map(ConceptId),
            destination: field_i64(&record, columns.destination).map(ConceptId),
            relationship_type: field_i64(&record, columns.relationship_type)
                .map(RelationshipType),
            active: field_flag(&record, columns.active),
            effective_time: field_date(&record, columns.effective_time),
        });
    }

    tracing::debug!(rows = rows.len(), path = %path.display(), "relationship rows read");
    Ok(rows)
}

fn field<'r>(record: &'r StringRecord, index: usize) -> Option<&'r str> {
    record.get(index).map(str::trim).filter(|s| !s.is_empty())
}

fn field_i64(record: &StringRecord, index: usize) -> Option<i64> {
    field(record, index).and_then(|s| s.parse().ok())
}

fn field_flag(record: &StringRecord, index: usize) -> Option<bool> {
    match field(record, index) {
        Some("1") => Some(true),
        Some("0") => Some(false),
        _ => None,
    }
}

fn field_date(record: &StringRecord, index: usize) -> Option<NaiveDate> {
    field(record, index).and_then(|s| NaiveDate::parse_from_str(s, EFFECTIVE_TIME_FORMAT).ok())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const RELATIONSHIP_HEADER: &str =
        "id\teffectiveTime\tactive\tmoduleId\tsourceId\tdestinationId\trelationshipGroup\ttypeId\tcharacteristicTypeId\tmodifierId";

    fn write_release_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn discovery_matches_markers_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        write_release_file(
            dir.path(),
            "sct2_Relationship_Snapshot_INT_20221231.txt",
            RELATIONSHIP_HEADER,
        );
        write_release_file(dir.path(), "sct2_description_snapshot.txt", "id");
        write_release_file(dir.path(), "unrelated.txt", "");

        let files = find_release_files(dir.path()).unwrap();
        assert!(files.relationship.is_some());
        assert!(files.description.is_some());
        assert!(files.concept.is_none());
    }

    #[test]
    fn discovery_rejects_a_missing_directory() {
        let err = find_release_files(Path::new("/does/not/exist")).unwrap_err();
        assert!(matches!(err, CliError::ReleasePath(_)));
    }

    #[test]
    fn relationship_rows_parse_typed_fields() {
        let dir = tempfile::tempdir().unwrap();
        let content = format!(
            "{RELATIONSHIP_HEADER}\n\
             100\t20221231\t1\t900000000000207008\t30\t10\t0\t116680003\t900000000000011006\t900000000000451002\n"
        );
        let path = write_release_file(dir.path(), "sct2_Relationship_Snapshot.txt", &content);

        let rows = read_relationship_rows(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, Some(RecordId(100)));
        assert_eq!(rows[0].source, Some(ConceptId(30)));
        assert_eq!(rows[0].destination, Some(ConceptId(10)));
        assert_eq!(rows[0].relationship_type, Some(RelationshipType::IS_A));
        assert_eq!(rows[0].active, Some(true));
        assert_eq!(
            rows[0].effective_time,
            NaiveDate::from_ymd_opt(2022, 12, 31)
        );
    }

    #[test]
    fn blank_and_garbage_fields_become_none() {
        let dir = tempfile::tempdir().unwrap();
        let content = format!(
            "{RELATIONSHIP_HEADER}\n\
             100\tnot-a-date\t2\tx\t\t10\t0\tabc\ty\tz\n"
        );
        let path = write_release_file(dir.path(), "sct2_Relationship_Snapshot.txt", &content);

        let rows = read_relationship_rows(&path).unwrap();
        assert_eq!(rows[0].source, None);
        assert_eq!(rows[0].relationship_type, None);
        assert_eq!(rows[0].active, None);
        assert_eq!(rows[0].effective_time, None);
        // Fields that did parse are retained for the malformed report.
        assert_eq!(rows[0].id, Some(RecordId(100)));
    }

    #[test]
    fn missing_column_is_a_file_level_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_release_file(
            dir.path(),
            "sct2_Relationship_Snapshot.txt",
            "id\teffectiveTime\tactive\tsourceId\tdestinationId\n",
        );

        let err = read_relationship_rows(&path).unwrap_err();
        assert!(matches!(
            err,
            CliError::MissingColumn {
                column: "typeId",
                ..
            }
        ));
    }
}
