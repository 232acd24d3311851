//! Display-name resolution backed by a description release file.

use std::collections::HashMap;
use std::path::Path;

use csv::StringRecord;

use taxograph_core::{ConceptId, NameResolver, Resolution};

use crate::error::{CliError, CliResult};

/// Description type whose term is the concept's fully specified name.
const FULLY_SPECIFIED_NAME: i64 = 900_000_000_000_003_001;

/// In-memory concept → fully-specified-name map.
///
/// Built once from the description file; lookups never touch disk.
/// Concepts without an active fully-specified name resolve to
/// [`Resolution::Unresolved`].
#[derive(Debug, Default)]
pub struct DescriptionResolver {
    names: HashMap<ConceptId, String>,
}

impl DescriptionResolver {
    /// Load active fully-specified names from a description file.
    ///
    /// When a concept carries several active fully-specified names the
    /// first row wins, matching the ordering the release publishes.
    pub fn from_release_file(path: &Path) -> CliResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .flexible(true)
            .from_path(path)?;

        let headers = reader.headers()?.clone();
        let find = |column: &'static str| -> CliResult<usize> {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| CliError::MissingColumn {
                    column,
                    path: path.to_path_buf(),
                })
        };
        let active = find("active")?;
        let concept = find("conceptId")?;
        let type_id = find("typeId")?;
        let term = find("term")?;

        let mut names: HashMap<ConceptId, String> = HashMap::new();
        for record in reader.records() {
            let record = record?;
            if field(&record, active) != Some("1") {
                continue;
            }
            if field_i64(&record, type_id) != Some(FULLY_SPECIFIED_NAME) {
                continue;
            }
            let (Some(concept_id), Some(term)) =
                (field_i64(&record, concept), field(&record, term))
            else {
                continue;
            };
            names
                .entry(ConceptId(concept_id))
                .or_insert_with(|| term.to_string());
        }

        tracing::debug!(names = names.len(), path = %path.display(), "description names loaded");
        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl NameResolver for DescriptionResolver {
    fn resolve(&self, concept: ConceptId) -> Resolution {
        match self.names.get(&concept) {
            Some(name) => Resolution::Resolved(name.clone()),
            None => Resolution::Unresolved(concept),
        }
    }
}

fn field<'r>(record: &'r StringRecord, index: usize) -> Option<&'r str> {
    record.get(index).map(str::trim).filter(|s| !s.is_empty())
}

fn field_i64(record: &StringRecord, index: usize) -> Option<i64> {
    field(record, index).and_then(|s| s.parse().ok())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const DESCRIPTION_HEADER: &str =
        "id\teffectiveTime\tactive\tmoduleId\tconceptId\tlanguageCode\ttypeId\tterm\tcaseSignificanceId";

    fn write_description_file(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sct2_Description_Snapshot.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn resolves_active_fully_specified_names() {
        let content = format!(
            "{DESCRIPTION_HEADER}\n\
             1\t20221231\t1\tm\t10\ten\t900000000000003001\tClinical finding (finding)\tc\n\
             2\t20221231\t1\tm\t20\ten\t900000000000013009\tSynonym only\tc\n\
             3\t20221231\t0\tm\t30\ten\t900000000000003001\tRetired name\tc\n"
        );
        let (_dir, path) = write_description_file(&content);

        let resolver = DescriptionResolver::from_release_file(&path).unwrap();
        assert_eq!(resolver.len(), 1);
        assert_eq!(
            resolver.resolve(ConceptId(10)),
            Resolution::Resolved("Clinical finding (finding)".to_string())
        );
        // Synonyms and inactive rows never resolve.
        assert_eq!(
            resolver.resolve(ConceptId(20)),
            Resolution::Unresolved(ConceptId(20))
        );
        assert_eq!(
            resolver.resolve(ConceptId(30)),
            Resolution::Unresolved(ConceptId(30))
        );
    }

    #[test]
    fn first_active_name_wins() {
        let content = format!(
            "{DESCRIPTION_HEADER}\n\
             1\t20221231\t1\tm\t10\ten\t900000000000003001\tFirst name\tc\n\
             2\t20221231\t1\tm\t10\ten\t900000000000003001\tSecond name\tc\n"
        );
        let (_dir, path) = write_description_file(&content);

        let resolver = DescriptionResolver::from_release_file(&path).unwrap();
        assert_eq!(
            resolver.resolve(ConceptId(10)),
            Resolution::Resolved("First name".to_string())
        );
    }

    #[test]
    fn missing_term_column_is_reported() {
        let (_dir, path) = write_description_file("id\tactive\tconceptId\ttypeId\n");
        let err = DescriptionResolver::from_release_file(&path).unwrap_err();
        assert!(matches!(err, CliError::MissingColumn { column: "term", .. }));
    }
}
