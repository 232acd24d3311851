//! Relationship rows, validated records, and revision deduplication.
//!
//! The feed hands this crate *rows*: whatever a delimited parser could
//! actually promise, every field optional. Validation turns a row into
//! a [`RelationshipRecord`] or a [`CoreError::MalformedRecord`] naming
//! the first missing field. Deduplication then collapses revision
//! history so that one record per [`RecordId`] remains authoritative.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::{ConceptId, EffectiveTime, RecordId, RelationshipType};

/// A raw relationship row as read from a delimited file.
///
/// Fields are optional because the parser cannot promise more; the
/// builder validates and aggregates whatever is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipRow {
    pub id: Option<RecordId>,
    pub source: Option<ConceptId>,
    pub destination: Option<ConceptId>,
    pub relationship_type: Option<RelationshipType>,
    pub active: Option<bool>,
    pub effective_time: Option<EffectiveTime>,
}

/// A validated relationship assertion.
///
/// `source` is the narrower concept, `destination` the broader one; the
/// graph layer draws the edge `destination → source`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipRecord {
    pub id: RecordId,
    pub source: ConceptId,
    pub destination: ConceptId,
    pub relationship_type: RelationshipType,
    pub active: bool,
    pub effective_time: EffectiveTime,
}

impl TryFrom<RelationshipRow> for RelationshipRecord {
    type Error = CoreError;

    fn try_from(row: RelationshipRow) -> CoreResult<Self> {
        let missing = |field: &'static str| CoreError::MalformedRecord {
            record_id: row.id,
            missing: field,
        };

        Ok(Self {
            id: row.id.ok_or_else(|| missing("id"))?,
            source: row.source.ok_or_else(|| missing("source"))?,
            destination: row.destination.ok_or_else(|| missing("destination"))?,
            relationship_type: row
                .relationship_type
                .ok_or_else(|| missing("relationship_type"))?,
            active: row.active.ok_or_else(|| missing("active"))?,
            effective_time: row
                .effective_time
                .ok_or_else(|| missing("effective_time"))?,
        })
    }
}

impl From<RelationshipRecord> for RelationshipRow {
    fn from(record: RelationshipRecord) -> Self {
        Self {
            id: Some(record.id),
            source: Some(record.source),
            destination: Some(record.destination),
            relationship_type: Some(record.relationship_type),
            active: Some(record.active),
            effective_time: Some(record.effective_time),
        }
    }
}

/// Collapse revision history to one authoritative record per record id.
///
/// The record with the maximum effective time wins; on an exact tie the
/// first-seen revision is kept. Output preserves the order in which
/// each record id was first encountered, so the result is deterministic
/// for a given input sequence. Inactive records are retained here;
/// activity filtering is the graph builder's concern.
pub fn latest_revisions<I>(records: I) -> Vec<RelationshipRecord>
where
    I: IntoIterator<Item = RelationshipRecord>,
{
    let mut order: Vec<RecordId> = Vec::new();
    let mut winners: HashMap<RecordId, RelationshipRecord> = HashMap::new();

    for record in records {
        match winners.entry(record.id) {
            Entry::Vacant(slot) => {
                order.push(record.id);
                slot.insert(record);
            }
            Entry::Occupied(mut slot) => {
                if record.effective_time > slot.get().effective_time {
                    slot.insert(record);
                }
            }
        }
    }

    order
        .into_iter()
        .filter_map(|id| winners.remove(&id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> EffectiveTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(id: i64, source: i64, destination: i64, time: EffectiveTime) -> RelationshipRecord {
        RelationshipRecord {
            id: RecordId(id),
            source: ConceptId(source),
            destination: ConceptId(destination),
            relationship_type: RelationshipType::IS_A,
            active: true,
            effective_time: time,
        }
    }

    #[test]
    fn validation_rejects_missing_destination() {
        let row = RelationshipRow {
            id: Some(RecordId(1)),
            source: Some(ConceptId(2)),
            destination: None,
            relationship_type: Some(RelationshipType::IS_A),
            active: Some(true),
            effective_time: Some(date(2023, 1, 31)),
        };

        let err = RelationshipRecord::try_from(row).unwrap_err();
        assert_eq!(
            err,
            CoreError::MalformedRecord {
                record_id: Some(RecordId(1)),
                missing: "destination",
            }
        );
    }

    #[test]
    fn validation_reports_first_missing_field_without_id() {
        let err = RelationshipRecord::try_from(RelationshipRow::default()).unwrap_err();
        assert_eq!(
            err,
            CoreError::MalformedRecord {
                record_id: None,
                missing: "id",
            }
        );
    }

    #[test]
    fn validation_round_trips_complete_rows() {
        let original = record(7, 100, 200, date(2022, 6, 30));
        let row = RelationshipRow::from(original);
        assert_eq!(RelationshipRecord::try_from(row).unwrap(), original);
    }

    #[test]
    fn later_revision_wins() {
        let stale = record(1, 10, 20, date(2020, 1, 31));
        let fresh = record(1, 10, 30, date(2022, 7, 31));

        let deduped = latest_revisions([stale, fresh]);
        assert_eq!(deduped, vec![fresh]);

        // Arrival order must not matter for which revision wins.
        let deduped = latest_revisions([fresh, stale]);
        assert_eq!(deduped, vec![fresh]);
    }

    #[test]
    fn equal_effective_times_keep_first_seen() {
        let first = record(1, 10, 20, date(2021, 1, 31));
        let second = record(1, 10, 30, date(2021, 1, 31));

        assert_eq!(latest_revisions([first, second]), vec![first]);
    }

    #[test]
    fn distinct_ids_all_survive_in_first_seen_order() {
        let a = record(3, 1, 2, date(2021, 1, 31));
        let b = record(1, 2, 3, date(2021, 1, 31));
        let c = record(2, 3, 4, date(2021, 1, 31));

        assert_eq!(latest_revisions([a, b, c]), vec![a, b, c]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(latest_revisions([]).is_empty());
    }

    #[test]
    fn inactive_revisions_are_retained() {
        let mut retired = record(5, 1, 2, date(2023, 1, 31));
        retired.active = false;

        assert_eq!(latest_revisions([retired]), vec![retired]);
    }
}
