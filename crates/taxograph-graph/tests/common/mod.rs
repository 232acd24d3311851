//! Shared fixtures for integration tests.
//!
//! Builders produce deterministic relationship rows so every test
//! constructs its taxonomy from the same raw material the production
//! pipeline ingests.

use chrono::NaiveDate;
use taxograph_core::{
    ConceptId, EffectiveTime, RecordId, RelationshipRecord, RelationshipRow, RelationshipType,
};

pub fn date(y: i32, m: u32, d: u32) -> EffectiveTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A complete, active is-a row.
pub fn isa_row(id: i64, source: i64, destination: i64) -> RelationshipRow {
    RelationshipRow::from(RelationshipRecord {
        id: RecordId(id),
        source: ConceptId(source),
        destination: ConceptId(destination),
        relationship_type: RelationshipType::IS_A,
        active: true,
        effective_time: date(2022, 12, 31),
    })
}

/// Same as [`isa_row`] with an explicit effective time.
pub fn isa_row_at(id: i64, source: i64, destination: i64, time: EffectiveTime) -> RelationshipRow {
    let mut row = isa_row(id, source, destination);
    row.effective_time = Some(time);
    row
}

/// The toy taxonomy used throughout:
///
/// ```text
///        ROOT(1000)
///        /        \
///      A(10)     B(20)
///      /   \
///   C(30) D(40)
/// ```
pub fn toy_rows() -> Vec<RelationshipRow> {
    vec![
        isa_row(1, 10, 1000),
        isa_row(2, 20, 1000),
        isa_row(3, 30, 10),
        isa_row(4, 40, 10),
    ]
}

/// A layered synthetic taxonomy: `depth` levels, `fanout` children per
/// node, concept ids encode their position so tests stay readable.
pub fn layered_rows(depth: u32, fanout: i64) -> Vec<RelationshipRow> {
    let mut rows = Vec::new();
    let mut record_id = 0i64;
    let mut parents = vec![1i64];

    for _ in 0..depth {
        let mut next = Vec::new();
        for &parent in &parents {
            for slot in 0..fanout {
                let child = parent * 10 + slot + 1;
                record_id += 1;
                rows.push(isa_row(record_id, child, parent));
                next.push(child);
            }
        }
        parents = next;
    }

    rows
}
