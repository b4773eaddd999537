//! [`SqliteSampleStore`] — the SQLite implementation of [`SampleStore`].

use std::path::Path;

use quip_core::{
  sample::{NewSample, Sample, SamplePatch},
  store::SampleStore,
};
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use crate::{
  Error, Result,
  encode::{RawSample, encode_uuid},
  schema::SCHEMA,
};

const SAMPLE_COLUMNS: &str = "sample_id, person, category, catchphrase, \
                              inserted_at, updated_at, approved";

fn raw_sample_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawSample> {
  Ok(RawSample {
    sample_id:   row.get(0)?,
    person:      row.get(1)?,
    category:    row.get(2)?,
    catchphrase: row.get(3)?,
    inserted_at: row.get(4)?,
    updated_at:  row.get(5)?,
    approved:    row.get(6)?,
  })
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A sample collection backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteSampleStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteSampleStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── SampleStore impl ────────────────────────────────────────────────────────

impl SampleStore for SqliteSampleStore {
  type Error = Error;

  async fn insert(&self, input: NewSample) -> Result<Sample> {
    let sample = Sample {
      id:          Uuid::new_v4(),
      person:      input.person,
      category:    input.category,
      catchphrase: input.catchphrase,
      inserted_at: input.inserted_at,
      updated_at:  input.updated_at,
      approved:    input.approved,
    };

    let id_str = encode_uuid(sample.id);
    let row    = sample.clone();
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO samples (
             sample_id, person, category, catchphrase,
             inserted_at, updated_at, approved
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![
            id_str,
            row.person,
            row.category,
            row.catchphrase,
            row.inserted_at,
            row.updated_at,
            row.approved,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(sample)
  }

  async fn find(&self, id: Uuid) -> Result<Option<Sample>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawSample> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "SELECT {SAMPLE_COLUMNS} FROM samples WHERE sample_id = ?1"
              ),
              rusqlite::params![id_str],
              raw_sample_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawSample::into_sample).transpose()
  }

  async fn find_unapproved(&self, limit: usize) -> Result<Vec<Sample>> {
    let raws: Vec<RawSample> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {SAMPLE_COLUMNS} FROM samples
           WHERE approved = 0
           ORDER BY inserted_at, sample_id
           LIMIT ?1"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![limit as i64], raw_sample_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawSample::into_sample).collect()
  }

  async fn update(
    &self,
    id: Uuid,
    patch: SamplePatch,
    updated_at: i64,
  ) -> Result<bool> {
    let id_str = encode_uuid(id);

    let affected = self
      .conn
      .call(move |conn| {
        let mut sets: Vec<&str> = vec!["updated_at = ?"];
        let mut values: Vec<&dyn rusqlite::ToSql> = vec![&updated_at];

        if let Some(person) = patch.person.as_ref() {
          sets.push("person = ?");
          values.push(person);
        }
        if let Some(category) = patch.category.as_ref() {
          sets.push("category = ?");
          values.push(category);
        }
        if let Some(catchphrase) = patch.catchphrase.as_ref() {
          sets.push("catchphrase = ?");
          values.push(catchphrase);
        }
        if let Some(approved) = patch.approved.as_ref() {
          sets.push("approved = ?");
          values.push(approved);
        }
        values.push(&id_str);

        let sql = format!(
          "UPDATE samples SET {} WHERE sample_id = ?",
          sets.join(", ")
        );
        Ok(conn.execute(&sql, values.as_slice())?)
      })
      .await?;

    Ok(affected > 0)
  }

  async fn remove(&self, id: Uuid) -> Result<bool> {
    let id_str = encode_uuid(id);

    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM samples WHERE sample_id = ?1",
          rusqlite::params![id_str],
        )?)
      })
      .await?;

    Ok(affected > 0)
  }
}
