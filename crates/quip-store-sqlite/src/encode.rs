//! Encoding and decoding helpers between the domain type and `samples` rows.
//!
//! UUIDs are stored as hyphenated lowercase strings; timestamps as plain
//! integer unix seconds.

use quip_core::sample::Sample;
use uuid::Uuid;

use crate::Result;

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

/// Raw values read directly from a `samples` row.
pub struct RawSample {
  pub sample_id:   String,
  pub person:      String,
  pub category:    String,
  pub catchphrase: String,
  pub inserted_at: i64,
  pub updated_at:  i64,
  pub approved:    bool,
}

impl RawSample {
  pub fn into_sample(self) -> Result<Sample> {
    Ok(Sample {
      id:          decode_uuid(&self.sample_id)?,
      person:      self.person,
      category:    self.category,
      catchphrase: self.catchphrase,
      inserted_at: self.inserted_at,
      updated_at:  self.updated_at,
      approved:    self.approved,
    })
  }
}
