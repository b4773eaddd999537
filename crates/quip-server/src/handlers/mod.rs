//! Route handlers, grouped by resource.

pub mod samples;
pub mod unapproved;
