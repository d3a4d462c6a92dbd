// Analysis pipelines: one document at a time, or a concurrent batch.

pub mod analyze;
pub mod batch;
