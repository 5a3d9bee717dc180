use thiserror::Error;

use crate::time::{Date, InvalidRange};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    #[error(transparent)]
    InvalidRange(#[from] InvalidRange),
    #[error("the run {start}..={end} claims to be {length} days long, but spans {span} days")]
    InvalidRun {
        start: Date,
        end: Date,
        length: usize,
        span: i64,
    },
}
