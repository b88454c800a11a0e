//! ExecutionPeriod - Start/end timestamps bracketing the in_execution phase

use chrono::{DateTime, Duration, Utc};

use crate::domain::errors::{DomainError, DomainResult};

/// Immutable pair of optional timestamps. `start`/`finish` return a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecutionPeriod {
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
}

impl ExecutionPeriod {
    /// A period that has not started yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate from persisted timestamps.
    pub fn reconstruct(
        started_at: Option<DateTime<Utc>>,
        finished_at: Option<DateTime<Utc>>,
    ) -> DomainResult<Self> {
        if finished_at.is_some() && started_at.is_none() {
            return Err(DomainError::business_rule(
                "execution period cannot have an end without a start",
            ));
        }
        Ok(Self {
            started_at,
            finished_at,
        })
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Period with the start recorded now. No-op when already started.
    pub fn start(&self) -> Self {
        if self.is_started() {
            return *self;
        }
        Self {
            started_at: Some(Utc::now()),
            finished_at: self.finished_at,
        }
    }

    /// Period with the end recorded now.
    pub fn finish(&self) -> DomainResult<Self> {
        if !self.is_started() {
            return Err(DomainError::business_rule(
                "execution must be started before it can be finished",
            ));
        }
        if self.is_finished() {
            return Ok(*self);
        }
        Ok(Self {
            started_at: self.started_at,
            finished_at: Some(Utc::now()),
        })
    }

    /// Elapsed time between start and end, when both are recorded.
    pub fn duration(&self) -> Option<Duration> {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }
}
