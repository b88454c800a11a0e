//! OrderStatus - Service order lifecycle status
//!
//! Immutable value object. Every transition returns a new value; the caller
//! (the `ServiceOrder` aggregate) replaces its status field, never mutates it.
//!
//! Lifecycle:
//!
//! ```text
//! received -> in_diagnosis -> awaiting_approval -> in_execution -> finished -> delivered
//!                                       \-> canceled -----------------------/
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::errors::{DomainError, DomainResult};

/// Service order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Received,
    InDiagnosis,
    AwaitingApproval,
    InExecution,
    Finished,
    Canceled,
    Delivered,
}

/// All statuses, in lifecycle order. Useful for iteration in queries/tests.
pub const ALL_STATUSES: [OrderStatus; 7] = [
    OrderStatus::Received,
    OrderStatus::InDiagnosis,
    OrderStatus::AwaitingApproval,
    OrderStatus::InExecution,
    OrderStatus::Finished,
    OrderStatus::Canceled,
    OrderStatus::Delivered,
];

impl OrderStatus {
    /// Status of a freshly opened order.
    pub fn initial() -> Self {
        OrderStatus::Received
    }

    /// Rebuild a status from its persisted canonical form.
    ///
    /// Only the lowercase canonical strings are accepted; the raw value is
    /// never normalized, so `"RECEIVED"` is rejected just like garbage input.
    pub fn reconstruct(raw: &str) -> DomainResult<Self> {
        if raw.is_empty() {
            return Err(DomainError::InvalidStatus(
                "service order status is required".to_string(),
            ));
        }
        match raw {
            "received" => Ok(OrderStatus::Received),
            "in_diagnosis" => Ok(OrderStatus::InDiagnosis),
            "awaiting_approval" => Ok(OrderStatus::AwaitingApproval),
            "in_execution" => Ok(OrderStatus::InExecution),
            "finished" => Ok(OrderStatus::Finished),
            "canceled" => Ok(OrderStatus::Canceled),
            "delivered" => Ok(OrderStatus::Delivered),
            other => Err(DomainError::InvalidStatus(format!(
                "invalid status: {other}"
            ))),
        }
    }

    /// Canonical string form, round-trips through [`OrderStatus::reconstruct`].
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Received => "received",
            OrderStatus::InDiagnosis => "in_diagnosis",
            OrderStatus::AwaitingApproval => "awaiting_approval",
            OrderStatus::InExecution => "in_execution",
            OrderStatus::Finished => "finished",
            OrderStatus::Canceled => "canceled",
            OrderStatus::Delivered => "delivered",
        }
    }

    pub fn is_received(&self) -> bool {
        matches!(self, OrderStatus::Received)
    }

    pub fn is_in_diagnosis(&self) -> bool {
        matches!(self, OrderStatus::InDiagnosis)
    }

    pub fn is_awaiting_approval(&self) -> bool {
        matches!(self, OrderStatus::AwaitingApproval)
    }

    pub fn is_in_execution(&self) -> bool {
        matches!(self, OrderStatus::InExecution)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, OrderStatus::Finished)
    }

    pub fn is_canceled(&self) -> bool {
        matches!(self, OrderStatus::Canceled)
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }

    /// Open statuses: the shop still has work to do on the order.
    pub fn is_in_progress(&self) -> bool {
        matches!(
            self,
            OrderStatus::Received
                | OrderStatus::InDiagnosis
                | OrderStatus::AwaitingApproval
                | OrderStatus::InExecution
        )
    }

    /// Terminal-ish statuses: finished, canceled or delivered.
    pub fn is_concluded(&self) -> bool {
        matches!(
            self,
            OrderStatus::Finished | OrderStatus::Canceled | OrderStatus::Delivered
        )
    }

    /// Items (services/parts) may only be attached while the diagnosis runs.
    pub fn can_add_items(&self) -> bool {
        matches!(self, OrderStatus::InDiagnosis)
    }

    /// Automatic transition: client and vehicle were attached to the order.
    pub fn on_client_vehicle_added(&self) -> DomainResult<Self> {
        if !self.is_received() {
            return Err(DomainError::InvalidTransition(
                "can only transition to in_diagnosis when status is received".to_string(),
            ));
        }
        Ok(OrderStatus::InDiagnosis)
    }

    /// Automatic transition: items were added and a budget now exists.
    pub fn on_items_added(&self) -> DomainResult<Self> {
        if !self.is_in_diagnosis() {
            return Err(DomainError::InvalidTransition(
                "can only transition to awaiting_approval when status is in_diagnosis".to_string(),
            ));
        }
        Ok(OrderStatus::AwaitingApproval)
    }

    /// Manual transition along one of the legal lifecycle edges.
    ///
    /// `delivered` is terminal; there is no edge out of it, and same-state
    /// "transitions" are rejected like any other illegal pair.
    pub fn transition_to(&self, target: OrderStatus) -> DomainResult<Self> {
        use OrderStatus::*;
        let allowed = matches!(
            (self, target),
            (Received, InDiagnosis)
                | (InDiagnosis, AwaitingApproval)
                | (AwaitingApproval, InExecution)
                | (AwaitingApproval, Canceled)
                | (InExecution, Finished)
                | (Finished, Delivered)
                | (Canceled, Delivered)
        );
        if !allowed {
            return Err(DomainError::InvalidTransition(format!(
                "invalid manual transition from {} to {}",
                self.as_str(),
                target.as_str()
            )));
        }
        Ok(target)
    }

    /// Display/sort priority: orders being executed come first, concluded
    /// orders last (stable sort keeps insertion order between them).
    pub fn priority(&self) -> u32 {
        match self {
            OrderStatus::InExecution => 1,
            OrderStatus::AwaitingApproval => 2,
            OrderStatus::InDiagnosis => 3,
            OrderStatus::Received => 4,
            OrderStatus::Finished | OrderStatus::Canceled | OrderStatus::Delivered => 999,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::reconstruct(s)
    }
}
