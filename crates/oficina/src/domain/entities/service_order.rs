//! ServiceOrder - Aggregate root of the repair order lifecycle
//!
//! The aggregate is a stateful entity mutated in place; its status field is an
//! immutable [`OrderStatus`] value that is replaced, never mutated. Every
//! validating method either fully applies its effect or errors before touching
//! any field, so the aggregate is consistent at every observable point.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{ExecutionPeriod, OrderStatus, Price};

/// Input for opening a new order. A vehicle can only be given together with
/// the client it belongs to.
#[derive(Debug, Clone, Default)]
pub struct CreateServiceOrderProps {
    pub client_id: Option<Uuid>,
    pub vehicle_id: Option<Uuid>,
}

/// Full field set used to rehydrate a persisted order.
#[derive(Debug, Clone)]
pub struct ServiceOrderProps {
    pub id: Uuid,
    pub status: OrderStatus,
    pub total: Price,
    pub client_id: Option<Uuid>,
    pub vehicle_id: Option<Uuid>,
    pub execution_period: ExecutionPeriod,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A repair-shop service order: client, vehicle, status, total and the
/// execution period bracketing the in_execution phase.
#[derive(Debug, Clone)]
pub struct ServiceOrder {
    id: Uuid,
    status: OrderStatus,
    total: Price,
    client_id: Option<Uuid>,
    vehicle_id: Option<Uuid>,
    execution_period: ExecutionPeriod,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ServiceOrder {
    /// Open a new order. Status always starts as `received` and the total at
    /// zero, regardless of the inputs.
    pub fn create(props: CreateServiceOrderProps) -> DomainResult<Self> {
        Self::check_client_vehicle(props.client_id, props.vehicle_id)?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            status: OrderStatus::initial(),
            total: Price::zero(),
            client_id: props.client_id,
            vehicle_id: props.vehicle_id,
            execution_period: ExecutionPeriod::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Rehydrate a persisted order. The client/vehicle invariant is re-checked
    /// so a corrupt row cannot produce an inconsistent aggregate.
    pub fn reconstruct(props: ServiceOrderProps) -> DomainResult<Self> {
        Self::check_client_vehicle(props.client_id, props.vehicle_id)?;
        Ok(Self {
            id: props.id,
            status: props.status,
            total: props.total,
            client_id: props.client_id,
            vehicle_id: props.vehicle_id,
            execution_period: props.execution_period,
            created_at: props.created_at,
            updated_at: props.updated_at,
        })
    }

    fn check_client_vehicle(client_id: Option<Uuid>, vehicle_id: Option<Uuid>) -> DomainResult<()> {
        if vehicle_id.is_some() && client_id.is_none() {
            return Err(DomainError::business_rule(
                "cannot have a vehicle without a client",
            ));
        }
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    // ---- accessors -------------------------------------------------------

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn total(&self) -> Price {
        self.total
    }

    pub fn client_id(&self) -> Option<Uuid> {
        self.client_id
    }

    pub fn vehicle_id(&self) -> Option<Uuid> {
        self.vehicle_id
    }

    pub fn execution_period(&self) -> ExecutionPeriod {
        self.execution_period
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn has_client(&self) -> bool {
        self.client_id.is_some()
    }

    pub fn has_vehicle(&self) -> bool {
        self.vehicle_id.is_some()
    }

    pub fn has_client_and_vehicle(&self) -> bool {
        self.has_client() && self.has_vehicle()
    }

    pub fn can_add_items(&self) -> bool {
        self.status.can_add_items()
    }

    pub fn is_in_progress(&self) -> bool {
        self.status.is_in_progress()
    }

    pub fn is_concluded(&self) -> bool {
        self.status.is_concluded()
    }

    /// An order can be physically removed only before execution starts.
    pub fn can_be_removed(&self) -> bool {
        !self.status.is_in_execution() && !self.is_concluded()
    }

    // ---- client / vehicle ------------------------------------------------

    /// Attach or replace the client. Never changes the status.
    pub fn set_client(&mut self, client_id: Uuid) {
        self.client_id = Some(client_id);
        self.touch();
    }

    /// Attach or replace the vehicle. Requires a client; while the order is
    /// still `received`, attaching the vehicle moves it into diagnosis.
    pub fn set_vehicle(&mut self, vehicle_id: Uuid) -> DomainResult<()> {
        if !self.has_client() {
            return Err(DomainError::business_rule(
                "client must be set before the vehicle",
            ));
        }
        self.vehicle_id = Some(vehicle_id);
        if self.status.is_received() {
            self.status = self.status.on_client_vehicle_added()?;
        }
        self.touch();
        Ok(())
    }

    /// Intake shortcut used by orchestration right after `create` when both
    /// references were supplied up front.
    pub fn begin_diagnosis(&mut self) -> DomainResult<()> {
        self.status = self.status.on_client_vehicle_added()?;
        self.touch();
        Ok(())
    }

    // ---- status ----------------------------------------------------------

    /// Manual transition along a legal lifecycle edge. Entering
    /// `in_execution` starts the execution period; entering `finished` ends it.
    pub fn update_status_manually(&mut self, target: OrderStatus) -> DomainResult<()> {
        let next = self.status.transition_to(target)?;
        self.status = next;
        if next.is_in_execution() {
            self.execution_period = self.execution_period.start();
        }
        if next.is_finished() && self.execution_period.is_started() {
            self.execution_period = self.execution_period.finish()?;
        }
        self.touch();
        Ok(())
    }

    /// Advance to `awaiting_approval` after items were attached. Silently does
    /// nothing when items cannot be added in the current status.
    pub fn transition_to_awaiting_approval(&mut self) {
        if !self.status.can_add_items() {
            return;
        }
        // can_add_items implies the transition below is legal
        if let Ok(next) = self.status.on_items_added() {
            self.status = next;
            self.touch();
        }
    }

    /// Customer accepted the budget: execution starts now.
    pub fn approve_budget(&mut self) -> DomainResult<()> {
        if !self.status.is_awaiting_approval() {
            return Err(DomainError::business_rule(
                "only orders awaiting approval can be approved",
            ));
        }
        self.status = self.status.transition_to(OrderStatus::InExecution)?;
        self.execution_period = self.execution_period.start();
        self.touch();
        Ok(())
    }

    /// Customer declined the budget: the order is canceled.
    pub fn reject_budget(&mut self) -> DomainResult<()> {
        if !self.status.is_awaiting_approval() {
            return Err(DomainError::business_rule(
                "only orders awaiting approval can be rejected",
            ));
        }
        self.status = self.status.transition_to(OrderStatus::Canceled)?;
        self.touch();
        Ok(())
    }

    // ---- execution -------------------------------------------------------

    /// Record the execution start. Idempotent when already started.
    pub fn start_execution(&mut self) -> DomainResult<()> {
        if !self.status.is_in_execution() {
            return Err(DomainError::business_rule(
                "service order must be in_execution to start execution",
            ));
        }
        self.execution_period = self.execution_period.start();
        self.touch();
        Ok(())
    }

    /// Record the execution end.
    pub fn finish_execution(&mut self) -> DomainResult<()> {
        self.execution_period = self.execution_period.finish()?;
        self.touch();
        Ok(())
    }

    /// Elapsed execution time, when both ends were recorded.
    pub fn execution_duration(&self) -> Option<Duration> {
        self.execution_period.duration()
    }

    // ---- total -----------------------------------------------------------

    /// Replace the accumulated total. A positive total while items can still
    /// be added means a budget exists, so the order advances to
    /// `awaiting_approval` automatically.
    pub fn update_total(&mut self, total: Price) -> DomainResult<()> {
        self.total = total;
        if total.is_positive() && self.status.can_add_items() {
            self.status = self.status.on_items_added()?;
        }
        self.touch();
        Ok(())
    }
}

impl PartialEq for ServiceOrder {
    /// Entity equality: two orders are the same order iff they share an id.
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ServiceOrder {}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Uuid {
        Uuid::new_v4()
    }

    fn order_with_client_and_vehicle() -> ServiceOrder {
        ServiceOrder::create(CreateServiceOrderProps {
            client_id: Some(client()),
            vehicle_id: Some(Uuid::new_v4()),
        })
        .unwrap()
    }

    fn price(v: f64) -> Price {
        Price::new(v).unwrap()
    }

    // ---- creation --------------------------------------------------------

    #[test]
    fn create_with_client_and_vehicle() {
        let client_id = client();
        let vehicle_id = Uuid::new_v4();
        let order = ServiceOrder::create(CreateServiceOrderProps {
            client_id: Some(client_id),
            vehicle_id: Some(vehicle_id),
        })
        .unwrap();

        assert_eq!(order.client_id(), Some(client_id));
        assert_eq!(order.vehicle_id(), Some(vehicle_id));
        assert_eq!(order.status(), OrderStatus::Received);
        assert_eq!(order.total(), Price::zero());
        assert!(!order.execution_period().is_started());
    }

    #[test]
    fn create_without_client_and_vehicle() {
        let order = ServiceOrder::create(CreateServiceOrderProps::default()).unwrap();
        assert_eq!(order.client_id(), None);
        assert_eq!(order.vehicle_id(), None);
        assert_eq!(order.status(), OrderStatus::Received);
    }

    #[test]
    fn create_with_vehicle_only_fails() {
        let err = ServiceOrder::create(CreateServiceOrderProps {
            client_id: None,
            vehicle_id: Some(Uuid::new_v4()),
        })
        .unwrap_err();

        assert_eq!(
            err,
            DomainError::BusinessRule("cannot have a vehicle without a client".into())
        );
    }

    #[test]
    fn status_always_starts_received() {
        let orders = [
            ServiceOrder::create(CreateServiceOrderProps::default()).unwrap(),
            ServiceOrder::create(CreateServiceOrderProps {
                client_id: Some(client()),
                vehicle_id: None,
            })
            .unwrap(),
            order_with_client_and_vehicle(),
        ];
        for order in orders {
            assert_eq!(order.status(), OrderStatus::Received);
            assert!(order.total().is_zero());
        }
    }

    #[test]
    fn each_order_gets_its_own_id() {
        let a = ServiceOrder::create(CreateServiceOrderProps::default()).unwrap();
        let b = ServiceOrder::create(CreateServiceOrderProps::default()).unwrap();
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    // ---- reconstruction --------------------------------------------------

    #[test]
    fn reconstruct_keeps_every_field() {
        let id = Uuid::new_v4();
        let client_id = client();
        let now = Utc::now();
        let order = ServiceOrder::reconstruct(ServiceOrderProps {
            id,
            status: OrderStatus::InExecution,
            total: price(350.5),
            client_id: Some(client_id),
            vehicle_id: Some(Uuid::new_v4()),
            execution_period: ExecutionPeriod::new().start(),
            created_at: now,
            updated_at: now,
        })
        .unwrap();

        assert_eq!(order.id(), id);
        assert_eq!(order.status(), OrderStatus::InExecution);
        assert_eq!(order.total(), price(350.5));
        assert_eq!(order.client_id(), Some(client_id));
        assert_eq!(order.created_at(), now);
    }

    #[test]
    fn reconstruct_rechecks_vehicle_without_client() {
        let now = Utc::now();
        let err = ServiceOrder::reconstruct(ServiceOrderProps {
            id: Uuid::new_v4(),
            status: OrderStatus::initial(),
            total: Price::zero(),
            client_id: None,
            vehicle_id: Some(Uuid::new_v4()),
            execution_period: ExecutionPeriod::new(),
            created_at: now,
            updated_at: now,
        })
        .unwrap_err();
        assert!(matches!(err, DomainError::BusinessRule(_)));
    }

    // ---- client / vehicle ------------------------------------------------

    #[test]
    fn set_client_keeps_status_and_bumps_updated_at() {
        let mut order = ServiceOrder::create(CreateServiceOrderProps::default()).unwrap();
        let before = order.updated_at();

        order.set_client(client());

        assert!(order.has_client());
        assert_eq!(order.status(), OrderStatus::Received);
        assert!(order.updated_at() >= before);
    }

    #[test]
    fn set_vehicle_without_client_fails() {
        let mut order = ServiceOrder::create(CreateServiceOrderProps::default()).unwrap();
        let err = order.set_vehicle(Uuid::new_v4()).unwrap_err();
        assert_eq!(
            err,
            DomainError::BusinessRule("client must be set before the vehicle".into())
        );
        assert!(!order.has_vehicle());
    }

    #[test]
    fn set_vehicle_after_client_moves_into_diagnosis() {
        let mut order = ServiceOrder::create(CreateServiceOrderProps::default()).unwrap();
        order.set_client(client());
        assert_eq!(order.status(), OrderStatus::Received);

        order.set_vehicle(Uuid::new_v4()).unwrap();

        assert!(order.has_client_and_vehicle());
        assert_eq!(order.status(), OrderStatus::InDiagnosis);
    }

    #[test]
    fn set_vehicle_outside_received_keeps_status() {
        let mut order = order_with_client_and_vehicle();
        order.update_status_manually(OrderStatus::InDiagnosis).unwrap();

        order.set_vehicle(Uuid::new_v4()).unwrap();

        assert_eq!(order.status(), OrderStatus::InDiagnosis);
    }

    #[test]
    fn client_can_be_replaced() {
        let mut order = ServiceOrder::create(CreateServiceOrderProps::default()).unwrap();
        order.set_client(client());
        let replacement = client();
        order.set_client(replacement);
        assert_eq!(order.client_id(), Some(replacement));
    }

    // ---- status management -----------------------------------------------

    #[test]
    fn walks_the_full_manual_path() {
        let mut order = order_with_client_and_vehicle();

        order.update_status_manually(OrderStatus::InDiagnosis).unwrap();
        order
            .update_status_manually(OrderStatus::AwaitingApproval)
            .unwrap();
        order.update_status_manually(OrderStatus::InExecution).unwrap();
        order.update_status_manually(OrderStatus::Finished).unwrap();
        order.update_status_manually(OrderStatus::Delivered).unwrap();

        assert_eq!(order.status(), OrderStatus::Delivered);
        assert!(order.is_concluded());
    }

    #[test]
    fn illegal_manual_transition_leaves_order_untouched() {
        let mut order = order_with_client_and_vehicle();
        let before = order.updated_at();

        let err = order
            .update_status_manually(OrderStatus::Finished)
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidTransition(_)));
        assert_eq!(order.status(), OrderStatus::Received);
        assert_eq!(order.updated_at(), before);
    }

    #[test]
    fn entering_in_execution_starts_the_period() {
        let mut order = order_with_client_and_vehicle();
        order.update_status_manually(OrderStatus::InDiagnosis).unwrap();
        order
            .update_status_manually(OrderStatus::AwaitingApproval)
            .unwrap();
        assert!(!order.execution_period().is_started());

        order.update_status_manually(OrderStatus::InExecution).unwrap();

        assert!(order.execution_period().is_started());
        assert!(!order.execution_period().is_finished());
    }

    #[test]
    fn entering_finished_ends_the_period() {
        let mut order = order_with_client_and_vehicle();
        order.update_status_manually(OrderStatus::InDiagnosis).unwrap();
        order
            .update_status_manually(OrderStatus::AwaitingApproval)
            .unwrap();
        order.update_status_manually(OrderStatus::InExecution).unwrap();

        order.update_status_manually(OrderStatus::Finished).unwrap();

        assert!(order.execution_period().is_finished());
        assert!(order.execution_duration().is_some());
    }

    #[test]
    fn awaiting_approval_transition_is_silent_when_not_allowed() {
        let mut order = order_with_client_and_vehicle();
        order.update_status_manually(OrderStatus::InDiagnosis).unwrap();
        order
            .update_status_manually(OrderStatus::AwaitingApproval)
            .unwrap();
        order.update_status_manually(OrderStatus::InExecution).unwrap();
        assert!(!order.can_add_items());

        // no error, no change
        order.transition_to_awaiting_approval();

        assert_eq!(order.status(), OrderStatus::InExecution);
    }

    #[test]
    fn awaiting_approval_transition_fires_from_diagnosis() {
        let mut order = order_with_client_and_vehicle();
        order.update_status_manually(OrderStatus::InDiagnosis).unwrap();
        assert!(order.can_add_items());

        order.transition_to_awaiting_approval();

        assert_eq!(order.status(), OrderStatus::AwaitingApproval);
    }

    // ---- budget ----------------------------------------------------------

    fn order_awaiting_approval() -> ServiceOrder {
        let mut order = order_with_client_and_vehicle();
        order.update_status_manually(OrderStatus::InDiagnosis).unwrap();
        order.transition_to_awaiting_approval();
        order
    }

    #[test]
    fn approve_budget_starts_execution() {
        let mut order = order_awaiting_approval();
        assert!(!order.execution_period().is_started());

        order.approve_budget().unwrap();

        assert_eq!(order.status(), OrderStatus::InExecution);
        assert!(order.execution_period().is_started());
    }

    #[test]
    fn reject_budget_cancels_the_order() {
        let mut order = order_awaiting_approval();

        order.reject_budget().unwrap();

        assert_eq!(order.status(), OrderStatus::Canceled);
        assert!(order.is_concluded());
    }

    #[test]
    fn approve_and_reject_require_awaiting_approval() {
        let mut order = order_awaiting_approval();
        order.update_status_manually(OrderStatus::InExecution).unwrap();

        assert_eq!(
            order.approve_budget().unwrap_err(),
            DomainError::BusinessRule("only orders awaiting approval can be approved".into())
        );
        assert_eq!(
            order.reject_budget().unwrap_err(),
            DomainError::BusinessRule("only orders awaiting approval can be rejected".into())
        );
    }

    // ---- execution -------------------------------------------------------

    #[test]
    fn start_execution_is_idempotent_while_in_execution() {
        let mut order = order_awaiting_approval();
        order.approve_budget().unwrap();
        let started_at = order.execution_period().started_at();

        order.start_execution().unwrap();

        assert_eq!(order.execution_period().started_at(), started_at);
    }

    #[test]
    fn start_execution_requires_in_execution_status() {
        let mut order = order_with_client_and_vehicle();
        let err = order.start_execution().unwrap_err();
        assert_eq!(
            err,
            DomainError::BusinessRule("service order must be in_execution to start execution".into())
        );
    }

    #[test]
    fn finish_execution_requires_a_started_period() {
        let mut order = order_with_client_and_vehicle();
        let err = order.finish_execution().unwrap_err();
        assert_eq!(
            err,
            DomainError::BusinessRule("execution must be started before it can be finished".into())
        );
    }

    #[test]
    fn finish_execution_records_the_end() {
        let mut order = order_awaiting_approval();
        order.approve_budget().unwrap();

        order.finish_execution().unwrap();

        assert!(order.execution_period().is_finished());
        assert!(order.execution_duration().unwrap() >= Duration::zero());
    }

    // ---- total -----------------------------------------------------------

    #[test]
    fn positive_total_in_diagnosis_advances_to_awaiting_approval() {
        let mut order = order_with_client_and_vehicle();
        order.update_status_manually(OrderStatus::InDiagnosis).unwrap();

        order.update_total(price(150.5)).unwrap();

        assert_eq!(order.total(), price(150.5));
        assert_eq!(order.status(), OrderStatus::AwaitingApproval);
    }

    #[test]
    fn zero_total_never_advances() {
        let mut order = order_with_client_and_vehicle();
        order.update_status_manually(OrderStatus::InDiagnosis).unwrap();

        order.update_total(price(100.0)).unwrap();
        // an order already awaiting approval can have its total zeroed again
        let mut fresh = order_with_client_and_vehicle();
        fresh.update_status_manually(OrderStatus::InDiagnosis).unwrap();
        fresh.update_total(Price::zero()).unwrap();

        assert_eq!(fresh.total(), Price::zero());
        assert_eq!(fresh.status(), OrderStatus::InDiagnosis);
    }

    #[test]
    fn total_outside_diagnosis_updates_without_advancing() {
        let mut order = order_awaiting_approval();
        order.update_status_manually(OrderStatus::InExecution).unwrap();

        order.update_total(price(150.0)).unwrap();

        assert_eq!(order.total(), price(150.0));
        assert_eq!(order.status(), OrderStatus::InExecution);
    }

    // ---- full flows ------------------------------------------------------

    #[test]
    fn full_approval_flow() {
        let mut order = order_with_client_and_vehicle();
        assert_eq!(order.status(), OrderStatus::Received);

        order.update_status_manually(OrderStatus::InDiagnosis).unwrap();
        order.update_total(price(200.0)).unwrap();
        assert_eq!(order.status(), OrderStatus::AwaitingApproval);

        order.approve_budget().unwrap();
        assert_eq!(order.status(), OrderStatus::InExecution);
        assert!(order.execution_period().is_started());

        order.update_status_manually(OrderStatus::Finished).unwrap();
        assert!(order.execution_period().is_finished());

        order.update_status_manually(OrderStatus::Delivered).unwrap();
        assert!(order.is_concluded());
    }

    #[test]
    fn full_rejection_flow() {
        let mut order = order_with_client_and_vehicle();
        order.update_status_manually(OrderStatus::InDiagnosis).unwrap();
        order.update_total(price(200.0)).unwrap();

        order.reject_budget().unwrap();

        assert_eq!(order.status(), OrderStatus::Canceled);
        assert!(order.is_concluded());
    }

    #[test]
    fn intake_flow_without_initial_references() {
        let mut order = ServiceOrder::create(CreateServiceOrderProps::default()).unwrap();
        order.set_client(client());
        assert_eq!(order.status(), OrderStatus::Received);

        order.set_vehicle(Uuid::new_v4()).unwrap();
        assert_eq!(order.status(), OrderStatus::InDiagnosis);

        order.update_total(price(150.0)).unwrap();
        assert_eq!(order.status(), OrderStatus::AwaitingApproval);
    }

    // ---- bookkeeping -----------------------------------------------------

    #[test]
    fn created_at_survives_every_mutation() {
        let mut order = order_with_client_and_vehicle();
        let created_at = order.created_at();

        order.update_status_manually(OrderStatus::InDiagnosis).unwrap();
        order.update_total(price(100.0)).unwrap();
        order.set_client(client());

        assert_eq!(order.created_at(), created_at);
        assert!(order.updated_at() >= created_at);
    }

    #[test]
    fn removal_is_blocked_once_execution_starts() {
        let mut order = order_awaiting_approval();
        assert!(order.can_be_removed());

        order.approve_budget().unwrap();
        assert!(!order.can_be_removed());

        order.update_status_manually(OrderStatus::Finished).unwrap();
        assert!(!order.can_be_removed());
    }
}
