use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entity::{EntityId, EntityStatus, SpendEntity};
use crate::domain::project::ProjectId;
use crate::errors::DomainError;
use crate::gate::{available_actions_for, status_implication, ActionKind};
use crate::notify::{format_usd, ActionNotification, NotificationSink};

/// Partial update applied to an entity record. Replaces the per-page
/// `{id: partial}` override maps the prototype scattered around: one owner,
/// one merge point.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityPatch {
    pub status: Option<EntityStatus>,
    pub amount: Option<Decimal>,
    pub due_date: Option<NaiveDate>,
}

impl EntityPatch {
    pub fn status(status: EntityStatus) -> Self {
        Self { status: Some(status), ..Self::default() }
    }
}

/// What an invoked action did to the entity. `previous == current` when the
/// action carries no status implication.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub action: ActionKind,
    pub previous: EntityStatus,
    pub current: EntityStatus,
}

/// In-memory owner of all spend entity records, keyed by id. Process-lifetime
/// only; reset on restart, exactly like the fixture-backed prototype.
#[derive(Clone, Debug, Default)]
pub struct EntityStore {
    entities: BTreeMap<EntityId, SpendEntity>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(entities: Vec<SpendEntity>) -> Self {
        let mut store = Self::new();
        for entity in entities {
            store.insert(entity);
        }
        store
    }

    pub fn insert(&mut self, entity: SpendEntity) {
        self.entities.insert(entity.id.clone(), entity);
    }

    pub fn get(&self, id: &EntityId) -> Option<&SpendEntity> {
        self.entities.get(id)
    }

    pub fn get_mut(&mut self, id: &EntityId) -> Option<&mut SpendEntity> {
        self.entities.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpendEntity> {
        self.entities.values()
    }

    pub fn by_project(&self, project: &ProjectId) -> Vec<&SpendEntity> {
        self.iter().filter(|entity| &entity.project == project).collect()
    }

    /// Tab counts the pages render, e.g. how many records sit in each status.
    pub fn status_counts(&self) -> BTreeMap<EntityStatus, usize> {
        let mut counts = BTreeMap::new();
        for entity in self.iter() {
            *counts.entry(entity.status).or_insert(0) += 1;
        }
        counts
    }

    /// Merge a partial update into the record.
    pub fn apply_patch(&mut self, id: &EntityId, patch: EntityPatch) -> Result<(), DomainError> {
        let entity = self
            .entities
            .get_mut(id)
            .ok_or_else(|| DomainError::UnknownEntity { id: id.0.clone() })?;

        if let Some(status) = patch.status {
            tracing::debug!(entity = %id.0, from = ?entity.status, to = ?status, "status patched");
            entity.status = status;
        }
        if let Some(amount) = patch.amount {
            entity.amount = amount;
        }
        if let Some(due_date) = patch.due_date {
            entity.due_date = Some(due_date);
        }
        Ok(())
    }

    /// Invoke a terminal action on an entity: verify the gate currently
    /// offers it, apply the implied status transition, and emit the page
    /// notification. `today` feeds the overdue takeover, which swaps the
    /// review actions for payment on late in-flight records.
    pub fn invoke_action<S>(
        &mut self,
        id: &EntityId,
        action: ActionKind,
        today: NaiveDate,
        sink: &S,
    ) -> Result<ActionOutcome, DomainError>
    where
        S: NotificationSink,
    {
        let entity = self
            .entities
            .get_mut(id)
            .ok_or_else(|| DomainError::UnknownEntity { id: id.0.clone() })?;

        if !available_actions_for(entity, today).contains(&action) {
            return Err(DomainError::ActionNotAvailable {
                action,
                kind: entity.kind,
                status: entity.status,
            });
        }

        let previous = entity.status;
        if let Some(next) = status_implication(action, entity.kind) {
            entity.status = next;
        }
        tracing::debug!(
            entity = %id.0,
            action = ?action,
            from = ?previous,
            to = ?entity.status,
            "action invoked"
        );

        sink.emit(ActionNotification { action, message: action_message(entity, action) });
        Ok(ActionOutcome { action, previous, current: entity.status })
    }
}

/// Human-readable toast message for an invoked action, mirroring the
/// prototype's drawer copy.
pub fn action_message(entity: &SpendEntity, action: ActionKind) -> String {
    match action {
        ActionKind::Submit => format!("Submitted {} for approval", entity.description),
        ActionKind::SaveDraft => format!("Saved draft — {}", entity.description),
        ActionKind::Approve => format!(
            "Approved {} — {} ({})",
            entity.description,
            entity.counterparty,
            format_usd(entity.amount)
        ),
        ActionKind::RequestChanges => format!("Requested changes on {}", entity.description),
        ActionKind::Reject => {
            format!("Rejected {} — {}", entity.description, entity.counterparty)
        }
        ActionKind::Flag => format!("Flagged {} for review", entity.description),
        ActionKind::SchedulePayment => format!("Payment scheduled for {}", entity.description),
        ActionKind::PayNow => {
            format!("Paid {} to {}", format_usd(entity.amount), entity.counterparty)
        }
        ActionKind::DownloadReceipt => format!("Downloaded receipt for {}", entity.description),
        ActionKind::ViewAuditTrail => format!("Viewing audit trail for {}", entity.description),
        ActionKind::ConvertToPurchaseOrder => {
            format!("Converted {} to Purchase Order", entity.description)
        }
        ActionKind::IssueVirtualCard => {
            format!("Issued virtual card for {}", entity.description)
        }
        ActionKind::Dispute => {
            format!("Disputed {} — {}", entity.description, entity.counterparty)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;

    use crate::approvals::ApprovalWorkflow;
    use crate::domain::entity::{EntityId, EntityKind, EntityStatus, SpendCategory, SpendEntity};
    use crate::domain::project::{CostCodeId, ProjectId};
    use crate::errors::DomainError;
    use crate::gate::ActionKind;
    use crate::notify::InMemoryNotificationSink;

    use super::{EntityPatch, EntityStore};

    fn bill(id: &str, status: EntityStatus) -> SpendEntity {
        SpendEntity {
            id: EntityId(id.to_string()),
            kind: EntityKind::Bill,
            description: "INV-4421".to_string(),
            counterparty: "KMG Concrete Services".to_string(),
            amount: Decimal::new(25_000_00, 2),
            status,
            category: SpendCategory::Service,
            project: ProjectId("proj-1".to_string()),
            cost_code: CostCodeId("03-000".to_string()),
            due_date: NaiveDate::from_ymd_opt(2024, 6, 21),
            receipt: None,
            workflow: ApprovalWorkflow::new(),
            created_at: Utc::now(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn patch_merges_only_the_given_fields() {
        let mut store = EntityStore::seed(vec![bill("bill-1", EntityStatus::Pending)]);
        store
            .apply_patch(
                &EntityId("bill-1".to_string()),
                EntityPatch::status(EntityStatus::ForApproval),
            )
            .expect("entity exists");

        let patched = store.get(&EntityId("bill-1".to_string())).expect("entity exists");
        assert_eq!(patched.status, EntityStatus::ForApproval);
        assert_eq!(patched.amount, Decimal::new(25_000_00, 2));
    }

    #[test]
    fn patching_an_unknown_entity_fails() {
        let mut store = EntityStore::new();
        let error = store
            .apply_patch(&EntityId("missing".to_string()), EntityPatch::default())
            .expect_err("no such entity");
        assert_eq!(error, DomainError::UnknownEntity { id: "missing".to_string() });
    }

    #[test]
    fn invoking_an_offered_action_transitions_and_notifies() {
        let mut store = EntityStore::seed(vec![bill("bill-1", EntityStatus::Scheduled)]);
        let sink = InMemoryNotificationSink::default();

        let outcome = store
            .invoke_action(&EntityId("bill-1".to_string()), ActionKind::PayNow, date(2024, 6, 15), &sink)
            .expect("pay now is offered while scheduled");

        assert_eq!(outcome.previous, EntityStatus::Scheduled);
        assert_eq!(outcome.current, EntityStatus::Paid);
        assert_eq!(
            sink.messages(),
            vec!["Paid $25,000.00 to KMG Concrete Services".to_string()]
        );
    }

    #[test]
    fn unavailable_actions_are_rejected_without_mutation() {
        let mut store = EntityStore::seed(vec![bill("bill-1", EntityStatus::Paid)]);
        let sink = InMemoryNotificationSink::default();

        let error = store
            .invoke_action(&EntityId("bill-1".to_string()), ActionKind::Approve, date(2024, 6, 15), &sink)
            .expect_err("paid bills cannot be approved");

        assert!(matches!(error, DomainError::ActionNotAvailable { .. }));
        assert_eq!(
            store.get(&EntityId("bill-1".to_string())).expect("entity exists").status,
            EntityStatus::Paid
        );
        assert!(sink.notifications().is_empty());
    }

    #[test]
    fn non_mutating_actions_keep_the_status() {
        let mut store = EntityStore::seed(vec![bill("bill-1", EntityStatus::Paid)]);
        let sink = InMemoryNotificationSink::default();

        let outcome = store
            .invoke_action(
                &EntityId("bill-1".to_string()),
                ActionKind::DownloadReceipt,
                date(2024, 6, 15),
                &sink,
            )
            .expect("receipts can be downloaded once paid");

        assert_eq!(outcome.previous, outcome.current);
        assert_eq!(sink.messages(), vec!["Downloaded receipt for INV-4421".to_string()]);
    }

    #[test]
    fn overdue_pending_bill_can_be_paid_directly() {
        let mut store = EntityStore::seed(vec![bill("bill-1", EntityStatus::Pending)]);
        let sink = InMemoryNotificationSink::default();

        // Past due: the review actions give way to payment.
        let error = store
            .invoke_action(&EntityId("bill-1".to_string()), ActionKind::Approve, date(2024, 6, 28), &sink)
            .expect_err("late bills skip review");
        assert!(matches!(error, DomainError::ActionNotAvailable { .. }));

        let outcome = store
            .invoke_action(&EntityId("bill-1".to_string()), ActionKind::PayNow, date(2024, 6, 28), &sink)
            .expect("late bills can be paid");
        assert_eq!(outcome.previous, EntityStatus::Pending);
        assert_eq!(outcome.current, EntityStatus::Paid);
    }

    #[test]
    fn status_counts_reflect_the_current_records() {
        let mut store = EntityStore::seed(vec![
            bill("bill-1", EntityStatus::Pending),
            bill("bill-2", EntityStatus::Pending),
            bill("bill-3", EntityStatus::Paid),
        ]);
        let sink = InMemoryNotificationSink::default();
        store
            .invoke_action(&EntityId("bill-1".to_string()), ActionKind::Reject, date(2024, 6, 15), &sink)
            .expect("pending bills can be rejected");

        let counts = store.status_counts();
        assert_eq!(counts.get(&EntityStatus::Pending), Some(&1));
        assert_eq!(counts.get(&EntityStatus::Rejected), Some(&1));
        assert_eq!(counts.get(&EntityStatus::Paid), Some(&1));
    }

    #[test]
    fn by_project_filters_records() {
        let mut other = bill("bill-2", EntityStatus::Pending);
        other.project = ProjectId("proj-2".to_string());
        let store = EntityStore::seed(vec![bill("bill-1", EntityStatus::Pending), other]);

        let records = store.by_project(&ProjectId("proj-1".to_string()));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id.0, "bill-1");
    }
}
