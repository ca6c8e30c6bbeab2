use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::approvals::ApprovalWorkflow;
use crate::domain::project::{CostCodeId, ProjectId};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Bill,
    Expense,
    ProcurementRequest,
    PurchaseOrder,
}

/// Business lifecycle tag of the spend record itself, distinct from the
/// approval workflow's aggregate status. A closed set: the source compared
/// free-form status strings, here every consumer pattern-matches.
///
/// `Late` is deliberately not a variant; it is a derived display condition,
/// see [`SpendEntity::is_late`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityStatus {
    Draft,
    Pending,
    ForApproval,
    Approved,
    Scheduled,
    Paid,
    Rejected,
    Flagged,
}

impl EntityStatus {
    /// Paid and Rejected accept no further action-driven transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Paid | Self::Rejected)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Pending => "Pending",
            Self::ForApproval => "For Approval",
            Self::Approved => "Approved",
            Self::Scheduled => "Scheduled",
            Self::Paid => "Paid",
            Self::Rejected => "Rejected",
            Self::Flagged => "Flagged",
        }
    }
}

/// Spend classification carried by the record. Only `Material` and
/// `EquipmentRental` influence behavior (the Purchasing smart default).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpendCategory {
    Material,
    EquipmentRental,
    Service,
    FieldExpense,
}

/// Whether supporting documentation is on file for a reimbursement. Only
/// expenses carry one; a missing receipt drives the Accounting smart default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptStatus {
    Attached,
    Missing,
}

/// Generalization of the bill / expense / procurement-request /
/// purchase-order records the drawers operate on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpendEntity {
    pub id: EntityId,
    pub kind: EntityKind,
    /// Invoice number, expense description, or request name.
    pub description: String,
    /// Vendor, employee, or supplier the money moves to or from.
    pub counterparty: String,
    pub amount: Decimal,
    pub status: EntityStatus,
    pub category: SpendCategory,
    pub project: ProjectId,
    pub cost_code: CostCodeId,
    pub due_date: Option<NaiveDate>,
    /// `None` for kinds that carry no receipt (bills, requests, POs).
    pub receipt: Option<ReceiptStatus>,
    pub workflow: ApprovalWorkflow,
    pub created_at: DateTime<Utc>,
}

impl SpendEntity {
    /// Overdue display condition: past due and not yet paid. Never stored,
    /// never mutates `status`.
    pub fn is_late(&self, today: NaiveDate) -> bool {
        self.due_date.is_some_and(|due| due < today) && self.status != EntityStatus::Paid
    }

    /// Badge text for the record, substituting "Late" for overdue unpaid
    /// entities.
    pub fn status_label(&self, today: NaiveDate) -> &'static str {
        if self.is_late(today) {
            "Late"
        } else {
            self.status.label()
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;

    use crate::approvals::ApprovalWorkflow;
    use crate::domain::project::{CostCodeId, ProjectId};

    use super::{EntityId, EntityKind, EntityStatus, SpendCategory, SpendEntity};

    fn bill(status: EntityStatus, due: Option<NaiveDate>) -> SpendEntity {
        SpendEntity {
            id: EntityId("bill-1".to_string()),
            kind: EntityKind::Bill,
            description: "INV-4421".to_string(),
            counterparty: "KMG Concrete Services".to_string(),
            amount: Decimal::new(25_000_00, 2),
            status,
            category: SpendCategory::Service,
            project: ProjectId("proj-1".to_string()),
            cost_code: CostCodeId("03-000".to_string()),
            due_date: due,
            receipt: None,
            workflow: ApprovalWorkflow::new(),
            created_at: Utc::now(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn overdue_unpaid_entity_is_late() {
        let bill = bill(EntityStatus::Scheduled, Some(date(2024, 6, 14)));
        assert!(bill.is_late(date(2024, 6, 21)));
        assert_eq!(bill.status_label(date(2024, 6, 21)), "Late");
        assert_eq!(bill.status, EntityStatus::Scheduled);
    }

    #[test]
    fn paid_entity_is_never_late() {
        let bill = bill(EntityStatus::Paid, Some(date(2024, 6, 14)));
        assert!(!bill.is_late(date(2024, 6, 21)));
        assert_eq!(bill.status_label(date(2024, 6, 21)), "Paid");
    }

    #[test]
    fn entity_without_due_date_is_never_late() {
        let bill = bill(EntityStatus::Pending, None);
        assert!(!bill.is_late(date(2024, 6, 21)));
    }

    #[test]
    fn only_paid_and_rejected_are_terminal() {
        assert!(EntityStatus::Paid.is_terminal());
        assert!(EntityStatus::Rejected.is_terminal());
        assert!(!EntityStatus::Flagged.is_terminal());
        assert!(!EntityStatus::Scheduled.is_terminal());
    }

    #[test]
    fn for_approval_label_matches_badge_text() {
        assert_eq!(EntityStatus::ForApproval.label(), "For Approval");
    }
}
