use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entity::{EntityKind, EntityStatus, SpendEntity};

/// Terminal actions a drawer can offer on a spend entity. Which subset is
/// offered depends on the entity kind and its current status, see
/// [`available_actions`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Submit,
    SaveDraft,
    Approve,
    RequestChanges,
    Reject,
    Flag,
    SchedulePayment,
    PayNow,
    DownloadReceipt,
    ViewAuditTrail,
    ConvertToPurchaseOrder,
    IssueVirtualCard,
    Dispute,
}

impl ActionKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Submit => "Submit for approval",
            Self::SaveDraft => "Save draft",
            Self::Approve => "Approve",
            Self::RequestChanges => "Request changes",
            Self::Reject => "Reject",
            Self::Flag => "Flag",
            Self::SchedulePayment => "Schedule payment",
            Self::PayNow => "Pay now",
            Self::DownloadReceipt => "Download receipt",
            Self::ViewAuditTrail => "View audit trail",
            Self::ConvertToPurchaseOrder => "Convert to PO",
            Self::IssueVirtualCard => "Issue virtual card",
            Self::Dispute => "Dispute",
        }
    }
}

/// Actions currently legal for the entity, in the order the drawer footers
/// render them. Pure lookup over the closed kind and status enums.
pub fn available_actions(kind: EntityKind, status: EntityStatus) -> Vec<ActionKind> {
    use ActionKind::{
        Approve, ConvertToPurchaseOrder, Dispute, DownloadReceipt, Flag, IssueVirtualCard, PayNow,
        Reject, RequestChanges, SaveDraft, SchedulePayment, Submit, ViewAuditTrail,
    };

    match (status, kind) {
        // Purchase orders are issued from approved requests; there is no
        // draft surface for them.
        (EntityStatus::Draft, EntityKind::PurchaseOrder) => Vec::new(),
        (EntityStatus::Draft, _) => vec![Submit, SaveDraft],
        (EntityStatus::Pending | EntityStatus::ForApproval, EntityKind::Expense) => {
            vec![Approve, RequestChanges, Reject, Flag, Dispute]
        }
        (EntityStatus::Pending | EntityStatus::ForApproval, _) => {
            vec![Approve, RequestChanges, Reject, Flag]
        }
        (EntityStatus::Approved, EntityKind::ProcurementRequest) => {
            vec![ConvertToPurchaseOrder, IssueVirtualCard]
        }
        (EntityStatus::Approved, _) => vec![SchedulePayment, PayNow],
        (EntityStatus::Scheduled, _) => vec![PayNow, SchedulePayment],
        (EntityStatus::Paid, EntityKind::Expense) => {
            vec![DownloadReceipt, ViewAuditTrail, Dispute]
        }
        (EntityStatus::Paid, _) => vec![DownloadReceipt, ViewAuditTrail],
        (EntityStatus::Rejected, _) => Vec::new(),
        (EntityStatus::Flagged, _) => vec![Approve, Reject],
    }
}

/// Actions for a live entity record, folding in the derived overdue
/// condition: an overdue unpaid record in flight drops its review actions
/// and offers payment directly, the same takeover the "Late" badge performs
/// on the status label. Draft, flagged, and terminal records keep their base
/// rows.
pub fn available_actions_for(entity: &SpendEntity, today: NaiveDate) -> Vec<ActionKind> {
    let in_flight = matches!(
        entity.status,
        EntityStatus::Pending
            | EntityStatus::ForApproval
            | EntityStatus::Approved
            | EntityStatus::Scheduled
    );
    if in_flight && entity.is_late(today) {
        return vec![ActionKind::PayNow, ActionKind::SchedulePayment];
    }
    available_actions(entity.kind, entity.status)
}

/// The terminal status each action implies, the only state-machine contract
/// in the system. `None` means the action leaves the status untouched
/// (document downloads, PO conversion, card issuance).
///
/// Bills approve into `ForApproval` rather than `Approved`; the bill-pay
/// page keeps a separate payment-review stage between approval and
/// scheduling.
pub fn status_implication(action: ActionKind, kind: EntityKind) -> Option<EntityStatus> {
    match action {
        ActionKind::Submit => Some(EntityStatus::Pending),
        ActionKind::Approve => Some(match kind {
            EntityKind::Bill => EntityStatus::ForApproval,
            _ => EntityStatus::Approved,
        }),
        // Disputes route through the reject channel, they do not park the
        // record for review.
        ActionKind::Reject | ActionKind::Dispute => Some(EntityStatus::Rejected),
        ActionKind::PayNow => Some(EntityStatus::Paid),
        ActionKind::SchedulePayment => Some(EntityStatus::Scheduled),
        ActionKind::Flag | ActionKind::RequestChanges => Some(EntityStatus::Flagged),
        ActionKind::SaveDraft
        | ActionKind::DownloadReceipt
        | ActionKind::ViewAuditTrail
        | ActionKind::ConvertToPurchaseOrder
        | ActionKind::IssueVirtualCard => None,
    }
}
