use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::directory::{ApproverGroup, DirectoryEntry};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StepId(pub String);

impl StepId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepStatus {
    Waiting,
    Pending,
    Approved,
}

/// One entry in an approval chain: one person who must sign off.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalStep {
    pub id: StepId,
    pub approver_name: String,
    pub approver_role: String,
    pub approver_group: ApproverGroup,
    pub status: StepStatus,
    pub decided_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkflowStatus {
    InProgress,
    Complete,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApprovalError {
    #[error("approval step `{step_id}` is already approved and cannot be removed")]
    CannotRemoveApprovedStep { step_id: String },
    #[error("unknown approval step `{step_id}`")]
    UnknownStep { step_id: String },
}

/// Ordered approver chain for one spend entity. Insertion order is the
/// display order; it does not gate decisions, so several steps may sit
/// `Pending` at once.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalWorkflow {
    steps: Vec<ApprovalStep>,
}

impl ApprovalWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate a chain from seeded step data, preserving order.
    pub fn from_steps(steps: Vec<ApprovalStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[ApprovalStep] {
        &self.steps
    }

    /// Append one `Waiting` step per candidate. Empty input is a no-op.
    pub fn add_approvers(&mut self, candidates: &[DirectoryEntry]) {
        for candidate in candidates {
            let step = ApprovalStep {
                id: StepId::generate(),
                approver_name: candidate.name.clone(),
                approver_role: candidate.role.clone(),
                approver_group: candidate.group,
                status: StepStatus::Waiting,
                decided_at: None,
            };
            tracing::debug!(step = %step.id.0, approver = %step.approver_name, "approver added");
            self.steps.push(step);
        }
    }

    /// Remove a step that has not yet been decided. Approved decisions are
    /// immutable history and stay on the chain. Returns the removed step so
    /// callers can build the "Removed {name} from approval chain" message.
    pub fn remove_approver(&mut self, id: &StepId) -> Result<ApprovalStep, ApprovalError> {
        let position = self
            .steps
            .iter()
            .position(|step| &step.id == id)
            .ok_or_else(|| ApprovalError::UnknownStep { step_id: id.0.clone() })?;

        if self.steps[position].status == StepStatus::Approved {
            return Err(ApprovalError::CannotRemoveApprovedStep { step_id: id.0.clone() });
        }

        let removed = self.steps.remove(position);
        tracing::debug!(step = %removed.id.0, approver = %removed.approver_name, "approver removed");
        Ok(removed)
    }

    /// Record an approval decision on a `Waiting` or `Pending` step. The
    /// single mutation point for decisions; re-advancing an already-approved
    /// step is a no-op that keeps the original `decided_at`.
    pub fn advance_step(
        &mut self,
        id: &StepId,
        decided_at: DateTime<Utc>,
    ) -> Result<(), ApprovalError> {
        let step = self.step_mut(id)?;
        if step.status == StepStatus::Approved {
            return Ok(());
        }

        step.status = StepStatus::Approved;
        step.decided_at = Some(decided_at);
        tracing::debug!(step = %id.0, "approval step advanced");
        Ok(())
    }

    /// Promote a `Waiting` step to `Pending` when its request goes out.
    /// `Pending` and `Approved` steps are left untouched.
    pub fn mark_pending(&mut self, id: &StepId) -> Result<(), ApprovalError> {
        let step = self.step_mut(id)?;
        if step.status == StepStatus::Waiting {
            step.status = StepStatus::Pending;
        }
        Ok(())
    }

    /// `Complete` iff the chain is non-empty and every step is approved.
    /// An empty chain is never complete.
    pub fn aggregate_status(&self) -> WorkflowStatus {
        if !self.steps.is_empty()
            && self.steps.iter().all(|step| step.status == StepStatus::Approved)
        {
            WorkflowStatus::Complete
        } else {
            WorkflowStatus::InProgress
        }
    }

    fn step_mut(&mut self, id: &StepId) -> Result<&mut ApprovalStep, ApprovalError> {
        self.steps
            .iter_mut()
            .find(|step| &step.id == id)
            .ok_or_else(|| ApprovalError::UnknownStep { step_id: id.0.clone() })
    }
}
