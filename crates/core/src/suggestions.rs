use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ApprovalPolicyConfig;
use crate::domain::directory::{ApproverGroup, DirectoryEntry};
use crate::domain::entity::{EntityKind, ReceiptStatus, SpendCategory, SpendEntity};
use crate::domain::project::{Project, ProjectId};
use crate::notify::format_usd;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SuggestionReason {
    AboveAmountThreshold { threshold: Decimal },
    ExceedsRemainingBudget,
    ProjectOverBudgetWatermark { watermark: Decimal },
    MaterialsOrEquipment,
    MissingReceipt,
}

/// An advisory "smart default": a group the workflow probably wants on the
/// chain, and why. Never mutates the authoritative step list; callers render
/// the note and decide.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproverSuggestion {
    pub group: ApproverGroup,
    pub reason: SuggestionReason,
}

impl ApproverSuggestion {
    /// Hint text the drawers render, matching the prototype copy.
    pub fn note(&self) -> String {
        match &self.reason {
            SuggestionReason::AboveAmountThreshold { threshold } => {
                format!("Finance added — amount exceeds {} threshold", format_usd(*threshold))
            }
            SuggestionReason::ExceedsRemainingBudget => {
                "Finance added — exceeds remaining project budget".to_string()
            }
            SuggestionReason::ProjectOverBudgetWatermark { watermark } => {
                format!(
                    "Finance added — project over {}% budget",
                    (*watermark * Decimal::new(100, 0)).normalize()
                )
            }
            SuggestionReason::MaterialsOrEquipment => {
                "Purchasing auto-added — materials / equipment request".to_string()
            }
            SuggestionReason::MissingReceipt => {
                "Accounting added — missing receipt".to_string()
            }
        }
    }
}

/// Evaluate the smart-default rules for one entity, once, at workflow-open
/// time. Pure function of entity attributes, project budget position, and
/// policy thresholds.
pub fn suggest_approvers(
    entity: &SpendEntity,
    project: Option<&Project>,
    policy: &ApprovalPolicyConfig,
) -> Vec<ApproverSuggestion> {
    let mut suggestions = Vec::new();

    let threshold = match entity.kind {
        EntityKind::Expense => policy.expense_finance_threshold,
        _ => policy.procurement_finance_threshold,
    };
    if entity.amount > threshold {
        suggestions.push(ApproverSuggestion {
            group: ApproverGroup::Finance,
            reason: SuggestionReason::AboveAmountThreshold { threshold },
        });
    }

    if entity.receipt == Some(ReceiptStatus::Missing) {
        suggestions.push(ApproverSuggestion {
            group: ApproverGroup::Accounting,
            reason: SuggestionReason::MissingReceipt,
        });
    }

    if let Some(project) = project {
        if entity.amount > project.remaining_budget() {
            suggestions.push(ApproverSuggestion {
                group: ApproverGroup::Finance,
                reason: SuggestionReason::ExceedsRemainingBudget,
            });
        }
        if project.budget_utilization().is_some_and(|ratio| ratio > policy.budget_watermark) {
            suggestions.push(ApproverSuggestion {
                group: ApproverGroup::Finance,
                reason: SuggestionReason::ProjectOverBudgetWatermark {
                    watermark: policy.budget_watermark,
                },
            });
        }
    }

    if entity.kind == EntityKind::ProcurementRequest
        && matches!(entity.category, SpendCategory::Material | SpendCategory::EquipmentRental)
    {
        suggestions.push(ApproverSuggestion {
            group: ApproverGroup::Purchasing,
            reason: SuggestionReason::MaterialsOrEquipment,
        });
    }

    suggestions
}

/// Map suggested groups to concrete directory entries eligible for the
/// project, deduplicated, preserving directory order.
/// Pre-populate an empty chain with the policy's default approver at
/// workflow-open time: the first directory entry in the default group that
/// covers the entity's project. Chains that already have steps are left
/// alone.
pub fn seed_default_approvers(
    entity: &mut SpendEntity,
    directory: &[DirectoryEntry],
    policy: &ApprovalPolicyConfig,
) {
    if !entity.workflow.steps().is_empty() {
        return;
    }
    let candidate = directory.iter().find(|entry| {
        entry.group == policy.default_approver_group && entry.covers_project(&entity.project)
    });
    if let Some(candidate) = candidate {
        entity.workflow.add_approvers(std::slice::from_ref(candidate));
    }
}

pub fn resolve_suggestions<'a>(
    suggestions: &[ApproverSuggestion],
    directory: &'a [DirectoryEntry],
    project: &ProjectId,
) -> Vec<&'a DirectoryEntry> {
    let groups: Vec<ApproverGroup> = suggestions.iter().map(|s| s.group).collect();
    directory
        .iter()
        .filter(|entry| groups.contains(&entry.group))
        .filter(|entry| entry.covers_project(project))
        .collect()
}
