pub mod approvals;
pub mod config;
pub mod domain;
pub mod errors;
pub mod gate;
pub mod notify;
pub mod store;
pub mod suggestions;

pub use approvals::{
    ApprovalError, ApprovalStep, ApprovalWorkflow, StepId, StepStatus, WorkflowStatus,
};
pub use config::{ApprovalPolicyConfig, ConfigError};
pub use domain::directory::{eligible_approvers, ApproverGroup, DirectoryEntry};
pub use domain::entity::{
    EntityId, EntityKind, EntityStatus, ReceiptStatus, SpendCategory, SpendEntity,
};
pub use domain::project::{CostCodeId, Project, ProjectId};
pub use errors::DomainError;
pub use gate::{available_actions, available_actions_for, status_implication, ActionKind};
pub use notify::{format_usd, ActionNotification, InMemoryNotificationSink, NotificationSink};
pub use store::{action_message, ActionOutcome, EntityPatch, EntityStore};
pub use suggestions::{
    resolve_suggestions, seed_default_approvers, suggest_approvers, ApproverSuggestion,
    SuggestionReason,
};
