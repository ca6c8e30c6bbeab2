use thiserror::Error;

use crate::approvals::ApprovalError;
use crate::domain::entity::{EntityKind, EntityStatus};
use crate::gate::ActionKind;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error(transparent)]
    Approval(#[from] ApprovalError),
    #[error("unknown spend entity `{id}`")]
    UnknownEntity { id: String },
    #[error("action {action:?} is not available for {kind:?} in status {status:?}")]
    ActionNotAvailable { action: ActionKind, kind: EntityKind, status: EntityStatus },
}

#[cfg(test)]
mod tests {
    use crate::approvals::ApprovalError;

    use super::DomainError;

    #[test]
    fn approval_errors_lift_into_domain_errors() {
        let error: DomainError =
            ApprovalError::UnknownStep { step_id: "s9".to_string() }.into();
        assert_eq!(error.to_string(), "unknown approval step `s9`");
    }

    #[test]
    fn unknown_entity_names_the_id() {
        let error = DomainError::UnknownEntity { id: "bill-7".to_string() };
        assert_eq!(error.to_string(), "unknown spend entity `bill-7`");
    }
}
