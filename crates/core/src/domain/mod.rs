pub mod directory;
pub mod entity;
pub mod project;

pub use directory::{eligible_approvers, ApproverGroup, DirectoryEntry};
pub use entity::{EntityId, EntityKind, EntityStatus, ReceiptStatus, SpendCategory, SpendEntity};
pub use project::{CostCodeId, Project, ProjectId};
