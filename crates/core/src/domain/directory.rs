use std::fmt;

use serde::{Deserialize, Serialize};

use crate::approvals::ApprovalWorkflow;
use crate::domain::project::ProjectId;

/// Categorical buckets the approver directory is organized by. Closed set,
/// matching the selector groups the drawers render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApproverGroup {
    ProjectOwner,
    ProjectManagers,
    Accounting,
    Finance,
    Purchasing,
    Admin,
}

impl ApproverGroup {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ProjectOwner => "Project Owner",
            Self::ProjectManagers => "Project Managers",
            Self::Accounting => "Accounting",
            Self::Finance => "Finance",
            Self::Purchasing => "Purchasing Manager",
            Self::Admin => "Any Admin",
        }
    }
}

impl fmt::Display for ApproverGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One person in the approver directory, read-only collaborator data used to
/// populate the "add approver" selector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub id: String,
    pub name: String,
    pub role: String,
    pub group: ApproverGroup,
    pub project_ids: Vec<ProjectId>,
}

impl DirectoryEntry {
    pub fn covers_project(&self, project: &ProjectId) -> bool {
        self.project_ids.contains(project)
    }
}

/// Directory entries eligible for the entity's project, excluding anyone
/// already on the approval chain. Directory order is preserved.
pub fn eligible_approvers<'a>(
    directory: &'a [DirectoryEntry],
    project: &ProjectId,
    workflow: &ApprovalWorkflow,
) -> Vec<&'a DirectoryEntry> {
    directory
        .iter()
        .filter(|entry| entry.covers_project(project))
        .filter(|entry| !workflow.steps().iter().any(|step| step.approver_name == entry.name))
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::approvals::ApprovalWorkflow;
    use crate::domain::project::ProjectId;

    use super::{eligible_approvers, ApproverGroup, DirectoryEntry};

    fn entry(id: &str, name: &str, group: ApproverGroup, projects: &[&str]) -> DirectoryEntry {
        DirectoryEntry {
            id: id.to_string(),
            name: name.to_string(),
            role: "Project Manager".to_string(),
            group,
            project_ids: projects.iter().map(|p| ProjectId(p.to_string())).collect(),
        }
    }

    #[test]
    fn filters_to_entries_covering_the_project() {
        let directory = vec![
            entry("p1", "Megan Lewis", ApproverGroup::ProjectManagers, &["proj-1", "proj-2"]),
            entry("p3", "Michael Scott", ApproverGroup::ProjectManagers, &["proj-4"]),
        ];

        let eligible =
            eligible_approvers(&directory, &ProjectId("proj-1".to_string()), &ApprovalWorkflow::new());

        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0].name, "Megan Lewis");
    }

    #[test]
    fn excludes_approvers_already_on_the_chain() {
        let directory = vec![
            entry("p1", "Megan Lewis", ApproverGroup::ProjectManagers, &["proj-1"]),
            entry("p5", "Jan Levinson", ApproverGroup::Finance, &["proj-1"]),
        ];
        let mut workflow = ApprovalWorkflow::new();
        workflow.add_approvers(std::slice::from_ref(&directory[0]));

        let eligible =
            eligible_approvers(&directory, &ProjectId("proj-1".to_string()), &workflow);

        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0].name, "Jan Levinson");
    }

    #[test]
    fn group_labels_match_directory_headings() {
        assert_eq!(ApproverGroup::Purchasing.label(), "Purchasing Manager");
        assert_eq!(ApproverGroup::Admin.to_string(), "Any Admin");
    }
}
