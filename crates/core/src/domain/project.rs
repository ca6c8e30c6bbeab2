use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub String);

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CostCodeId(pub String);

/// A construction project with its committed budget position. Budget data
/// feeds the smart-default approver suggestions, nothing else.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub code: String,
    pub budget: Decimal,
    pub spent: Decimal,
}

impl Project {
    pub fn remaining_budget(&self) -> Decimal {
        self.budget - self.spent
    }

    /// Spent-to-budget ratio. `None` when the project has no positive budget,
    /// so callers never divide by zero.
    pub fn budget_utilization(&self) -> Option<Decimal> {
        if self.budget <= Decimal::ZERO {
            return None;
        }
        Some(self.spent / self.budget)
    }
}
