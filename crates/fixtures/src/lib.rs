//! Deterministic seed dataset for the spend-management model: the projects,
//! approver directory, and entity records the prototype dashboard shipped as
//! static fixture arrays. Everything here is plain data; all behavior lives
//! in `sitespend-core`.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sitespend_core::{
    ApprovalStep, ApprovalWorkflow, ApproverGroup, CostCodeId, DirectoryEntry, EntityId,
    EntityKind, EntityStatus, EntityStore, Project, ProjectId, ReceiptStatus, SpendCategory,
    SpendEntity, StepId, StepStatus,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture dates are valid")
}

fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .expect("fixture timestamps are valid")
        .and_utc()
}

fn usd(whole_dollars: i64, cents: u32) -> Decimal {
    Decimal::new(whole_dollars * 100 + i64::from(cents), 2)
}

fn step(
    id: &str,
    name: &str,
    role: &str,
    group: ApproverGroup,
    status: StepStatus,
    decided_at: Option<DateTime<Utc>>,
) -> ApprovalStep {
    ApprovalStep {
        id: StepId(id.to_string()),
        approver_name: name.to_string(),
        approver_role: role.to_string(),
        approver_group: group,
        status,
        decided_at,
    }
}

#[allow(clippy::too_many_arguments)]
fn entity(
    id: &str,
    kind: EntityKind,
    description: &str,
    counterparty: &str,
    amount: Decimal,
    status: EntityStatus,
    category: SpendCategory,
    project: &str,
    cost_code: &str,
    due_date: Option<NaiveDate>,
    steps: Vec<ApprovalStep>,
    created_at: DateTime<Utc>,
) -> SpendEntity {
    SpendEntity {
        id: EntityId(id.to_string()),
        kind,
        description: description.to_string(),
        counterparty: counterparty.to_string(),
        amount,
        status,
        category,
        project: ProjectId(project.to_string()),
        cost_code: CostCodeId(cost_code.to_string()),
        due_date,
        receipt: None,
        workflow: ApprovalWorkflow::from_steps(steps),
        created_at,
    }
}

pub fn projects() -> Vec<Project> {
    let project = |id: &str, name: &str, code: &str, budget: i64, spent: i64| Project {
        id: ProjectId(id.to_string()),
        name: name.to_string(),
        code: code.to_string(),
        budget: Decimal::new(budget, 0),
        spent: Decimal::new(spent, 0),
    };

    vec![
        project("proj-1", "Oakwood Apartments", "OAK-2024", 4_500_000, 2_850_000),
        project("proj-2", "Trust Hill Development", "THD-2024", 8_200_000, 3_100_000),
        project("proj-3", "Metro Center Renovation", "MCR-2024", 2_100_000, 1_750_000),
        project("proj-4", "Harbor Bridge Repair", "HBR-2024", 6_800_000, 1_200_000),
        project("proj-5", "Sunset Plaza Mall", "SPM-2023", 12_000_000, 11_800_000),
    ]
}

pub fn approver_directory() -> Vec<DirectoryEntry> {
    let person = |id: &str, name: &str, role: &str, group: ApproverGroup, projects: &[&str]| {
        DirectoryEntry {
            id: id.to_string(),
            name: name.to_string(),
            role: role.to_string(),
            group,
            project_ids: projects.iter().map(|p| ProjectId(p.to_string())).collect(),
        }
    };

    vec![
        person("p1", "Megan Lewis", "Project Manager", ApproverGroup::ProjectManagers, &[
            "proj-1", "proj-2",
        ]),
        person("p2", "David Wallace", "Project Executive", ApproverGroup::ProjectOwner, &[
            "proj-1", "proj-2", "proj-3", "proj-4",
        ]),
        person("p3", "Michael Scott", "Site Supervisor", ApproverGroup::ProjectManagers, &[
            "proj-1", "proj-4",
        ]),
        person("p4", "Holly Flax", "Accounting Lead", ApproverGroup::Accounting, &[
            "proj-1", "proj-2", "proj-3", "proj-4",
        ]),
        person("p5", "Jan Levinson", "Controller", ApproverGroup::Finance, &[
            "proj-1", "proj-2", "proj-3", "proj-4",
        ]),
        person("p6", "Ryan Howard", "Purchasing Manager", ApproverGroup::Purchasing, &[
            "proj-2", "proj-3",
        ]),
        person("p7", "Jim Halpert", "Admin", ApproverGroup::Admin, &[
            "proj-1", "proj-2", "proj-3", "proj-4",
        ]),
    ]
}

pub fn seed_bills() -> Vec<SpendEntity> {
    vec![
        entity(
            "bill-1",
            EntityKind::Bill,
            "INV-4421",
            "KMG Concrete Services",
            usd(25_000, 0),
            EntityStatus::Pending,
            SpendCategory::Service,
            "proj-1",
            "03-000",
            Some(date(2024, 6, 21)),
            vec![step(
                "a1",
                "Megan Lewis",
                "Project Manager",
                ApproverGroup::ProjectManagers,
                StepStatus::Pending,
                None,
            )],
            ts(2024, 6, 10, 8, 0),
        ),
        // Past due while unpaid; surfaces as "Late" without a status change.
        entity(
            "bill-2",
            EntityKind::Bill,
            "JE-8872",
            "John's Electric Inc",
            usd(18_750, 0),
            EntityStatus::Pending,
            SpendCategory::Service,
            "proj-1",
            "16-000",
            Some(date(2024, 6, 14)),
            vec![step(
                "a2",
                "Megan Lewis",
                "Project Manager",
                ApproverGroup::ProjectManagers,
                StepStatus::Pending,
                None,
            )],
            ts(2024, 6, 17, 9, 0),
        ),
        entity(
            "bill-3",
            EntityKind::Bill,
            "MFD-1190",
            "ModForm Drywall",
            usd(32_900, 0),
            EntityStatus::Scheduled,
            SpendCategory::Service,
            "proj-2",
            "09-000",
            Some(date(2024, 11, 4)),
            vec![
                step(
                    "a3",
                    "Megan Lewis",
                    "Project Manager",
                    ApproverGroup::ProjectManagers,
                    StepStatus::Approved,
                    Some(ts(2024, 6, 6, 10, 30)),
                ),
                step(
                    "a4",
                    "Jan Levinson",
                    "Controller",
                    ApproverGroup::Finance,
                    StepStatus::Approved,
                    Some(ts(2024, 6, 7, 14, 15)),
                ),
            ],
            ts(2024, 6, 5, 8, 30),
        ),
        entity(
            "bill-4",
            EntityKind::Bill,
            "SH-0045",
            "Summit HVAC",
            usd(18_000, 0),
            EntityStatus::Paid,
            SpendCategory::Service,
            "proj-3",
            "15-000",
            Some(date(2024, 7, 4)),
            vec![
                step(
                    "a5",
                    "Michael Scott",
                    "Site Supervisor",
                    ApproverGroup::ProjectManagers,
                    StepStatus::Approved,
                    Some(ts(2024, 6, 19, 9, 0)),
                ),
                step(
                    "a6",
                    "Jan Levinson",
                    "Controller",
                    ApproverGroup::Finance,
                    StepStatus::Approved,
                    Some(ts(2024, 6, 20, 16, 45)),
                ),
            ],
            ts(2024, 6, 18, 11, 0),
        ),
        entity(
            "bill-5",
            EntityKind::Bill,
            "PSS-7210",
            "Pacific Steel Supply",
            usd(67_500, 0),
            EntityStatus::ForApproval,
            SpendCategory::Material,
            "proj-4",
            "05-000",
            Some(date(2024, 7, 12)),
            vec![
                step(
                    "a7",
                    "Michael Scott",
                    "Site Supervisor",
                    ApproverGroup::ProjectManagers,
                    StepStatus::Pending,
                    None,
                ),
                step(
                    "a8",
                    "Jan Levinson",
                    "Controller",
                    ApproverGroup::Finance,
                    StepStatus::Waiting,
                    None,
                ),
            ],
            ts(2024, 6, 12, 13, 0),
        ),
    ]
}

pub fn seed_expenses() -> Vec<SpendEntity> {
    let mut expenses = vec![
        entity(
            "exp-1",
            EntityKind::Expense,
            "Jobsite safety supplies",
            "Luke Hobbs",
            usd(124, 50),
            EntityStatus::Pending,
            SpendCategory::FieldExpense,
            "proj-1",
            "01-000",
            None,
            vec![step(
                "a9",
                "Michael Scott",
                "Site Supervisor",
                ApproverGroup::ProjectManagers,
                StepStatus::Pending,
                None,
            )],
            ts(2024, 5, 29, 15, 0),
        ),
        entity(
            "exp-2",
            EntityKind::Expense,
            "Team lunch — milestone celebration",
            "David Wallace",
            usd(379, 94),
            EntityStatus::Approved,
            SpendCategory::FieldExpense,
            "proj-2",
            "01-000",
            None,
            vec![step(
                "a10",
                "Megan Lewis",
                "Project Manager",
                ApproverGroup::ProjectManagers,
                StepStatus::Approved,
                Some(ts(2024, 5, 28, 16, 30)),
            )],
            ts(2024, 5, 28, 12, 0),
        ),
        // Missing receipt in the source data; flagged until resolved.
        entity(
            "exp-3",
            EntityKind::Expense,
            "Mileage reimbursement — site visits",
            "Holly Flax",
            usd(541, 46),
            EntityStatus::Flagged,
            SpendCategory::FieldExpense,
            "proj-3",
            "01-000",
            None,
            vec![
                step(
                    "a11",
                    "Michael Scott",
                    "Site Supervisor",
                    ApproverGroup::ProjectManagers,
                    StepStatus::Pending,
                    None,
                ),
                step(
                    "a12",
                    "Jan Levinson",
                    "Controller",
                    ApproverGroup::Finance,
                    StepStatus::Waiting,
                    None,
                ),
            ],
            ts(2024, 5, 22, 9, 30),
        ),
        entity(
            "exp-4",
            EntityKind::Expense,
            "Laser level + tripod for foundation work",
            "David Wallace",
            usd(1_875, 0),
            EntityStatus::Pending,
            SpendCategory::FieldExpense,
            "proj-1",
            "01-000",
            None,
            vec![
                step(
                    "a13",
                    "Megan Lewis",
                    "Project Manager",
                    ApproverGroup::ProjectManagers,
                    StepStatus::Pending,
                    None,
                ),
                step(
                    "a14",
                    "Jan Levinson",
                    "Controller",
                    ApproverGroup::Finance,
                    StepStatus::Waiting,
                    None,
                ),
            ],
            ts(2024, 5, 25, 10, 0),
        ),
    ];

    for record in &mut expenses {
        record.receipt = Some(ReceiptStatus::Attached);
    }
    // exp-3 shipped without documentation in the source data.
    expenses[2].receipt = Some(ReceiptStatus::Missing);
    expenses
}

pub fn seed_procurement_requests() -> Vec<SpendEntity> {
    vec![
        entity(
            "req-1",
            EntityKind::ProcurementRequest,
            "Equipment Rental",
            "Sunbelt Rentals",
            usd(67_500, 0),
            EntityStatus::Approved,
            SpendCategory::EquipmentRental,
            "proj-2",
            "01-000",
            Some(date(2024, 6, 15)),
            vec![
                step(
                    "a15",
                    "Megan Lewis",
                    "Project Manager",
                    ApproverGroup::ProjectManagers,
                    StepStatus::Approved,
                    Some(ts(2024, 6, 10, 9, 30)),
                ),
                step(
                    "a16",
                    "Jan Levinson",
                    "Controller",
                    ApproverGroup::Finance,
                    StepStatus::Approved,
                    Some(ts(2024, 6, 11, 14, 15)),
                ),
            ],
            ts(2024, 6, 8, 9, 15),
        ),
        entity(
            "req-2",
            EntityKind::ProcurementRequest,
            "Concrete Materials",
            "KMG Concrete Services",
            usd(115_000, 0),
            EntityStatus::Approved,
            SpendCategory::Material,
            "proj-1",
            "03-000",
            Some(date(2024, 6, 20)),
            vec![
                step(
                    "a17",
                    "Megan Lewis",
                    "Project Manager",
                    ApproverGroup::ProjectManagers,
                    StepStatus::Approved,
                    Some(ts(2024, 6, 15, 10, 0)),
                ),
                step(
                    "a18",
                    "Ryan Howard",
                    "Purchasing Manager",
                    ApproverGroup::Purchasing,
                    StepStatus::Approved,
                    Some(ts(2024, 6, 16, 8, 30)),
                ),
                step(
                    "a19",
                    "Jan Levinson",
                    "Controller",
                    ApproverGroup::Finance,
                    StepStatus::Approved,
                    Some(ts(2024, 6, 17, 15, 45)),
                ),
            ],
            ts(2024, 6, 12, 8, 0),
        ),
        entity(
            "req-3",
            EntityKind::ProcurementRequest,
            "Plumbing Services",
            "R&M Plumbing",
            usd(32_000, 0),
            EntityStatus::Pending,
            SpendCategory::Service,
            "proj-3",
            "15-000",
            Some(date(2024, 7, 1)),
            vec![
                step(
                    "a20",
                    "Michael Scott",
                    "Site Supervisor",
                    ApproverGroup::ProjectManagers,
                    StepStatus::Pending,
                    None,
                ),
                step(
                    "a21",
                    "Jan Levinson",
                    "Controller",
                    ApproverGroup::Finance,
                    StepStatus::Waiting,
                    None,
                ),
            ],
            ts(2024, 6, 25, 14, 0),
        ),
        entity(
            "req-4",
            EntityKind::ProcurementRequest,
            "Structural Steel",
            "Pacific Steel Supply",
            usd(185_000, 0),
            EntityStatus::Draft,
            SpendCategory::Material,
            "proj-4",
            "05-000",
            Some(date(2024, 7, 10)),
            Vec::new(),
            ts(2024, 6, 28, 11, 30),
        ),
    ]
}

pub fn seed_purchase_orders() -> Vec<SpendEntity> {
    vec![
        entity(
            "po-1",
            EntityKind::PurchaseOrder,
            "PO# 1 — Equipment Rental",
            "Sunbelt Rentals",
            usd(67_500, 0),
            EntityStatus::Approved,
            SpendCategory::EquipmentRental,
            "proj-2",
            "01-000",
            Some(date(2025, 1, 15)),
            vec![step(
                "a22",
                "Megan Lewis",
                "Project Manager",
                ApproverGroup::ProjectManagers,
                StepStatus::Approved,
                Some(ts(2024, 6, 12, 10, 0)),
            )],
            ts(2024, 6, 12, 10, 0),
        ),
        entity(
            "po-2",
            EntityKind::PurchaseOrder,
            "PO# 2 — Concrete Materials",
            "KMG Concrete Services",
            usd(115_000, 0),
            EntityStatus::Scheduled,
            SpendCategory::Material,
            "proj-1",
            "03-000",
            Some(date(2024, 8, 30)),
            vec![step(
                "a23",
                "Jan Levinson",
                "Controller",
                ApproverGroup::Finance,
                StepStatus::Approved,
                Some(ts(2024, 6, 18, 9, 0)),
            )],
            ts(2024, 6, 18, 9, 0),
        ),
    ]
}

/// The full dataset loaded into one store, the way the dashboard boots.
pub fn seed_store() -> EntityStore {
    let mut records = seed_bills();
    records.extend(seed_expenses());
    records.extend(seed_procurement_requests());
    records.extend(seed_purchase_orders());
    EntityStore::seed(records)
}
