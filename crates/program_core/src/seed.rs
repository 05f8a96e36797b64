use chrono::NaiveDate;
use shared::domain::{BountyEligibility, Program, ProgramId};

pub const DEMO_PROGRAM_NAME: &str = "Web AI Pentest - B2 team";
pub const DEMO_ASSET_IDENTIFIER: &str = "Trustline.sa";

/// The six programs the admin screen starts with. They share name, date and
/// asset, so only the description and eligibility tell them apart.
pub fn demo_programs() -> Vec<Program> {
    let start_date = NaiveDate::from_ymd_opt(2023, 11, 2).unwrap_or_default();
    [
        ("1", "Complete Form", BountyEligibility::Eligible),
        ("2", "Under Review", BountyEligibility::Ineligible),
        ("3", "5 open Findings", BountyEligibility::Eligible),
        ("4", "74 Resolved Reports", BountyEligibility::Ineligible),
        ("5", "71 Resolved Reports", BountyEligibility::Eligible),
        ("6", "71 Resolved Reports", BountyEligibility::Ineligible),
    ]
    .into_iter()
    .map(|(id, description, bounty_eligibility)| Program {
        id: ProgramId::from(id),
        name: DEMO_PROGRAM_NAME.to_string(),
        start_date,
        asset_identifier: DEMO_ASSET_IDENTIFIER.to_string(),
        description: description.to_string(),
        bounty_eligibility,
    })
    .collect()
}
