use super::*;
use chrono::NaiveDate;
use shared::domain::{AssetType, BountyEligibility};

use crate::error::SubmitError;

fn fill_valid_form(session: &mut AdminSession) {
    let form = session.open_form();
    form.set_name("New program");
    form.set_start_date(NaiveDate::from_ymd_opt(2025, 3, 9));
    let draft = form.draft_mut();
    draft.asset_type = Some(AssetType::Mobile);
    draft.identifier = "com.example.app".into();
    draft.bounty_eligibility = Some(BountyEligibility::Ineligible);
    form.add_asset().expect("asset");
}

#[test]
fn submit_without_open_form_fails() {
    let mut session = AdminSession::with_demo_data();
    assert_eq!(session.submit_form(), Err(SessionError::NoOpenForm));
    assert!(session.form_mut().is_err());
}

#[test]
fn successful_submit_prepends_and_closes_form() {
    let mut session = AdminSession::with_demo_data();
    fill_valid_form(&mut session);

    let program = session.submit_form().expect("submit");
    assert!(session.form().is_none());
    assert_eq!(session.programs().len(), 7);
    assert_eq!(session.programs().stored()[0], program);
    assert_eq!(program.asset_identifier, "com.example.app");
    assert_eq!(program.description, "");
}

#[test]
fn failed_submit_keeps_form_open() {
    let mut session = AdminSession::with_demo_data();
    fill_valid_form(&mut session);
    session.open_form().set_website("not-a-url");

    let err = session.submit_form().expect_err("blocked");
    assert!(matches!(
        err,
        SessionError::Submit(SubmitError::InvalidWebsite { .. })
    ));
    let form = session.form().expect("still open");
    assert_eq!(form.assets().len(), 1);
    assert_eq!(session.programs().len(), 6);
}

#[test]
fn cancel_discards_assets_and_leaves_store() {
    let mut session = AdminSession::with_demo_data();
    fill_valid_form(&mut session);

    assert_eq!(session.cancel_form(), 1);
    assert!(session.form().is_none());
    assert_eq!(session.programs().len(), 6);

    assert!(session.open_form().assets().is_empty());
}

#[test]
fn open_form_reuses_existing_form() {
    let mut session = AdminSession::default();
    session.open_form().set_name("draft");
    assert_eq!(session.open_form().name(), "draft");
}

#[test]
fn view_and_edit_hooks() {
    let mut session = AdminSession::with_demo_data();
    let id = ProgramId::from("2");
    assert_eq!(
        session.view_program(&id).map(|p| p.description.as_str()),
        Some("Under Review")
    );
    assert!(session.edit_program(&id));

    assert!(session.delete_program(&id));
    assert!(session.view_program(&id).is_none());
    assert!(!session.edit_program(&id));
}

#[test]
fn sort_by_drives_list_order() {
    let mut session = AdminSession::with_demo_data();
    session.sort_by(SortField::Description);
    let descriptions: Vec<&str> = session
        .list()
        .iter()
        .map(|p| p.description.as_str())
        .collect();
    assert_eq!(
        descriptions,
        [
            "5 open Findings",
            "71 Resolved Reports",
            "71 Resolved Reports",
            "74 Resolved Reports",
            "Complete Form",
            "Under Review",
        ]
    );
    let ids: Vec<&str> = session.list().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(&ids[1..3], ["5", "6"]);
}
