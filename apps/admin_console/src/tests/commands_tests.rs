use super::*;
use shared::domain::SortDirection;

fn parse(line: &str) -> Command {
    parse_line(line).expect("parse")
}

fn run(session: &mut AdminSession, line: &str) -> Result<Reply, CommandError> {
    execute(session, parse(line))
}

#[test]
fn parses_kebab_case_subcommands_and_typed_args() {
    assert_eq!(
        parse("sort startDate"),
        Command::Sort {
            field: SortField::StartDate
        }
    );
    assert_eq!(
        parse("asset-type mobile"),
        Command::AssetType {
            asset_type: AssetType::Mobile
        }
    );
    assert_eq!(
        parse("name Web AI Pentest"),
        Command::Name {
            words: vec!["Web".into(), "AI".into(), "Pentest".into()]
        }
    );
    assert!(CommandLine::try_parse_from(["date", "tomorrow"]).is_err());
    assert!(CommandLine::try_parse_from(["sort", "owner"]).is_err());
}

#[test]
fn form_commands_require_open_form() {
    let mut session = AdminSession::with_demo_data();
    let err = run(&mut session, "name Test").expect_err("no form");
    assert_eq!(AdminError::from(&err).code, ErrorCode::NoOpenForm);
}

#[test]
fn full_create_flow() {
    let mut session = AdminSession::with_demo_data();
    for line in [
        "new",
        "name Test",
        "date 2024-01-01",
        "asset-type WEB",
        "asset-id ex.com",
        "asset-desc d",
        "eligibility ELIGIBLE",
        "add-asset",
    ] {
        run(&mut session, line).expect(line);
    }

    let reply = run(&mut session, "submit").expect("submit");
    let Reply::Event(AdminEvent::ProgramCreated { program }) = &reply else {
        panic!("unexpected reply: {reply:?}");
    };
    assert_eq!(program.asset_identifier, "ex.com");
    assert_eq!(session.list()[0].id, program.id);
    assert!(session.form().is_none());
}

#[test]
fn website_error_is_reported_on_update() {
    let mut session = AdminSession::default();
    run(&mut session, "new").expect("new");
    let reply = run(&mut session, "website not-a-url").expect("website");
    assert_eq!(
        reply,
        Reply::Event(AdminEvent::FormUpdated {
            website_error: Some(program_core::INVALID_WEBSITE_MESSAGE.into())
        })
    );
}

#[test]
fn duplicate_asset_maps_to_error_code() {
    let mut session = AdminSession::default();
    for line in ["new", "asset-type web", "asset-id A", "eligibility eligible", "add-asset"] {
        run(&mut session, line).expect(line);
    }
    for line in ["asset-type web", "asset-id A", "eligibility eligible"] {
        run(&mut session, line).expect(line);
    }
    let err = run(&mut session, "add-asset").expect_err("duplicate");
    assert_eq!(AdminError::from(&err).code, ErrorCode::DuplicateAsset);
}

#[test]
fn sort_reply_carries_direction() {
    let mut session = AdminSession::with_demo_data();
    run(&mut session, "sort name").expect("asc");
    let reply = run(&mut session, "sort name").expect("desc");
    assert_eq!(
        reply,
        Reply::Event(AdminEvent::SortChanged {
            field: SortField::Name,
            direction: SortDirection::Desc
        })
    );
}

#[test]
fn view_unknown_program_is_not_found() {
    let mut session = AdminSession::with_demo_data();
    let err = run(&mut session, "view 99").expect_err("missing");
    assert_eq!(AdminError::from(&err).code, ErrorCode::NotFound);

    let reply = run(&mut session, "delete 99").expect("delete is silent");
    assert_eq!(
        reply,
        Reply::Event(AdminEvent::ProgramDeleted {
            program_id: ProgramId::from("99"),
            removed: false
        })
    );
}

#[test]
fn quit_and_subscription_replies() {
    let mut session = AdminSession::default();
    assert_eq!(run(&mut session, "exit").expect("exit"), Reply::Quit);
    assert_eq!(
        run(&mut session, "subscription").expect("banner"),
        Reply::Subscription(SubscriptionSummary::default())
    );
}

#[test]
fn quoted_and_hyphen_leading_values_parse_whole() {
    assert_eq!(
        parse(r#"asset-id "my app""#),
        Command::AssetId {
            identifier: "my app".into()
        }
    );
    assert_eq!(
        parse("asset-id -internal"),
        Command::AssetId {
            identifier: "-internal".into()
        }
    );
    assert_eq!(
        parse("name 'A  B'"),
        Command::Name {
            words: vec!["A  B".into()]
        }
    );
    assert!(matches!(
        parse_line(r#"asset-id "open"#),
        Err(ParseError::UnbalancedQuotes)
    ));
}

#[test]
fn quoted_identifier_reaches_the_program() {
    let mut session = AdminSession::default();
    for line in [
        "new",
        "name 'Spaced  name'",
        "date 2024-01-01",
        "asset-type web",
        r#"asset-id "my app""#,
        "eligibility eligible",
        "add-asset",
    ] {
        run(&mut session, line).expect(line);
    }
    let program = session.submit_form().expect("submit");
    assert_eq!(program.name, "Spaced  name");
    assert_eq!(program.asset_identifier, "my app");
}

#[test]
fn picked_calendar_day_becomes_start_date() {
    let mut session = AdminSession::default();
    run(&mut session, "new").expect("new");

    let reply = run(&mut session, "calendar --year 2024 --month 2").expect("calendar");
    let Reply::Calendar(view) = &reply else {
        panic!("unexpected reply: {reply:?}");
    };
    assert_eq!((view.year, view.month), (2024, 2));

    run(&mut session, "pick 29").expect("pick");
    assert_eq!(session.form().and_then(|f| f.start_date()), None);
    run(&mut session, "date-ok").expect("confirm");

    let picked = NaiveDate::from_ymd_opt(2024, 2, 29);
    assert_eq!(session.form().and_then(|f| f.start_date()), picked);
}

#[test]
fn picker_errors_map_to_codes() {
    let mut session = AdminSession::default();
    run(&mut session, "new").expect("new");

    let err = run(&mut session, "date-ok").expect_err("nothing picked");
    let error = AdminError::from(&err);
    assert_eq!(error.code, ErrorCode::MissingField);
    assert_eq!(error.field, Some(FormField::StartDate));

    run(&mut session, "calendar --year 2023 --month 2").expect("calendar");
    let err = run(&mut session, "pick 29").expect_err("no such day");
    assert_eq!(AdminError::from(&err).code, ErrorCode::InvalidCommand);
    assert!(parse_line("calendar --month 13").is_err());
}

#[test]
fn typed_date_goes_through_the_picker() {
    let mut session = AdminSession::default();
    run(&mut session, "new").expect("new");
    run(&mut session, "date 'Nov02, 2023'").expect("date");

    let form = session.form().expect("form");
    let picked = NaiveDate::from_ymd_opt(2023, 11, 2);
    assert_eq!(form.start_date(), picked);
    assert_eq!(form.date_picker().and_then(|p| p.value()), picked);
}
