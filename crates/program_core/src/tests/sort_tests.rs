use super::*;
use chrono::NaiveDate;
use shared::domain::{BountyEligibility, ProgramId};

fn program(id: &str, name: &str, start: (i32, u32, u32)) -> Program {
    Program {
        id: ProgramId::from(id),
        name: name.into(),
        start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).expect("date"),
        asset_identifier: format!("{id}.example"),
        description: String::new(),
        bounty_eligibility: BountyEligibility::Eligible,
    }
}

fn ids(view: &[&Program]) -> Vec<String> {
    view.iter().map(|p| p.id.0.clone()).collect()
}

#[test]
fn toggling_same_field_alternates_direction() {
    let state = SortState::Unsorted.toggled_on(SortField::Name);
    assert_eq!(
        state,
        SortState::SortedBy {
            field: SortField::Name,
            direction: SortDirection::Asc
        }
    );

    let state = state.toggled_on(SortField::Name);
    assert!(state.is_descending_on(SortField::Name));

    let state = state.toggled_on(SortField::Name);
    assert_eq!(state.direction(), SortDirection::Asc);
}

#[test]
fn switching_field_resets_to_ascending() {
    let state = SortState::Unsorted
        .toggled_on(SortField::Name)
        .toggled_on(SortField::Name)
        .toggled_on(SortField::StartDate);
    assert_eq!(state.field(), Some(SortField::StartDate));
    assert_eq!(state.direction(), SortDirection::Asc);
}

#[test]
fn unsorted_reports_ascending_and_no_field() {
    assert_eq!(SortState::Unsorted.field(), None);
    assert_eq!(SortState::Unsorted.direction(), SortDirection::Asc);
    assert!(!SortState::Unsorted.is_descending_on(SortField::Name));
}

#[test]
fn collate_ignores_case_but_is_total() {
    assert_eq!(collate("alpha", "Beta"), Ordering::Less);
    assert_eq!(collate("Beta", "alpha"), Ordering::Greater);
    assert_eq!(collate("same", "same"), Ordering::Equal);
    assert_eq!(collate("a", "A"), Ordering::Less);
    assert_eq!(collate("A", "a"), Ordering::Greater);
}

#[test]
fn collate_orders_accents_and_punctuation_like_a_locale() {
    assert_eq!(collate("école", "foo"), Ordering::Less);
    assert_eq!(collate("Ängel", "Bravo"), Ordering::Less);
    assert_eq!(collate("~x", "a"), Ordering::Less);
    assert_eq!(collate("ecole", "école"), Ordering::Less);
}

#[test]
fn accented_names_sort_among_plain_ones() {
    let programs = vec![
        program("f", "foo", (2024, 1, 1)),
        program("e", "école", (2024, 1, 1)),
        program("d", "Delta", (2024, 1, 1)),
    ];
    let asc = SortState::Unsorted.toggled_on(SortField::Name);
    assert_eq!(ids(&sorted(&programs, asc)), ["d", "e", "f"]);
}

#[test]
fn unsorted_view_keeps_store_order() {
    let programs = vec![
        program("3", "Charlie", (2024, 3, 1)),
        program("1", "Alpha", (2024, 1, 1)),
        program("2", "Bravo", (2024, 2, 1)),
    ];
    assert_eq!(ids(&sorted(&programs, SortState::Unsorted)), ["3", "1", "2"]);
}

#[test]
fn start_date_sorts_chronologically() {
    let programs = vec![
        program("late", "x", (2024, 10, 1)),
        program("early", "x", (2023, 11, 2)),
        program("mid", "x", (2024, 2, 9)),
    ];
    let asc = SortState::Unsorted.toggled_on(SortField::StartDate);
    assert_eq!(ids(&sorted(&programs, asc)), ["early", "mid", "late"]);

    let desc = asc.toggled_on(SortField::StartDate);
    assert_eq!(ids(&sorted(&programs, desc)), ["late", "mid", "early"]);
}

#[test]
fn equal_keys_keep_store_order_in_both_directions() {
    let programs = vec![
        program("1", "Same", (2024, 1, 1)),
        program("2", "Other", (2024, 1, 1)),
        program("3", "Same", (2024, 1, 1)),
    ];
    let asc = SortState::Unsorted.toggled_on(SortField::Name);
    assert_eq!(ids(&sorted(&programs, asc)), ["2", "1", "3"]);

    let desc = asc.toggled_on(SortField::Name);
    assert_eq!(ids(&sorted(&programs, desc)), ["1", "3", "2"]);
}

#[test]
fn eligibility_sorts_by_wire_name() {
    let mut eligible = program("e", "x", (2024, 1, 1));
    eligible.bounty_eligibility = BountyEligibility::Eligible;
    let mut ineligible = program("i", "x", (2024, 1, 1));
    ineligible.bounty_eligibility = BountyEligibility::Ineligible;
    let programs = vec![ineligible, eligible];

    let asc = SortState::Unsorted.toggled_on(SortField::BountyEligibility);
    assert_eq!(ids(&sorted(&programs, asc)), ["e", "i"]);
}
