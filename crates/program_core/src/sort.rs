use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use serde::{Deserialize, Serialize};
use shared::domain::{Program, SortDirection, SortField};

/// Sort state of the program table. Once a field has been chosen the table
/// never goes back to `Unsorted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SortState {
    #[default]
    Unsorted,
    SortedBy {
        field: SortField,
        direction: SortDirection,
    },
}

impl SortState {
    /// Header click on `field`: same field flips direction, another field
    /// starts ascending.
    pub fn toggled_on(self, field: SortField) -> Self {
        match self {
            Self::SortedBy {
                field: active,
                direction,
            } if active == field => Self::SortedBy {
                field,
                direction: direction.toggled(),
            },
            _ => Self::SortedBy {
                field,
                direction: SortDirection::Asc,
            },
        }
    }

    pub fn field(self) -> Option<SortField> {
        match self {
            Self::Unsorted => None,
            Self::SortedBy { field, .. } => Some(field),
        }
    }

    pub fn direction(self) -> SortDirection {
        match self {
            Self::Unsorted => SortDirection::Asc,
            Self::SortedBy { direction, .. } => direction,
        }
    }

    pub fn is_descending_on(self, field: SortField) -> bool {
        self == Self::SortedBy {
            field,
            direction: SortDirection::Desc,
        }
    }

    pub fn compare(self, a: &Program, b: &Program) -> Ordering {
        match self {
            Self::Unsorted => Ordering::Equal,
            Self::SortedBy { field, direction } => {
                let ordering = compare_field(a, b, field);
                match direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            }
        }
    }
}

pub fn compare_field(a: &Program, b: &Program, field: SortField) -> Ordering {
    match field {
        SortField::Name => collate(&a.name, &b.name),
        SortField::StartDate => a.start_date.cmp(&b.start_date),
        SortField::AssetIdentifier => collate(&a.asset_identifier, &b.asset_identifier),
        SortField::Description => collate(&a.description, &b.description),
        SortField::BountyEligibility => collate(
            a.bounty_eligibility.as_str(),
            b.bounty_eligibility.as_str(),
        ),
    }
}

thread_local! {
    static COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
}

/// Text ordering for table columns using root-locale collation: accents and
/// case are secondary and tertiary differences, so `école` sorts before `foo`
/// and `a` before `A`. Strings the collator calls equal fall back to code
/// point order, so only identical strings are `Equal`.
pub fn collate(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()),
        })
        .then_with(|| a.cmp(b))
}

/// Stable sort over `programs`; equal keys keep their relative order.
pub fn sorted<'a>(programs: &'a [Program], state: SortState) -> Vec<&'a Program> {
    let mut view: Vec<&Program> = programs.iter().collect();
    if state != SortState::Unsorted {
        view.sort_by(|a, b| state.compare(a, b));
    }
    view
}

#[cfg(test)]
#[path = "tests/sort_tests.rs"]
mod tests;
