use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Format used by the program table and the demo seed data, e.g. `Nov02, 2023`.
pub const START_DATE_LABEL_FORMAT: &str = "%b%d, %Y";
pub const START_DATE_ISO_FORMAT: &str = "%Y-%m-%d";

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Fresh random identifier; never derived from the clock.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

id_newtype!(ProgramId);
id_newtype!(AssetId);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BountyEligibility {
    Eligible,
    Ineligible,
}

impl BountyEligibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Eligible => "ELIGIBLE",
            Self::Ineligible => "INELIGIBLE",
        }
    }

    /// Badge text shown next to programs and assets.
    pub fn label(self) -> &'static str {
        match self {
            Self::Eligible => "Eligible",
            Self::Ineligible => "Ineligible",
        }
    }
}

impl FromStr for BountyEligibility {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("eligible") {
            Ok(Self::Eligible)
        } else if s.eq_ignore_ascii_case("ineligible") {
            Ok(Self::Ineligible)
        } else {
            Err(ParseEnumError::new("bounty eligibility", s))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetType {
    Web,
    Mobile,
}

impl AssetType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "WEB",
            Self::Mobile => "MOBILE",
        }
    }
}

impl FromStr for AssetType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("web") {
            Ok(Self::Web)
        } else if s.eq_ignore_ascii_case("mobile") {
            Ok(Self::Mobile)
        } else {
            Err(ParseEnumError::new("asset type", s))
        }
    }
}

/// Program attribute usable as a table sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Name,
    StartDate,
    AssetIdentifier,
    Description,
    BountyEligibility,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        Self::Name,
        Self::StartDate,
        Self::AssetIdentifier,
        Self::Description,
        Self::BountyEligibility,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::StartDate => "startDate",
            Self::AssetIdentifier => "assetIdentifier",
            Self::Description => "description",
            Self::BountyEligibility => "bountyEligibility",
        }
    }
}

impl FromStr for SortField {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| ParseEnumError::new("sort field", s.trim()))
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized start date '{0}'; expected YYYY-MM-DD")]
pub struct DateParseError(pub String);

/// Accepts the ISO form produced by the date picker and the `Nov02, 2023`
/// form used by the demo seed data.
pub fn parse_start_date(raw: &str) -> Result<NaiveDate, DateParseError> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, START_DATE_ISO_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(raw, START_DATE_LABEL_FORMAT))
        .map_err(|_| DateParseError(raw.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: ProgramId,
    pub name: String,
    pub start_date: NaiveDate,
    pub asset_identifier: String,
    pub description: String,
    pub bounty_eligibility: BountyEligibility,
}

impl Program {
    pub fn start_date_label(&self) -> String {
        self.start_date.format(START_DATE_LABEL_FORMAT).to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: AssetId,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub identifier: String,
    pub description: String,
    pub bounty_eligibility: BountyEligibility,
}

/// An asset as entered in the form, before the collection assigns its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetCandidate {
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub identifier: String,
    pub description: String,
    pub bounty_eligibility: BountyEligibility,
}

impl AssetCandidate {
    pub fn into_asset(self, id: AssetId) -> Asset {
        Asset {
            id,
            asset_type: self.asset_type,
            identifier: self.identifier,
            description: self.description,
            bounty_eligibility: self.bounty_eligibility,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_and_seed_label_dates() {
        let expected = NaiveDate::from_ymd_opt(2023, 11, 2).expect("date");
        assert_eq!(parse_start_date("2023-11-02").expect("iso"), expected);
        assert_eq!(parse_start_date("Nov02, 2023").expect("label"), expected);
        assert!(parse_start_date("02/11/2023").is_err());
    }

    #[test]
    fn sort_field_accepts_camel_and_kebab_names() {
        assert_eq!("startDate".parse::<SortField>(), Ok(SortField::StartDate));
        assert_eq!(
            "asset-identifier".parse::<SortField>(),
            Ok(SortField::AssetIdentifier)
        );
        assert!("owner".parse::<SortField>().is_err());
    }

    #[test]
    fn program_serializes_with_original_field_names() {
        let program = Program {
            id: ProgramId::from("7"),
            name: "Test".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("date"),
            asset_identifier: "ex.com".into(),
            description: "d".into(),
            bounty_eligibility: BountyEligibility::Eligible,
        };
        let value = serde_json::to_value(&program).expect("json");
        assert_eq!(value["startDate"], "2024-01-01");
        assert_eq!(value["assetIdentifier"], "ex.com");
        assert_eq!(value["bountyEligibility"], "ELIGIBLE");
        assert_eq!(program.start_date_label(), "Jan01, 2024");
    }

    #[test]
    fn generated_ids_do_not_collide() {
        let ids: std::collections::HashSet<_> = (0..64).map(|_| AssetId::generate()).collect();
        assert_eq!(ids.len(), 64);
    }
}
