use serde::{Deserialize, Serialize};

use crate::{
    domain::{Asset, AssetId, Program, ProgramId, SortDirection, SortField},
    error::AdminError,
};

/// Outcome of a presentation action, in the shape a front end renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum AdminEvent {
    ProgramsListed {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sort_field: Option<SortField>,
        sort_direction: SortDirection,
        programs: Vec<Program>,
    },
    ProgramCreated {
        program: Program,
    },
    ProgramDeleted {
        program_id: ProgramId,
        removed: bool,
    },
    ProgramDetails {
        program: Program,
    },
    SortChanged {
        field: SortField,
        direction: SortDirection,
    },
    FormOpened,
    FormCancelled {
        discarded_assets: usize,
    },
    FormUpdated {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        website_error: Option<String>,
    },
    AssetAdded {
        asset: Asset,
    },
    AssetRemoved {
        asset_id: AssetId,
        removed: bool,
    },
    AssetsListed {
        assets: Vec<Asset>,
    },
    Error(AdminError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn events_use_tagged_payload_shape() {
        let event = AdminEvent::SortChanged {
            field: SortField::StartDate,
            direction: SortDirection::Desc,
        };
        let value = serde_json::to_value(&event).expect("json");
        assert_eq!(value["type"], "sort_changed");
        assert_eq!(value["payload"]["field"], "startDate");
        assert_eq!(value["payload"]["direction"], "desc");
    }

    #[test]
    fn error_event_omits_missing_field() {
        let event = AdminEvent::Error(AdminError::new(ErrorCode::NotFound, "no such program"));
        let value = serde_json::to_value(&event).expect("json");
        assert_eq!(value["payload"]["code"], "not_found");
        assert!(value["payload"].get("field").is_none());
    }
}
