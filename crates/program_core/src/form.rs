//! The create-program form: field state, the in-progress asset draft and
//! the submission that turns the form into a single [`Program`].

use chrono::NaiveDate;
use shared::{
    domain::{
        Asset, AssetCandidate, AssetId, AssetType, BountyEligibility, Program, ProgramId,
    },
    error::FormField,
};
use tracing::{debug, warn};
use url::Url;

use crate::{
    asset_collection::AssetCollection,
    date_picker::DatePicker,
    error::{AssetError, SubmitError},
    program_store::ProgramStore,
};

pub const INVALID_WEBSITE_MESSAGE: &str = "Please enter a valid website URL.";

/// Returns the field message for `website`, or `None` when it is empty or an
/// absolute URL.
pub fn validate_website(website: &str) -> Option<String> {
    if website.is_empty() || Url::parse(website).is_ok() {
        None
    } else {
        Some(INVALID_WEBSITE_MESSAGE.to_string())
    }
}

/// Asset fields being typed in before "Add" is pressed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetDraft {
    pub asset_type: Option<AssetType>,
    pub identifier: String,
    pub description: String,
    pub bounty_eligibility: Option<BountyEligibility>,
}

impl AssetDraft {
    fn to_candidate(&self) -> Result<AssetCandidate, AssetError> {
        if self.identifier.trim().is_empty() {
            return Err(AssetError::Incomplete {
                field: FormField::AssetIdentifier,
            });
        }
        let asset_type = self.asset_type.ok_or(AssetError::Incomplete {
            field: FormField::AssetType,
        })?;
        let bounty_eligibility = self.bounty_eligibility.ok_or(AssetError::Incomplete {
            field: FormField::BountyEligibility,
        })?;

        Ok(AssetCandidate {
            asset_type,
            identifier: self.identifier.clone(),
            description: self.description.clone(),
            bounty_eligibility,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProgramForm {
    name: String,
    start_date: Option<NaiveDate>,
    website: String,
    twitter: String,
    website_error: Option<String>,
    invalid_field: Option<FormField>,
    date_picker: Option<DatePicker>,
    draft: AssetDraft,
    assets: AssetCollection,
}

impl ProgramForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.clear_invalid(FormField::Name);
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// Sets the date directly. A picker opened earlier is discarded so the
    /// next one starts from this value.
    pub fn set_start_date(&mut self, start_date: Option<NaiveDate>) {
        self.start_date = start_date;
        self.date_picker = None;
        self.clear_invalid(FormField::StartDate);
    }

    /// Opens the start-date picker, creating it on first use with the current
    /// start date as its committed value.
    pub fn open_date_picker(&mut self, today: NaiveDate) -> &mut DatePicker {
        let start_date = self.start_date;
        let picker = self
            .date_picker
            .get_or_insert_with(|| DatePicker::new(start_date, today));
        picker.open();
        picker
    }

    pub fn date_picker(&self) -> Option<&DatePicker> {
        self.date_picker.as_ref()
    }

    pub fn date_picker_mut(&mut self) -> Option<&mut DatePicker> {
        self.date_picker.as_mut()
    }

    /// Commits the picker's pending selection as the start date. Returns
    /// `None` when no picker is open or nothing has been selected.
    pub fn confirm_start_date(&mut self) -> Option<NaiveDate> {
        let date = self.date_picker.as_mut()?.confirm()?;
        debug!(%date, "start date picked");
        self.start_date = Some(date);
        self.clear_invalid(FormField::StartDate);
        Some(date)
    }

    pub fn cancel_date_picker(&mut self) {
        if let Some(picker) = self.date_picker.as_mut() {
            picker.cancel();
        }
    }

    pub fn website(&self) -> &str {
        &self.website
    }

    /// Stores the website and revalidates it on every keystroke.
    pub fn set_website(&mut self, website: impl Into<String>) {
        self.website = website.into();
        self.website_error = validate_website(&self.website);
        self.clear_invalid(FormField::Website);
    }

    pub fn website_error(&self) -> Option<&str> {
        self.website_error.as_deref()
    }

    pub fn twitter(&self) -> &str {
        &self.twitter
    }

    pub fn set_twitter(&mut self, twitter: impl Into<String>) {
        self.twitter = twitter.into();
    }

    /// Field that blocked the most recent submission, until that field is
    /// edited again.
    pub fn invalid_field(&self) -> Option<FormField> {
        self.invalid_field
    }

    fn clear_invalid(&mut self, field: FormField) {
        if self.invalid_field == Some(field) {
            self.invalid_field = None;
        }
    }

    pub fn draft(&self) -> &AssetDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut AssetDraft {
        &mut self.draft
    }

    pub fn assets(&self) -> &[Asset] {
        self.assets.view()
    }

    /// Moves the draft into the asset collection. The draft is cleared on
    /// success and left as typed on failure so it can be corrected.
    pub fn add_asset(&mut self) -> Result<&Asset, AssetError> {
        let candidate = self.draft.to_candidate()?;
        let asset = self.assets.add(candidate)?;
        self.draft = AssetDraft::default();
        if self.invalid_field == Some(FormField::Assets) {
            self.invalid_field = None;
        }
        Ok(asset)
    }

    pub fn remove_asset(&mut self, asset_id: &AssetId) -> bool {
        self.assets.remove(asset_id)
    }

    /// Builds the program this form would create, without touching any
    /// state. Checks run in field order; the first failure wins.
    pub fn build_program(&self, id: ProgramId) -> Result<Program, SubmitError> {
        if self.name.trim().is_empty() {
            return Err(SubmitError::MissingName);
        }
        let Some(start_date) = self.start_date else {
            return Err(SubmitError::MissingStartDate);
        };
        let Some(first_asset) = self.assets.first() else {
            return Err(SubmitError::NoAssets);
        };
        if let Some(message) = validate_website(&self.website) {
            return Err(SubmitError::InvalidWebsite { message });
        }

        Ok(Program {
            id,
            name: self.name.clone(),
            start_date,
            asset_identifier: first_asset.identifier.clone(),
            description: first_asset.description.clone(),
            bounty_eligibility: first_asset.bounty_eligibility,
        })
    }

    /// Validates and hands the new program to `store`, then resets the form.
    /// Only the first collected asset is carried onto the program. On failure
    /// the store and every form field are left untouched apart from the
    /// website message and the invalid-field marker.
    pub fn submit(&mut self, store: &mut ProgramStore) -> Result<Program, SubmitError> {
        self.website_error = validate_website(&self.website);

        let program = match self.build_program(ProgramId::generate()) {
            Ok(program) => program,
            Err(err) => {
                warn!(field = ?err.field(), "program submission blocked");
                self.invalid_field = Some(err.field());
                return Err(err);
            }
        };

        let dropped_assets = self.assets.len().saturating_sub(1);
        if dropped_assets > 0 {
            debug!(dropped_assets, "only the first asset is kept on the program");
        }

        store.add(program.clone());
        self.reset();
        Ok(program)
    }

    /// Back to empty defaults, including the asset collection.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
