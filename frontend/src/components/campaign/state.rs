//! Component state for the campaign composer.

use common::model::content::GeneratedContent;
use common::model::form::CampaignForm;

/// Which of the two screens is on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Form,
    Results,
}

/// State container for the `CampaignComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct CampaignComponent {
    /// Every input field, owned as one value. Passed to the generator by
    /// reference and never reset by screen changes.
    pub form: CampaignForm,

    /// Drafts from the last generation. Overwritten in full on every
    /// generation request; kept in memory while the user is back on the
    /// form screen.
    pub generated: Vec<GeneratedContent>,

    /// Active screen. Starts on the form.
    pub screen: Screen,

    /// Whether the optional best-case section is expanded.
    pub best_case_open: bool,
}

impl CampaignComponent {
    pub fn new() -> Self {
        Self::with_form(CampaignForm::sample())
    }

    pub fn with_form(form: CampaignForm) -> Self {
        Self {
            form,
            generated: Vec::new(),
            screen: Screen::Form,
            best_case_open: false,
        }
    }
}
