use common::model::form::CampaignForm;
use yew::prelude::*;

/// Properties for the `CampaignComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct CampaignProps {
    /// Optional form snapshot to start from. Without it the composer opens
    /// with the sample defaults.
    #[prop_or_default]
    pub initial_form: Option<CampaignForm>,
}
