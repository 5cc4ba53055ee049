//! Update function for the campaign composer.
//!
//! A single `update` receives the current component state and a `Msg`,
//! mutates the state, and returns whether the view should re-render.
//!
//! Key behaviors
//! - Field edits replace the corresponding form value directly.
//! - Emphasis toggling cascades: deselecting a type drops its details and
//!   clears its pending input.
//! - Generation reads the form, overwrites the stored draft list with four
//!   fresh variants, and switches to the results screen. Going back keeps
//!   both the form and the drafts intact.
//! - Copy and favorite are side effects only and skip re-rendering.

use chrono::NaiveDate;
use gloo_console::{log, warn};
use yew::prelude::*;

use common::generator::generate_drafts;
use common::model::form::{Category, Community};

use super::helpers::{copy_to_clipboard, show_toast};
use super::messages::Msg;
use super::state::{CampaignComponent, Screen};

pub fn update(
    component: &mut CampaignComponent,
    _ctx: &Context<CampaignComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::UpdateProductName(value) => {
            component.form.product_name = value;
            true
        }
        Msg::UpdatePrice(value) => {
            component.form.price = value;
            true
        }
        Msg::UpdateStartDate(value) => {
            match NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
                Ok(date) => component.form.start_date = date,
                // A cleared picker reports an empty value. Keep the old date.
                Err(_) => warn!("start date ignored:", value),
            }
            true
        }
        Msg::UpdateEndDate(value) => {
            match NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
                Ok(date) => component.form.end_date = date,
                Err(_) => warn!("end date ignored:", value),
            }
            true
        }
        Msg::UpdateCategory(value) => {
            if let Some(category) = Category::from_value(&value) {
                component.form.category = category;
            }
            true
        }
        Msg::UpdateCommunity(value) => {
            if let Some(community) = Community::from_value(&value) {
                component.form.community = community;
            }
            true
        }
        Msg::ToggleEmphasis(kind) => {
            component.form.toggle_emphasis(kind);
            true
        }
        Msg::UpdateEmphasisInput(kind, value) => {
            component.form.update_emphasis_input(kind, value);
            true
        }
        // The add button is disabled while the slot is blank, but the
        // operation guards on its own; a rejected add changes nothing.
        Msg::AddEmphasisDetail(kind) => component.form.add_emphasis_detail(kind),
        Msg::RemoveEmphasisDetail(id) => {
            component.form.remove_emphasis_detail(&id);
            true
        }
        Msg::UpdateBestCase(value) => {
            component.form.best_case = value;
            true
        }
        Msg::ToggleBestCase => {
            component.best_case_open = !component.best_case_open;
            true
        }
        Msg::Generate | Msg::Regenerate => {
            component.generated = generate_drafts(&component.form);
            component.screen = Screen::Results;
            log!(format!(
                "generated {} drafts for {}",
                component.generated.len(),
                component.form.community.as_str()
            ));
            true
        }
        Msg::BackToForm => {
            component.screen = Screen::Form;
            true
        }
        Msg::Copy(text) => {
            copy_to_clipboard(&text);
            show_toast("원고가 복사되었습니다!");
            false
        }
        Msg::MarkFavorite => {
            // Acknowledged stub. There is no storage behind this.
            show_toast("베스트 사례로 저장되었습니다!");
            false
        }
    }
}
