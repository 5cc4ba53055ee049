//! Campaign composer: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! The component owns the whole campaign form, flips between the input and
//! results screens, and produces the four draft variants on demand. All
//! user-facing text is Korean by design.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::CampaignProps;
pub use state::CampaignComponent;

impl Component for CampaignComponent {
    type Message = Msg;
    type Properties = CampaignProps;

    fn create(ctx: &Context<Self>) -> Self {
        match &ctx.props().initial_form {
            Some(form) => CampaignComponent::with_form(form.clone()),
            None => CampaignComponent::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
