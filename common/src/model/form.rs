//! The campaign form model.
//!
//! `CampaignForm` is the single owned state container behind the input
//! screen. Interaction handlers mutate it through the operations below and
//! the draft generator reads it by shared reference; nothing here touches
//! the DOM or performs I/O.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::emphasis::{EmphasisDetail, EmphasisType};

/// Product category of the campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Fashion,
    Beauty,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Fashion, Category::Beauty];

    /// Stable value used by the select control.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fashion => "fashion",
            Category::Beauty => "beauty",
        }
    }

    pub fn from_value(value: &str) -> Option<Category> {
        match value {
            "fashion" => Some(Category::Fashion),
            "beauty" => Some(Category::Beauty),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Fashion => "패션",
            Category::Beauty => "뷰티",
        }
    }
}

/// Target community the drafts are written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Community {
    Ppomppu,
    Fmkorea,
    Womad,
}

impl Community {
    pub const ALL: [Community; 3] = [Community::Ppomppu, Community::Fmkorea, Community::Womad];

    pub fn as_str(&self) -> &'static str {
        match self {
            Community::Ppomppu => "ppomppu",
            Community::Fmkorea => "fmkorea",
            Community::Womad => "womad",
        }
    }

    pub fn from_value(value: &str) -> Option<Community> {
        match value {
            "ppomppu" => Some(Community::Ppomppu),
            "fmkorea" => Some(Community::Fmkorea),
            "womad" => Some(Community::Womad),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Community::Ppomppu => "뽐뿌",
            Community::Fmkorea => "에펨코리아",
            Community::Womad => "여성시대",
        }
    }
}

/// Pending detail text, one slot per emphasis type.
///
/// Slots exist whether or not their type is currently selected, so a
/// deselect/reselect cycle always finds a well-defined (empty) slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmphasisInputs {
    coupon: String,
    event: String,
    keyword: String,
    other: String,
}

impl EmphasisInputs {
    pub fn get(&self, kind: EmphasisType) -> &str {
        match kind {
            EmphasisType::Coupon => &self.coupon,
            EmphasisType::Event => &self.event,
            EmphasisType::Keyword => &self.keyword,
            EmphasisType::Other => &self.other,
        }
    }

    fn slot_mut(&mut self, kind: EmphasisType) -> &mut String {
        match kind {
            EmphasisType::Coupon => &mut self.coupon,
            EmphasisType::Event => &mut self.event,
            EmphasisType::Keyword => &mut self.keyword,
            EmphasisType::Other => &mut self.other,
        }
    }

    pub fn set(&mut self, kind: EmphasisType, text: String) {
        *self.slot_mut(kind) = text;
    }

    pub fn clear(&mut self, kind: EmphasisType) {
        self.slot_mut(kind).clear();
    }

    fn take(&mut self, kind: EmphasisType) -> String {
        std::mem::take(self.slot_mut(kind))
    }
}

/// All input fields of the composer, owned as one value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignForm {
    pub product_name: String,
    /// Free text. Never parsed as currency.
    pub price: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub category: Category,
    pub community: Community,
    /// Selected emphasis types, in selection order. Never holds duplicates.
    pub selected_emphasis: Vec<EmphasisType>,
    /// Confirmed entries, in the order they were added.
    pub emphasis_details: Vec<EmphasisDetail>,
    pub emphasis_inputs: EmphasisInputs,
    pub best_case: String,
}

impl CampaignForm {
    /// Startup defaults. Illustrative placeholder values, not real data.
    pub fn sample() -> Self {
        Self {
            product_name: "나이키 에어맥스 270".to_string(),
            price: "89,000원".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 27).unwrap(),
            category: Category::Fashion,
            community: Community::Ppomppu,
            selected_emphasis: Vec::new(),
            emphasis_details: Vec::new(),
            emphasis_inputs: EmphasisInputs::default(),
            best_case: String::new(),
        }
    }

    /// Selects `kind` if it is not selected, appending it to the end of the
    /// selection sequence. Deselecting cascades: every detail of that kind
    /// is deleted and its pending input is cleared.
    pub fn toggle_emphasis(&mut self, kind: EmphasisType) {
        if let Some(pos) = self.selected_emphasis.iter().position(|e| *e == kind) {
            self.selected_emphasis.remove(pos);
            self.emphasis_details.retain(|d| d.emphasis_type != kind);
            self.emphasis_inputs.clear(kind);
        } else {
            self.selected_emphasis.push(kind);
        }
    }

    pub fn update_emphasis_input(&mut self, kind: EmphasisType, text: String) {
        self.emphasis_inputs.set(kind, text);
    }

    /// Confirms the pending input of `kind` as a new detail and clears the
    /// slot. A slot that is blank after trimming is rejected and nothing
    /// changes. The entry keeps the raw, untrimmed text.
    ///
    /// Returns whether a detail was added.
    pub fn add_emphasis_detail(&mut self, kind: EmphasisType) -> bool {
        if self.emphasis_inputs.get(kind).trim().is_empty() {
            return false;
        }
        let content = self.emphasis_inputs.take(kind);
        self.emphasis_details.push(EmphasisDetail::new(kind, content));
        true
    }

    /// Removes the detail with the given id. Unknown ids are a no-op.
    pub fn remove_emphasis_detail(&mut self, id: &str) {
        self.emphasis_details.retain(|d| d.id != id);
    }

    /// Details of one kind, in insertion order.
    pub fn details_of(&self, kind: EmphasisType) -> impl Iterator<Item = &EmphasisDetail> {
        self.emphasis_details
            .iter()
            .filter(move |d| d.emphasis_type == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_keeps_selection_order() {
        let mut form = CampaignForm::sample();
        form.toggle_emphasis(EmphasisType::Keyword);
        form.toggle_emphasis(EmphasisType::Coupon);
        assert_eq!(
            form.selected_emphasis,
            vec![EmphasisType::Keyword, EmphasisType::Coupon]
        );
    }

    #[test]
    fn deselect_cascades_details_and_pending_input() {
        let mut form = CampaignForm::sample();
        form.toggle_emphasis(EmphasisType::Coupon);
        form.update_emphasis_input(EmphasisType::Coupon, "신규회원 20% 할인".to_string());
        assert!(form.add_emphasis_detail(EmphasisType::Coupon));
        form.update_emphasis_input(EmphasisType::Coupon, "미확정 문구".to_string());

        form.toggle_emphasis(EmphasisType::Coupon);
        assert!(form.selected_emphasis.is_empty());
        assert!(form.emphasis_details.is_empty());
        assert_eq!(form.emphasis_inputs.get(EmphasisType::Coupon), "");

        // Re-selecting starts from a clean slate.
        form.toggle_emphasis(EmphasisType::Coupon);
        assert_eq!(form.details_of(EmphasisType::Coupon).count(), 0);
    }

    #[test]
    fn blank_input_never_adds_a_detail() {
        let mut form = CampaignForm::sample();
        form.toggle_emphasis(EmphasisType::Event);
        form.update_emphasis_input(EmphasisType::Event, "   \n\t".to_string());
        assert!(!form.add_emphasis_detail(EmphasisType::Event));
        assert!(form.emphasis_details.is_empty());
    }

    #[test]
    fn add_detail_consumes_pending_input() {
        let mut form = CampaignForm::sample();
        form.toggle_emphasis(EmphasisType::Event);
        form.update_emphasis_input(EmphasisType::Event, " 무료배송 이벤트 ".to_string());
        assert!(form.add_emphasis_detail(EmphasisType::Event));
        assert_eq!(form.emphasis_details.len(), 1);
        // The stored content keeps the raw text.
        assert_eq!(form.emphasis_details[0].content, " 무료배송 이벤트 ");
        assert_eq!(form.emphasis_inputs.get(EmphasisType::Event), "");
    }

    #[test]
    fn removal_by_id_leaves_other_types_untouched() {
        let mut form = CampaignForm::sample();
        form.toggle_emphasis(EmphasisType::Coupon);
        form.toggle_emphasis(EmphasisType::Event);
        form.update_emphasis_input(EmphasisType::Coupon, "쿠폰 문구".to_string());
        form.add_emphasis_detail(EmphasisType::Coupon);
        form.update_emphasis_input(EmphasisType::Event, "이벤트 문구".to_string());
        form.add_emphasis_detail(EmphasisType::Event);

        let coupon_id = form
            .details_of(EmphasisType::Coupon)
            .next()
            .unwrap()
            .id
            .clone();
        form.remove_emphasis_detail(&coupon_id);

        assert_eq!(form.emphasis_details.len(), 1);
        assert_eq!(form.emphasis_details[0].emphasis_type, EmphasisType::Event);
        assert_eq!(form.emphasis_details[0].content, "이벤트 문구");
    }

    #[test]
    fn duplicate_contents_remove_only_the_targeted_entry() {
        let mut form = CampaignForm::sample();
        form.toggle_emphasis(EmphasisType::Keyword);
        for _ in 0..2 {
            form.update_emphasis_input(EmphasisType::Keyword, "한정수량".to_string());
            form.add_emphasis_detail(EmphasisType::Keyword);
        }
        let ids: Vec<String> = form.emphasis_details.iter().map(|d| d.id.clone()).collect();
        assert_ne!(ids[0], ids[1]);

        form.remove_emphasis_detail(&ids[0]);
        assert_eq!(form.emphasis_details.len(), 1);
        assert_eq!(form.emphasis_details[0].id, ids[1]);
    }

    #[test]
    fn sample_defaults() {
        let form = CampaignForm::sample();
        assert_eq!(form.product_name, "나이키 에어맥스 270");
        assert_eq!(form.price, "89,000원");
        assert_eq!(form.category, Category::Fashion);
        assert_eq!(form.community, Community::Ppomppu);
        assert!(form.best_case.is_empty());
    }

    #[test]
    fn select_values_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_value(category.as_str()), Some(category));
        }
        for community in Community::ALL {
            assert_eq!(Community::from_value(community.as_str()), Some(community));
        }
        assert_eq!(Category::from_value("food"), None);
        assert_eq!(Community::from_value(""), None);
    }
}
