//! Draft generation.
//!
//! Builds the four tone variants from the current form by plain string
//! interpolation over fixed Korean skeletons. There is no model call behind
//! this; the output is fully deterministic for a given form, and the form
//! itself is never touched.

use chrono::{Datelike, NaiveDate};

use crate::model::content::{GeneratedContent, Tone};
use crate::model::form::CampaignForm;

/// Produces exactly four drafts with ids 1..=4 in fixed tone order. Empty
/// form fields substitute as empty strings; with no emphasis details the
/// join collapses to an empty line.
pub fn generate_drafts(form: &CampaignForm) -> Vec<GeneratedContent> {
    Tone::ALL
        .iter()
        .enumerate()
        .map(|(i, tone)| GeneratedContent {
            id: i as u8 + 1,
            tone: *tone,
            text: render(*tone, form),
        })
        .collect()
}

fn render(tone: Tone, form: &CampaignForm) -> String {
    match tone {
        Tone::Friendly => friendly(form),
        Tone::Informational => informational(form),
        Tone::Review => review(form),
        Tone::Humorous => humorous(form),
    }
}

/// Detail contents joined with plain newlines.
fn plain_emphasis(form: &CampaignForm) -> String {
    form.emphasis_details
        .iter()
        .map(|d| d.content.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Bullet-prefixed variant used by the informational tone.
fn bullet_emphasis(form: &CampaignForm) -> String {
    form.emphasis_details
        .iter()
        .map(|d| format!("• {}", d.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Short month-and-day form quoted in deal posts, e.g. "1월 20일".
fn deal_date(date: NaiveDate) -> String {
    format!("{}월 {}일", date.month(), date.day())
}

fn friendly(form: &CampaignForm) -> String {
    format!(
        "{} 이거 진짜 대박이에요 ㄷㄷ\n\n작년에 {}에 샀는데 지금 보니까 또 세일하네요.\n이 가격에 이 퀄리티면 가성비 ㅇㅈ?\n\n{}\n\n놓치면 후회할 듯... 저는 재구매 각입니다 👍",
        form.product_name,
        form.price,
        plain_emphasis(form),
    )
}

fn informational(form: &CampaignForm) -> String {
    format!(
        "{} 특가 정보 공유합니다.\n\n가격: {}\n기간: {} ~ {}\n\n{}\n\n비교해보니 역대급 가격인 것 같아서 올립니다.\n필요하신 분들 참고하세요!",
        form.product_name,
        form.price,
        deal_date(form.start_date),
        deal_date(form.end_date),
        bullet_emphasis(form),
    )
}

fn review(form: &CampaignForm) -> String {
    format!(
        "{} 쓴지 3개월 됐는데 후기 남깁니다.\n\n솔직히 처음엔 {} 주고 사기 좀 망설였는데\n지금은 완전 만족 중이에요 ㅎㅎ\n\n{}\n\n지금 또 세일한다길래 주변에 추천하려고 글 올려요.\n고민하시는 분들한테는 강추!",
        form.product_name,
        form.price,
        plain_emphasis(form),
    )
}

fn humorous(form: &CampaignForm) -> String {
    format!(
        "{} {}이라니...\n\n(이거 사야되나 말아야되나 고민중)\n\n{}\n\n지갑: 안돼...😭\n나: 어차피 살 거 지금 사는 게 이득 아니야?\n지갑: ...💸\n\n결국 또 질렀습니다 여러분 ㅋㅋㅋ\n같이 망하실 분? 🙋‍♀️",
        form.product_name,
        form.price,
        plain_emphasis(form),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::emphasis::EmphasisType;

    fn form_with_details(contents: &[&str]) -> CampaignForm {
        let mut form = CampaignForm::sample();
        form.toggle_emphasis(EmphasisType::Coupon);
        for content in contents {
            form.update_emphasis_input(EmphasisType::Coupon, content.to_string());
            form.add_emphasis_detail(EmphasisType::Coupon);
        }
        form
    }

    #[test]
    fn always_four_drafts_with_fixed_ids_and_tones() {
        for form in [CampaignForm::sample(), form_with_details(&["쿠폰 문구"])] {
            let drafts = generate_drafts(&form);
            assert_eq!(drafts.len(), 4);
            assert_eq!(
                drafts.iter().map(|d| d.id).collect::<Vec<_>>(),
                vec![1, 2, 3, 4]
            );
            assert_eq!(
                drafts.iter().map(|d| d.tone).collect::<Vec<_>>(),
                Tone::ALL.to_vec()
            );
        }
    }

    #[test]
    fn friendly_substitutes_values_verbatim() {
        let drafts = generate_drafts(&CampaignForm::sample());
        let friendly = &drafts[0].text;
        assert!(friendly.contains("나이키 에어맥스 270"));
        assert!(friendly.contains("89,000원"));
        // No details: the emphasis block collapses to an empty line.
        assert!(friendly.contains("가성비 ㅇㅈ?\n\n\n\n놓치면"));
    }

    #[test]
    fn informational_uses_bullets_and_deal_period() {
        let form = form_with_details(&["신규회원 20% 할인", "무료배송"]);
        let drafts = generate_drafts(&form);
        let info = &drafts[1].text;
        assert!(info.contains("가격: 89,000원"));
        assert!(info.contains("기간: 1월 20일 ~ 1월 27일"));
        assert!(info.contains("• 신규회원 20% 할인\n• 무료배송"));
    }

    #[test]
    fn other_tones_join_details_without_bullets() {
        let form = form_with_details(&["첫 줄", "둘째 줄"]);
        let drafts = generate_drafts(&form);
        for draft in [&drafts[0], &drafts[2], &drafts[3]] {
            assert!(draft.text.contains("첫 줄\n둘째 줄"));
            assert!(!draft.text.contains("• 첫 줄"));
        }
    }

    #[test]
    fn generation_is_deterministic_and_leaves_the_form_alone() {
        let form = form_with_details(&["한정수량"]);
        let before = form.clone();
        let first = generate_drafts(&form);
        let second = generate_drafts(&form);
        assert_eq!(first, second);
        assert_eq!(form, before);
    }

    #[test]
    fn deal_date_has_no_zero_padding() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(deal_date(date), "1월 5일");
        let date = NaiveDate::from_ymd_opt(2025, 11, 23).unwrap();
        assert_eq!(deal_date(date), "11월 23일");
    }

    #[test]
    fn empty_fields_still_generate() {
        let mut form = CampaignForm::sample();
        form.product_name.clear();
        form.price.clear();
        let drafts = generate_drafts(&form);
        assert_eq!(drafts.len(), 4);
        assert!(drafts[0].text.starts_with(" 이거 진짜 대박이에요"));
    }
}
