use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The four emphasis categories a campaign can highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmphasisType {
    Coupon,
    Event,
    Keyword,
    Other,
}

impl EmphasisType {
    /// Badge display order in the form.
    pub const ALL: [EmphasisType; 4] = [
        EmphasisType::Coupon,
        EmphasisType::Event,
        EmphasisType::Keyword,
        EmphasisType::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EmphasisType::Coupon => "쿠폰",
            EmphasisType::Event => "이벤트",
            EmphasisType::Keyword => "특정 키워드",
            EmphasisType::Other => "기타",
        }
    }

    /// Hint shown in the detail textarea while the slot is empty.
    pub fn placeholder(&self) -> &'static str {
        match self {
            EmphasisType::Coupon => "예: 신규회원 20% 할인 쿠폰, 최대 5만원까지",
            EmphasisType::Event => "예: 첫 구매 시 추가 5,000원 할인 + 무료배송",
            EmphasisType::Keyword => "예: 한정수량, 조기품절, 인기상품",
            EmphasisType::Other => "상세 내용을 입력하세요",
        }
    }
}

/// One confirmed emphasis entry. Immutable once added; removal targets the
/// `id`, so two entries with identical text never collide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmphasisDetail {
    pub id: String,
    pub emphasis_type: EmphasisType,
    pub content: String,
}

impl EmphasisDetail {
    pub fn new(emphasis_type: EmphasisType, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            emphasis_type,
            content: content.into(),
        }
    }
}
