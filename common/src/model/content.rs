use serde::{Deserialize, Serialize};

/// Narrative register of a generated draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Friendly,
    Informational,
    Review,
    Humorous,
}

impl Tone {
    /// Generation order. Drafts always come out as one of each.
    pub const ALL: [Tone; 4] = [Tone::Friendly, Tone::Informational, Tone::Review, Tone::Humorous];

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Friendly => "친근한 톤",
            Tone::Informational => "정보 전달형",
            Tone::Review => "후기형",
            Tone::Humorous => "유머러스한 톤",
        }
    }
}

/// One generated draft. Derived data: recomputed in full on every
/// generation request and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedContent {
    /// 1-based position, 1..=4.
    pub id: u8,
    pub tone: Tone,
    pub text: String,
}

impl GeneratedContent {
    /// Mock engagement percentage shown on the result card. A fixed
    /// function of the card position, not a measured signal.
    pub fn expected_engagement(&self) -> u8 {
        70 + self.id * 5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engagement_is_positional() {
        let scores: Vec<u8> = (1..=4)
            .map(|id| {
                GeneratedContent {
                    id,
                    tone: Tone::Friendly,
                    text: String::new(),
                }
                .expected_engagement()
            })
            .collect();
        assert_eq!(scores, vec![75, 80, 85, 90]);
    }

    #[test]
    fn tone_labels() {
        assert_eq!(Tone::Friendly.label(), "친근한 톤");
        assert_eq!(Tone::Informational.label(), "정보 전달형");
        assert_eq!(Tone::Review.label(), "후기형");
        assert_eq!(Tone::Humorous.label(), "유머러스한 톤");
    }
}
