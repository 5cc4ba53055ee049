use common::model::emphasis::EmphasisType;

#[derive(Clone)]
pub enum Msg {
    UpdateProductName(String),
    UpdatePrice(String),
    UpdateStartDate(String),
    UpdateEndDate(String),
    UpdateCategory(String),
    UpdateCommunity(String),
    ToggleEmphasis(EmphasisType),
    UpdateEmphasisInput(EmphasisType, String),
    AddEmphasisDetail(EmphasisType),
    RemoveEmphasisDetail(String),
    UpdateBestCase(String),
    ToggleBestCase,
    Generate,
    Regenerate,
    BackToForm,
    Copy(String),
    MarkFavorite,
}
