//! View rendering for the campaign composer.
//!
//! Two screens share one component: the input form (basic info, deal
//! period, target selects, emphasis badges with per-type detail editors,
//! and the collapsible best-case section) and the results screen (a
//! two-column grid of the four generated draft cards). Builder functions
//! keep each section readable; all of them forward events through the
//! component `Scope`.

use common::model::content::GeneratedContent;
use common::model::emphasis::EmphasisType;
use common::model::form::{Category, Community};
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{CampaignComponent, Screen};

pub fn view(component: &CampaignComponent, ctx: &Context<CampaignComponent>) -> Html {
    let link = ctx.link();
    match component.screen {
        Screen::Form => form_screen(component, link),
        Screen::Results => results_screen(component, link),
    }
}

fn form_screen(component: &CampaignComponent, link: &Scope<CampaignComponent>) -> Html {
    html! {
        <div class="page">
            <header class="page-header">
                <h1>{"✨ 커뮤니티 바이럴 콘텐츠 생성 시스템"}</h1>
                <p class="page-subtitle">{"상품 정보를 입력하고 커뮤니티에 맞는 원고를 자동으로 생성하세요"}</p>
            </header>
            <main class="page-body">
                <div class="form-card">
                    { basic_info_section(component, link) }
                    { period_section(component, link) }
                    { target_section(component, link) }
                    { emphasis_section(component, link) }
                    { best_case_section(component, link) }
                    <div class="generate-row">
                        <button class="primary-btn large" onclick={link.callback(|_| Msg::Generate)}>
                            {"✨ 원고 생성하기 (4개)"}
                        </button>
                    </div>
                </div>
                <p class="footnote">{"* 필수 입력 항목을 모두 작성한 후 원고를 생성하세요"}</p>
            </main>
        </div>
    }
}

/// Product name and price. Both free text.
fn basic_info_section(component: &CampaignComponent, link: &Scope<CampaignComponent>) -> Html {
    html! {
        <section class="form-section">
            <h2>{"기본 정보"}</h2>
            <div class="field-grid">
                <div class="field">
                    <label for="product-name">{"상품명 *"}</label>
                    <input
                        id="product-name"
                        type="text"
                        placeholder="예: 나이키 에어맥스 270"
                        value={component.form.product_name.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::UpdateProductName(input.value())
                        })}
                    />
                </div>
                <div class="field">
                    <label for="price">{"가격 *"}</label>
                    <input
                        id="price"
                        type="text"
                        placeholder="예: 89,000원"
                        value={component.form.price.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::UpdatePrice(input.value())
                        })}
                    />
                </div>
            </div>
        </section>
    }
}

/// Deal period. Native date pickers reporting "YYYY-MM-DD" values.
fn period_section(component: &CampaignComponent, link: &Scope<CampaignComponent>) -> Html {
    html! {
        <section class="form-section">
            <h2>{"바이럴 기간"}</h2>
            <div class="field-grid">
                <div class="field">
                    <label for="start-date">{"시작일 *"}</label>
                    <input
                        id="start-date"
                        type="date"
                        value={component.form.start_date.format("%Y-%m-%d").to_string()}
                        onchange={link.callback(|e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::UpdateStartDate(input.value())
                        })}
                    />
                </div>
                <div class="field">
                    <label for="end-date">{"종료일 *"}</label>
                    <input
                        id="end-date"
                        type="date"
                        value={component.form.end_date.format("%Y-%m-%d").to_string()}
                        onchange={link.callback(|e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::UpdateEndDate(input.value())
                        })}
                    />
                </div>
            </div>
        </section>
    }
}

fn target_section(component: &CampaignComponent, link: &Scope<CampaignComponent>) -> Html {
    html! {
        <section class="form-section">
            <h2>{"타겟 설정"}</h2>
            <div class="field-grid">
                <div class="field">
                    <label for="category">{"카테고리 *"}</label>
                    <select
                        id="category"
                        onchange={link.callback(|e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            Msg::UpdateCategory(select.value())
                        })}
                    >
                        {
                            Category::ALL.iter().map(|category| html! {
                                <option
                                    value={category.as_str()}
                                    selected={component.form.category == *category}
                                >
                                    { category.label() }
                                </option>
                            }).collect::<Html>()
                        }
                    </select>
                </div>
                <div class="field">
                    <label for="community">{"타겟 커뮤니티 *"}</label>
                    <select
                        id="community"
                        onchange={link.callback(|e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            Msg::UpdateCommunity(select.value())
                        })}
                    >
                        {
                            Community::ALL.iter().map(|community| html! {
                                <option
                                    value={community.as_str()}
                                    selected={component.form.community == *community}
                                >
                                    { community.label() }
                                </option>
                            }).collect::<Html>()
                        }
                    </select>
                </div>
            </div>
        </section>
    }
}

/// Emphasis badges plus one detail editor per selected type, in selection
/// order.
fn emphasis_section(component: &CampaignComponent, link: &Scope<CampaignComponent>) -> Html {
    let badges = EmphasisType::ALL
        .iter()
        .map(|kind| {
            let kind = *kind;
            let selected = component.form.selected_emphasis.contains(&kind);
            html! {
                <span
                    class={classes!("emphasis-badge", if selected { "selected" } else { "" })}
                    onclick={link.callback(move |_| Msg::ToggleEmphasis(kind))}
                >
                    { kind.label() }
                </span>
            }
        })
        .collect::<Html>();

    let editors = component
        .form
        .selected_emphasis
        .iter()
        .map(|kind| emphasis_detail_editor(component, link, *kind))
        .collect::<Html>();

    html! {
        <section class="form-section">
            <h2>{"강조 사항"}</h2>
            <label class="block-label">{"강조 사항 종류 선택"}</label>
            <div class="badge-row">{ badges }</div>
            {
                if component.form.selected_emphasis.is_empty() {
                    html! {}
                } else {
                    html! { <div class="emphasis-panel">{ editors }</div> }
                }
            }
        </section>
    }
}

/// Detail entry for one emphasis type: a textarea for the pending text, an
/// add button (disabled while blank), and the confirmed entries with
/// per-row delete.
fn emphasis_detail_editor(
    component: &CampaignComponent,
    link: &Scope<CampaignComponent>,
    kind: EmphasisType,
) -> Html {
    let pending = component.form.emphasis_inputs.get(kind);
    let details = component
        .form
        .details_of(kind)
        .map(|detail| {
            let id = detail.id.clone();
            html! {
                <div class="detail-row" key={detail.id.clone()}>
                    <span class="detail-content">{ detail.content.clone() }</span>
                    <button
                        class="ghost-btn"
                        onclick={link.callback(move |_| Msg::RemoveEmphasisDetail(id.clone()))}
                    >
                        {"삭제"}
                    </button>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class="emphasis-editor">
            <div class="emphasis-editor-head">
                <span class="badge secondary">{ kind.label() }</span>
                <label class="small-label">{"상세 내용 입력"}</label>
            </div>
            <div class="emphasis-editor-input">
                <textarea
                    rows="2"
                    placeholder={kind.placeholder()}
                    value={pending.to_string()}
                    oninput={link.callback(move |e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        Msg::UpdateEmphasisInput(kind, input.value())
                    })}
                />
                <button
                    class="primary-btn"
                    disabled={pending.trim().is_empty()}
                    onclick={link.callback(move |_| Msg::AddEmphasisDetail(kind))}
                >
                    {"추가"}
                </button>
            </div>
            { details }
        </div>
    }
}

fn best_case_section(component: &CampaignComponent, link: &Scope<CampaignComponent>) -> Html {
    let chevron = if component.best_case_open { "▲" } else { "▼" };
    html! {
        <section class="form-section">
            <div class="collapsible-head" onclick={link.callback(|_| Msg::ToggleBestCase)}>
                <h2>{"⭐ 베스트 사례 (선택사항)"}</h2>
                <span class="chevron">{ chevron }</span>
            </div>
            {
                if component.best_case_open {
                    html! {
                        <div class="field">
                            <label for="best-case">{"이전에 효과가 좋았던 원고 문구를 입력하세요"}</label>
                            <p class="field-hint">
                                {"예: \"이거 진짜 대박... 작년에 샀는데 아직도 잘 신고 있음. 이 가격에 이 퀄이면 가성비 ㅇㅈ?\""}
                            </p>
                            <textarea
                                id="best-case"
                                rows="4"
                                placeholder="좋은 반응을 얻었던 원고 문구나 표현 방식을 자유롭게 입력하세요. 여러 개를 작성해도 좋습니다."
                                value={component.form.best_case.clone()}
                                oninput={link.callback(|e: InputEvent| {
                                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                                    Msg::UpdateBestCase(input.value())
                                })}
                            />
                            <p class="field-hint">
                                {"💡 입력하신 베스트 사례는 AI 학습에 활용되어 더 나은 원고를 생성하는 데 도움이 됩니다."}
                            </p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </section>
    }
}

fn results_screen(component: &CampaignComponent, link: &Scope<CampaignComponent>) -> Html {
    let cards = component
        .generated
        .iter()
        .map(|content| result_card(content, link))
        .collect::<Html>();

    html! {
        <div class="page">
            <header class="page-header results-header">
                <button class="ghost-btn" onclick={link.callback(|_| Msg::BackToForm)}>
                    {"← 입력 화면으로"}
                </button>
                <h1>{"✨ 생성된 원고"}</h1>
                <div class="header-spacer"></div>
            </header>
            <p class="results-subtitle">
                { format!("{} • {}", component.form.product_name, component.form.community.label()) }
            </p>
            <main class="page-body">
                <div class="results-grid">{ cards }</div>
                <div class="results-actions">
                    <button class="outline-btn large" onclick={link.callback(|_| Msg::BackToForm)}>
                        {"새로운 원고 생성"}
                    </button>
                    <button class="primary-btn large" onclick={link.callback(|_| Msg::Regenerate)}>
                        {"✨ 다시 생성하기"}
                    </button>
                </div>
            </main>
        </div>
    }
}

/// One draft card: version badge, tone label, favorite star, the draft
/// text, copy/edit actions, and the mock engagement bar.
fn result_card(content: &GeneratedContent, link: &Scope<CampaignComponent>) -> Html {
    let copy_text = content.text.clone();
    let engagement = content.expected_engagement();

    html! {
        <div class="result-card" key={content.id.to_string()}>
            <div class="result-card-head">
                <span class="badge secondary">{ format!("버전 {}", content.id) }</span>
                <span class="tone-label">{ content.tone.label() }</span>
                <button class="ghost-btn star" onclick={link.callback(|_| Msg::MarkFavorite)}>
                    {"★"}
                </button>
            </div>
            <div class="result-body">
                <p class="result-text">{ content.text.clone() }</p>
            </div>
            <div class="result-card-actions">
                <button
                    class="outline-btn"
                    onclick={link.callback(move |_| Msg::Copy(copy_text.clone()))}
                >
                    {"복사"}
                </button>
                <button class="outline-btn">{"수정"}</button>
            </div>
            <div class="engagement-row">
                <span class="engagement-label">{"👍 예상 반응도"}</span>
                <div class="engagement-track">
                    <div class="engagement-fill" style={format!("width: {}%;", engagement)}></div>
                </div>
                <span>{ format!("{}%", engagement) }</span>
            </div>
        </div>
    }
}
