use crate::model::Shekltk;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BalanceHeaderProps {
    pub currency: Shekltk,
    /// When set, the title replaces the balance and the balance moves below it.
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or(AttrValue::Static("#d8b4fe"))]
    pub accent: AttrValue,
    #[prop_or(AttrValue::Static("rgba(30,41,59,0.5)"))]
    pub background: AttrValue,
}

#[function_component]
pub fn BalanceHeader(props: &BalanceHeaderProps) -> Html {
    let balance = format!("💎 {} Shekltk", props.currency);
    let card_style = format!(
        "background:{}; border:1px solid rgba(168,85,247,0.3); border-radius:12px; padding:16px 20px; text-align:center; backdrop-filter:blur(4px);",
        props.background
    );
    let title_style = format!("margin:0; font-size:30px; font-weight:700; color:{};", props.accent);
    html! {
        <div style="max-width:960px; margin:0 auto; padding:24px 16px;">
            <div style={card_style}>
                {
                    match &props.title {
                        Some(title) => html! {<>
                            <h1 style={title_style}>{ title.clone() }</h1>
                            <p style="margin:8px 0 0 0; color:#fde68a;">{ balance }</p>
                        </>},
                        None => html! { <h1 style={title_style}>{ balance }</h1> },
                    }
                }
            </div>
        </div>
    }
}
