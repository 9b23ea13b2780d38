use crate::model::{ItemDef, ItemId, ItemStatus};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ShopItemCardProps {
    pub def: &'static ItemDef,
    pub status: ItemStatus,
    pub purchase: Callback<ItemId>,
}

/// Button label and background for a shop entry.
pub fn status_label(status: ItemStatus) -> (&'static str, &'static str) {
    match status {
        ItemStatus::Owned => ("✓ Куплено", "#16a34a"),
        ItemStatus::Affordable => ("Купить", "#ea580c"),
        ItemStatus::TooExpensive => ("Дорого", "#4b5563"),
    }
}

#[function_component]
pub fn ShopItemCard(props: &ShopItemCardProps) -> Html {
    let def = props.def;
    let can_buy = props.status == ItemStatus::Affordable;
    let buy = {
        let cb = props.purchase.clone();
        let id = def.id;
        Callback::from(move |_| cb.emit(id))
    };
    let (label, color) = status_label(props.status);
    let button_style = format!(
        "margin-left:16px; padding:8px 16px; border:none; border-radius:6px; color:#fff; background:{color}; cursor:{};",
        if can_buy { "pointer" } else { "default" }
    );
    html! {
        <div style="background:rgba(146,64,14,0.5); border:1px solid rgba(249,115,22,0.3); border-radius:12px; padding:16px;">
            <div style="display:flex; align-items:center; justify-content:space-between;">
                <div style="flex:1;">
                    <h4 style="margin:0; font-size:18px; font-weight:700; color:#fed7aa;">{ format!("{} {}", def.emoji, def.name) }</h4>
                    <p style="margin:4px 0; font-size:14px; color:#fcd34d;">{ def.description }</p>
                    <p style="margin:0; font-weight:600; color:#fb923c;">{ format!("💎 {} Shekltk", def.price.tenths() / 10) }</p>
                </div>
                <button onclick={buy} disabled={!can_buy} style={button_style}>{ label }</button>
            </div>
        </div>
    }
}
