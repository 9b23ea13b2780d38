use crate::model::OwnedItems;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RoomPanelProps {
    pub owned: OwnedItems,
}

#[function_component]
pub fn RoomPanel(props: &RoomPanelProps) -> Html {
    let items = props.owned.iter().map(|id| {
        let def = id.def();
        html! {
            <div key={id.as_str()} style="text-align:center;">
                <div style="font-size:36px; margin-bottom:8px;">{ def.emoji }</div>
                <p style="margin:0; font-size:12px; color:#fde68a;">{ def.name }</p>
            </div>
        }
    });
    html! {
        <div style="background:linear-gradient(to bottom,#d97706,#b45309); border:4px solid rgba(245,158,11,0.5); border-radius:24px; padding:32px; margin-bottom:24px;">
            <div style="text-align:center; margin-bottom:24px;">
                <h3 style="margin:0; font-size:24px; font-weight:700; color:#fef3c7;">{"Твоя комната"}</h3>
            </div>
            <div style="display:grid; grid-template-columns:repeat(3,1fr); gap:16px; min-height:200px; background:rgba(245,158,11,0.2); border-radius:16px; padding:24px;">
                { for items }
                if props.owned.is_empty() {
                    <div style="grid-column:span 3; text-align:center; color:#fcd34d; font-size:18px;">
                        {"Пустая комната... Купи что-нибудь!"}
                    </div>
                }
            </div>
        </div>
    }
}
