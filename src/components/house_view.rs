use yew::prelude::*;

use super::{
    balance_header::BalanceHeader, icon::Icon, room_panel::RoomPanel,
    shop_item_card::ShopItemCard,
};
use crate::model::{GameState, ItemId, ITEM_CATALOG};

#[derive(Properties, PartialEq, Clone)]
pub struct HouseViewProps {
    pub state: GameState,
    pub purchase: Callback<ItemId>,
    pub to_game: Callback<()>,
}

#[function_component(HouseView)]
pub fn house_view(props: &HouseViewProps) -> Html {
    let to_game = {
        let cb = props.to_game.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let cards = ITEM_CATALOG.iter().map(|def| {
        html! {
            <ShopItemCard
                key={def.id.as_str()}
                def={def}
                status={props.state.item_status(def.id)}
                purchase={props.purchase.clone()}
            />
        }
    });
    html! {
        <div style="min-height:100vh; background:linear-gradient(to bottom right,#78350f,#9a3412,#78350f); color:#fff; font-family:'Rubik',sans-serif;">
            <BalanceHeader
                currency={props.state.currency}
                title={Some(AttrValue::Static("🏠 Мой дом"))}
                accent="#fdba74"
                background="rgba(146,64,14,0.5)"
            />
            <div style="max-width:960px; margin:0 auto; padding:0 16px;">
                <RoomPanel owned={props.state.owned_items.clone()} />
                <div style="display:grid; grid-template-columns:repeat(auto-fit,minmax(320px,1fr)); gap:16px; margin-bottom:24px;">
                    { for cards }
                </div>
                <div style="text-align:center; padding-bottom:24px;">
                    <button onclick={to_game} style="display:inline-flex; align-items:center; gap:8px; padding:12px 32px; font-size:18px; color:#fff; background:#9333ea; border:none; border-radius:8px; cursor:pointer;">
                        <Icon name="ArrowLeft" size={20} />{"Вернуться к игре"}
                    </button>
                </div>
            </div>
        </div>
    }
}
