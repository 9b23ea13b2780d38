use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::{
    balance_header::BalanceHeader, click_button::ClickButton, energy_panel::EnergyPanel,
    icon::Icon,
};
use crate::config::GameConfig;
use crate::model::{GameState, Shekltk};

#[derive(Properties, PartialEq, Clone)]
pub struct GameViewProps {
    pub state: GameState,
    pub config: Rc<GameConfig>,
    pub on_click: Callback<()>,
    pub to_house: Callback<()>,
}

/// Pending pulse timeout: browser handle plus the closure it calls.
type PulseTimer = Option<(i32, Closure<dyn FnMut()>)>;

#[function_component(GameView)]
pub fn game_view(props: &GameViewProps) -> Html {
    let pulse = use_state(|| false);
    let pulse_timer: Rc<RefCell<PulseTimer>> = use_mut_ref(|| None);

    // Drop any pending pulse timeout on teardown
    {
        let pulse_timer = pulse_timer.clone();
        use_effect_with((), move |_| {
            move || {
                if let Some((id, _cb)) = pulse_timer.borrow_mut().take() {
                    if let Some(win) = web_sys::window() {
                        win.clear_timeout_with_handle(id);
                    }
                }
            }
        });
    }

    let can_click = props.state.can_click(&props.config);
    let on_click = {
        let cb = props.on_click.clone();
        let pulse = pulse.clone();
        let pulse_timer = pulse_timer.clone();
        let pulse_ms = props.config.pulse_ms;
        Callback::from(move |_: ()| {
            if !can_click {
                return;
            }
            cb.emit(());
            pulse.set(true);
            let Some(win) = web_sys::window() else {
                return;
            };
            let mut timer = pulse_timer.borrow_mut();
            if let Some((id, _old)) = timer.take() {
                win.clear_timeout_with_handle(id);
            }
            let reset = {
                let pulse = pulse.clone();
                Closure::wrap(Box::new(move || pulse.set(false)) as Box<dyn FnMut()>)
            };
            match win.set_timeout_with_callback_and_timeout_and_arguments_0(
                reset.as_ref().unchecked_ref(),
                pulse_ms as i32,
            ) {
                Ok(id) => *timer = Some((id, reset)),
                Err(e) => {
                    log::warn!("could not schedule click pulse reset: {e:?}");
                    pulse.set(false);
                }
            }
        })
    };
    let to_house = {
        let cb = props.to_house.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let cfg = &props.config;
    html! {
        <div style="min-height:100vh; background:linear-gradient(to bottom right,#0f172a,#581c87,#0f172a); color:#fff; font-family:'Rubik',sans-serif;">
            <BalanceHeader currency={props.state.currency} />
            <div style="max-width:960px; margin:0 auto; padding:0 16px 24px 16px; display:flex; flex-direction:column; align-items:center;">
                <div style="margin-bottom:32px;">
                    <ClickButton disabled={!can_click} pulse={*pulse} on_click={on_click} />
                </div>
                <EnergyPanel
                    energy={props.state.energy}
                    cap={cfg.energy_cap}
                    percent={cfg.energy_percent(props.state.energy)}
                />
                <div style="margin-top:24px; text-align:center; color:#94a3b8;">
                    <p style="font-size:14px; margin:0;">
                        { format!("За клик: +{} Shekltk | Стоимость: {} энергия", Shekltk::from_tenths(cfg.click_reward_tenths), cfg.click_cost) }
                    </p>
                </div>
                <button onclick={to_house} style="margin-top:24px; display:flex; align-items:center; gap:8px; padding:12px 32px; font-size:18px; color:#fff; background:#d97706; border:none; border-radius:8px; cursor:pointer;">
                    <Icon name="House" size={20} />{"Мой дом"}
                </button>
            </div>
        </div>
    }
}
