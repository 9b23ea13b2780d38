use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::{game_view::GameView, house_view::HouseView};
use crate::config::GameConfig;
use crate::model::{Game, GameAction, ItemId, View};
use crate::state::{now_ms, GameStore, LocalStorage};

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| GameConfig::default());

    // Load persisted game, or start fresh
    let game = {
        let config = config.clone();
        use_reducer(move || {
            let state = GameStore::new(LocalStorage, &config).load_or_default(now_ms());
            log::info!(
                "loaded game: {} Shekltk, energy {}, {} items",
                state.currency,
                state.energy,
                state.owned_items.len()
            );
            Game::new(config.clone(), state)
        })
    };

    // Persist after every state change
    {
        let config = config.clone();
        use_effect_with(game.state.clone(), move |state| {
            if let Err(e) = GameStore::new(LocalStorage, &config).save(state) {
                log::error!("failed to save game: {e}");
            }
            || ()
        });
    }

    // Regeneration: once on mount, then on a fixed cadence
    {
        let game = game.clone();
        let interval_ms = config.tick_interval_ms;
        use_effect_with((), move |_| {
            game.dispatch(GameAction::Tick { now_ms: now_ms() });
            let regen_tick = {
                let game = game.clone();
                Closure::wrap(Box::new(move || {
                    game.dispatch(GameAction::Tick { now_ms: now_ms() });
                }) as Box<dyn FnMut()>)
            };
            let window = web_sys::window();
            let regen_tick_id = window.as_ref().and_then(|win| {
                win.set_interval_with_callback_and_timeout_and_arguments_0(
                    regen_tick.as_ref().unchecked_ref(),
                    interval_ms as i32,
                )
                .map_err(|e| log::error!("could not start regeneration timer: {e:?}"))
                .ok()
            });
            move || {
                if let (Some(win), Some(id)) = (window, regen_tick_id) {
                    win.clear_interval_with_handle(id);
                }
                drop(regen_tick);
            }
        });
    }

    let on_click = {
        let game = game.clone();
        Callback::from(move |_: ()| game.dispatch(GameAction::Click { now_ms: now_ms() }))
    };
    let purchase = {
        let game = game.clone();
        Callback::from(move |id: ItemId| game.dispatch(GameAction::Buy(id)))
    };
    let to_view = |view: View| {
        let game = game.clone();
        Callback::from(move |_: ()| game.dispatch(GameAction::SwitchView(view)))
    };

    match game.state.current_view {
        View::Game => html! { <GameView
            state={game.state.clone()}
            config={game.config.clone()}
            on_click={on_click}
            to_house={to_view(View::House)}
        /> },
        View::House => html! { <HouseView
            state={game.state.clone()}
            purchase={purchase}
            to_game={to_view(View::Game)}
        /> },
    }
}
