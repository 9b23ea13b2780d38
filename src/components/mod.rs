pub mod app;
pub mod balance_header;
pub mod click_button;
pub mod energy_panel;
pub mod game_view;
pub mod house_view;
pub mod icon;
pub mod room_panel;
pub mod shop_item_card;

pub use app::App;
