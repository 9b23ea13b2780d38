mod components;
mod config;
mod error;
mod model;
mod state;
mod util;

use components::App;

fn main() {
    util::init_logging();
    log::info!("starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    yew::Renderer::<App>::new().render();
}
