pub mod clock;
pub mod store;

pub use clock::now_ms;
pub use store::{GameStore, LocalStorage, StateStorage};
