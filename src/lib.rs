pub mod button;
pub mod error;
pub mod observer;
pub mod render;
pub mod store;
pub mod view;

pub use button::{Button, NUM_BUTTONS};
pub use error::StoreError;
pub use store::ButtonStore;
pub use view::{LightView, UiEvent};
