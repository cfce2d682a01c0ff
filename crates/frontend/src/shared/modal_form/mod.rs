pub mod button;
pub mod controller;
pub mod host;
pub mod model;

pub use button::ModalButton;
pub use host::{ModalFormHost, ModalFormService};
