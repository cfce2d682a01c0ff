pub mod config;
pub mod data;
pub mod error;
pub mod format;
pub mod html;
pub mod modal_form;
pub mod time;
