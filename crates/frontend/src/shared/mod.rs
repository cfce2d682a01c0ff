pub mod api_utils;
pub mod date_utils;
pub mod modal_form;
pub mod modal_frame;
