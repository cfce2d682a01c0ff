pub mod form_fields;
pub mod modal_form;
