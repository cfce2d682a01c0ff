//! Builders for the server-rendered modal form fragments
//!
//! Markup follows Bootstrap 4 form conventions. Every user supplied value
//! goes through [`escape`].

use contracts::shared::modal_form::{FORM_ID, SUBMIT_ID};

/// Escape text for element content and quoted attribute values
pub fn escape(text: &str) -> String {
    ammonia::clean_text(text)
}

/// A `(value, caption)` option of a select
pub type Choice = (i64, String);

fn field_errors(errors: &[String]) -> String {
    errors
        .iter()
        .map(|e| format!(r#"<div class="invalid-feedback d-block">{}</div>"#, escape(e)))
        .collect()
}

fn invalid_class(errors: &[String]) -> &'static str {
    if errors.is_empty() {
        ""
    } else {
        " is-invalid"
    }
}

pub fn text_input(name: &str, label: &str, value: &str, max_len: usize, errors: &[String]) -> String {
    format!(
        r#"<div class="form-group"><label for="{name}">{label}</label><input type="text" class="form-control{invalid}" id="{name}" name="{name}" value="{value}" maxlength="{max_len}">{errors}</div>"#,
        name = name,
        label = escape(label),
        invalid = invalid_class(errors),
        value = escape(value),
        max_len = max_len,
        errors = field_errors(errors),
    )
}

pub fn number_input(name: &str, label: &str, value: &str, step: &str, errors: &[String]) -> String {
    format!(
        r#"<div class="form-group"><label for="{name}">{label}</label><input type="number" class="form-control{invalid}" id="{name}" name="{name}" value="{value}" step="{step}">{errors}</div>"#,
        name = name,
        label = escape(label),
        invalid = invalid_class(errors),
        value = escape(value),
        step = step,
        errors = field_errors(errors),
    )
}

pub fn textarea(name: &str, label: &str, value: &str, max_len: usize, errors: &[String]) -> String {
    format!(
        r#"<div class="form-group"><label for="{name}">{label}</label><textarea class="form-control{invalid}" id="{name}" name="{name}" maxlength="{max_len}" rows="3">{value}</textarea>{errors}</div>"#,
        name = name,
        label = escape(label),
        invalid = invalid_class(errors),
        max_len = max_len,
        value = escape(value),
        errors = field_errors(errors),
    )
}

pub fn checkbox(name: &str, label: &str, checked: bool, errors: &[String]) -> String {
    format!(
        r#"<div class="form-group form-check"><input type="checkbox" class="form-check-input{invalid}" id="{name}" name="{name}" value="y"{checked}><label class="form-check-label" for="{name}">{label}</label>{errors}</div>"#,
        name = name,
        invalid = invalid_class(errors),
        checked = if checked { " checked" } else { "" },
        label = escape(label),
        errors = field_errors(errors),
    )
}

pub fn select(
    name: &str,
    label: &str,
    choices: &[Choice],
    selected: Option<i64>,
    errors: &[String],
) -> String {
    let options: String = choices
        .iter()
        .map(|(value, caption)| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                value,
                if selected == Some(*value) { " selected" } else { "" },
                escape(caption)
            )
        })
        .collect();
    format!(
        r#"<div class="form-group"><label for="{name}">{label}</label><select class="form-control{invalid}" id="{name}" name="{name}">{options}</select>{errors}</div>"#,
        name = name,
        label = escape(label),
        invalid = invalid_class(errors),
        options = options,
        errors = field_errors(errors),
    )
}

/// Multi-select rendered as a checkbox list; checked boxes submit repeated keys
pub fn checkbox_list(
    name: &str,
    label: &str,
    choices: &[Choice],
    selected: &[i64],
    errors: &[String],
) -> String {
    let items: String = choices
        .iter()
        .enumerate()
        .map(|(i, (value, caption))| {
            format!(
                r#"<li class="form-check"><input type="checkbox" class="form-check-input" id="{name}-{i}" name="{name}" value="{value}"{checked}><label class="form-check-label" for="{name}-{i}">{caption}</label></li>"#,
                name = name,
                i = i,
                value = value,
                checked = if selected.contains(value) { " checked" } else { "" },
                caption = escape(caption),
            )
        })
        .collect();
    format!(
        r#"<div class="form-group"><label>{label}</label><ul class="list-unstyled" id="{name}">{items}</ul>{errors}</div>"#,
        label = escape(label),
        name = name,
        items = items,
        errors = field_errors(errors),
    )
}

/// Wrap rendered fields into the modal fragment the host expects
pub fn modal_form(title: &str, fields: &[String]) -> String {
    format!(
        r#"<div class="modal-header"><h5 class="modal-title">{title}</h5></div><form id="{form_id}" method="post" novalidate><div class="modal-body">{fields}</div><div class="modal-footer"><button type="submit" id="{submit_id}" class="btn btn-primary">Save</button></div></form>"#,
        title = escape(title),
        form_id = FORM_ID,
        fields = fields.concat(),
        submit_id = SUBMIT_ID,
    )
}
