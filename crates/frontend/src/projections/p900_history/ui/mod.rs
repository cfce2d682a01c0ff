use chrono::NaiveDate;
use contracts::projections::p900_history::dto::{HistoryQuery, HistoryResponse, HistoryRow};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::get_json;
use crate::shared::date_utils::format_datetime;

/// Query string for the history endpoint; blank or malformed dates are left
/// to the server defaults
pub fn history_path(start: &str, end: &str) -> String {
    let query = HistoryQuery {
        start: NaiveDate::parse_from_str(start.trim(), "%Y-%m-%d").ok(),
        end: NaiveDate::parse_from_str(end.trim(), "%Y-%m-%d").ok(),
    };
    match serde_qs::to_string(&query) {
        Ok(qs) if !qs.is_empty() => format!("/api/history?{}", qs),
        _ => "/api/history".to_string(),
    }
}

#[component]
pub fn HistoryPage() -> impl IntoView {
    let start = RwSignal::new(String::new());
    let end = RwSignal::new(String::new());
    let entries = RwSignal::new(Vec::<HistoryRow>::new());
    let error = RwSignal::new(Option::<String>::None);

    let load = move || {
        let path = history_path(&start.get_untracked(), &end.get_untracked());
        spawn_local(async move {
            match get_json::<HistoryResponse>(&path).await {
                Ok(data) => {
                    if let Some(s) = data.start {
                        start.set(s.to_string());
                    }
                    if let Some(e) = data.end {
                        end.set(e.to_string());
                    }
                    entries.set(data.entries);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };
    load();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        load();
    };

    view! {
        <div class="history">
            <form class="form-inline mb-3" on:submit=on_submit>
                <label class="mr-2" for="start">"From"</label>
                <input
                    type="date"
                    id="start"
                    class="form-control mr-3"
                    prop:value=move || start.get()
                    on:input=move |ev| start.set(event_target_value(&ev))
                />
                <label class="mr-2" for="end">"to"</label>
                <input
                    type="date"
                    id="end"
                    class="form-control mr-3"
                    prop:value=move || end.get()
                    on:input=move |ev| end.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary">"Show"</button>
            </form>

            <Show when=move || error.get().is_some()>
                <div class="alert alert-danger">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <table class="table table-sm">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th></th>
                        <th>"Detail"</th>
                        <th>"Guinea pigs"</th>
                        <th>"By"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        entries
                            .get()
                            .into_iter()
                            .map(|row| view! {
                                <tr>
                                    <td>{format_datetime(row.utc_date)}</td>
                                    <td>{row.kind.icon()}</td>
                                    <td>{row.detail}</td>
                                    <td>{row.guinea_pigs}</td>
                                    <td>{row.user_name}</td>
                                </tr>
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_path() {
        assert_eq!(history_path("", ""), "/api/history");
        assert_eq!(
            history_path("2024-05-06", "2024-05-08"),
            "/api/history?start=2024-05-06&end=2024-05-08"
        );
        assert_eq!(history_path("not a date", "2024-05-08"), "/api/history?end=2024-05-08");
    }
}
