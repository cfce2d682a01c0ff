use contracts::dashboards::d401_statistics::dto::StatisticsResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::get_json;
use crate::shared::date_utils::format_weight;

#[component]
pub fn StatisticsPage() -> impl IntoView {
    let stats = RwSignal::new(Option::<StatisticsResponse>::None);
    let error = RwSignal::new(Option::<String>::None);

    spawn_local(async move {
        match get_json::<StatisticsResponse>("/api/statistics").await {
            Ok(data) => stats.set(Some(data)),
            Err(e) => error.set(Some(e)),
        }
    });

    let food_rows = move || {
        stats.with(|s| {
            s.as_ref()
                .map(|s| {
                    s.food
                        .rows()
                        .into_iter()
                        .map(|(caption, label)| (caption, label.unwrap_or("-").to_string()))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    };

    let weight_rows = move || {
        stats.with(|s| {
            s.as_ref()
                .map(|s| s.weights.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="statistics">
            <Show when=move || error.get().is_some()>
                <div class="alert alert-danger">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <h5>"Food"</h5>
            <table class="table table-sm">
                <tbody>
                    {move || {
                        food_rows()
                            .into_iter()
                            .map(|(caption, label)| view! {
                                <tr>
                                    <th>{caption}</th>
                                    <td>{label}</td>
                                </tr>
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

            <h5>"Weights"</h5>
            <table class="table table-sm">
                <tbody>
                    {move || {
                        weight_rows()
                            .into_iter()
                            .map(|w| view! {
                                <tr>
                                    <th>{w.guinea_pig}</th>
                                    <td>{w.value.map(format_weight).unwrap_or_else(|| "-".to_string())}</td>
                                </tr>
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
