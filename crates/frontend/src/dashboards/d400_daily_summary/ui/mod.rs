mod model;

use contracts::dashboards::d400_daily_summary::dto::{DailySummaryResponse, FoodEntryRow};
use contracts::domain::a004_food_entry::aggregate::FoodEntry;
use contracts::domain::a005_weight_entry::aggregate::WeightEntry;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::date_utils::format_time;
use crate::shared::modal_form::ModalButton;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let summary = RwSignal::new(Option::<DailySummaryResponse>::None);
    let error = RwSignal::new(Option::<String>::None);
    let busy = RwSignal::new(false);

    let load = move || {
        spawn_local(async move {
            match model::fetch_summary().await {
                Ok(data) => {
                    summary.set(Some(data));
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };
    load();

    let toggle = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        spawn_local(async move {
            match model::toggle_vitamin_c().await {
                Ok(reply) => summary.update(|s| {
                    if let Some(s) = s {
                        s.vitamin_c = reply.vitamin_c;
                    }
                }),
                Err(e) => error.set(Some(e)),
            }
            busy.set(false);
        });
    };

    let delete = move |row: FoodEntryRow| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Delete {} at {}?", row.food_label, format_time(row.utc_date)))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match model::delete_food_entry(row.id).await {
                Ok(()) => load(),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let vitamin_c_card = move || {
        let state = summary.with(|s| s.as_ref().map(|s| s.vitamin_c.clone()));
        let Some(state) = state else {
            return view! { <span class="text-muted">"…"</span> }.into_any();
        };
        match state {
            Some(v) => {
                let by = v.user_name.unwrap_or_default();
                view! {
                    <button class="btn btn-success" on:click=toggle disabled=move || busy.get()>
                        "🌻 Vitamin C given"
                    </button>
                    <small class="ml-2 text-muted">{format!("{} at {}", by, format_time(v.utc_date))}</small>
                }
                .into_any()
            }
            None => view! {
                <button class="btn btn-outline-warning" on:click=toggle disabled=move || busy.get()>
                    "🌻 Give vitamin C"
                </button>
            }
            .into_any(),
        }
    };

    view! {
        <div class="dashboard">
            <Show when=move || error.get().is_some()>
                <div class="alert alert-danger">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <div class="card mb-3">
                <div class="card-body">{vitamin_c_card}</div>
            </div>

            <div class="mb-3">
                <ModalButton url=FoodEntry::add_url() class="btn-primary">
                    "🍽️ Add food"
                </ModalButton>
                " "
                <ModalButton url=WeightEntry::add_url() class="btn-primary">
                    "⚖️ Add weight"
                </ModalButton>
            </div>

            <h5>"Today's food"</h5>
            <table class="table table-sm">
                <thead>
                    <tr>
                        <th>"Time"</th>
                        <th>"Food"</th>
                        <th>"Guinea pigs"</th>
                        <th>"By"</th>
                        <th>"Notes"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || summary.with(|s| s.as_ref().map(|s| s.food_entries.clone()).unwrap_or_default())
                        key=|row| (row.id, row.utc_date)
                        children=move |row: FoodEntryRow| {
                            let edit_url = row.edit_url.clone();
                            let row_for_delete = row.clone();
                            view! {
                                <tr>
                                    <td>{format_time(row.utc_date)}</td>
                                    <td>{row.food_label.clone()}</td>
                                    <td>{row.guinea_pigs.join(", ")}</td>
                                    <td>{row.user_name.clone().unwrap_or_default()}</td>
                                    <td>{row.notes.clone().unwrap_or_default()}</td>
                                    <td class="text-right">
                                        <ModalButton url=edit_url>"Edit"</ModalButton>
                                        " "
                                        <button
                                            class="btn btn-outline-danger btn-sm"
                                            on:click=move |_| delete(row_for_delete.clone())
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <Show when=move || summary.with(|s| s.as_ref().is_some_and(|s| s.food_entries.is_empty()))>
                <p class="text-muted">"Nothing fed yet today."</p>
            </Show>
        </div>
    }
}
