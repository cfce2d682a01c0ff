use contracts::domain::a003_food_type::aggregate::FoodType;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::get_json;
use crate::shared::modal_form::ModalButton;

/// Flags shown next to a food type label
fn badges(food_type: &FoodType) -> Vec<&'static str> {
    let mut badges = Vec::new();
    if food_type.is_hidden {
        badges.push("hidden");
    }
    if !food_type.in_statistics {
        badges.push("no statistics");
    }
    badges
}

#[component]
#[allow(non_snake_case)]
pub fn FoodTypeList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<FoodType>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        match get_json::<Vec<FoodType>>(&format!("/api/{}", FoodType::collection_name())).await {
            Ok(v) => set_items.set(v),
            Err(e) => set_error.set(Some(e)),
        }
    });

    view! {
        <div class="card mb-3">
            <div class="card-header d-flex justify-content-between align-items-center">
                <span>"🥬 " {FoodType::list_name()}</span>
                <ModalButton url=FoodType::add_url()>"Add"</ModalButton>
            </div>
            <Show when=move || error.get().is_some()>
                <div class="alert alert-danger m-2">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <ul class="list-group list-group-flush">
                <For
                    each=move || items.get()
                    key=|food_type| food_type.id
                    children=move |food_type: FoodType| {
                        let flags = badges(&food_type)
                            .into_iter()
                            .map(|b| view! { <span class="badge badge-secondary ml-1">{b}</span> })
                            .collect_view();
                        view! {
                            <li class="list-group-item">
                                <div class="d-flex justify-content-between align-items-center">
                                    <span>{food_type.label.clone()} {flags}</span>
                                    <ModalButton url=FoodType::edit_url(food_type.id)>"Edit"</ModalButton>
                                </div>
                                {food_type.recommendations.clone().map(|r| view! {
                                    <small class="text-muted">{r}</small>
                                })}
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_food_type::aggregate::FoodTypeId;

    #[test]
    fn test_badges() {
        let mut food_type = FoodType {
            id: FoodTypeId(1),
            label: "Kale".into(),
            recommendations: None,
            in_statistics: true,
            is_hidden: false,
        };
        assert!(badges(&food_type).is_empty());
        food_type.is_hidden = true;
        food_type.in_statistics = false;
        assert_eq!(badges(&food_type), vec!["hidden", "no statistics"]);
    }
}
