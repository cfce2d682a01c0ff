use leptos::prelude::*;

use crate::domain::a002_guinea_pig::ui::list::GuineaPigList;
use crate::domain::a003_food_type::ui::list::FoodTypeList;

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <div class="row">
            <div class="col-md-6"><GuineaPigList /></div>
            <div class="col-md-6"><FoodTypeList /></div>
        </div>
    }
}
