use super::card::DoorCard;
use super::quick_view::QuickView;
use super::view_model::CatalogVm;
use crate::shared::format::doors_count_label;
use crate::shared::icons::icon;
use contracts::enums::{CategoryFilter, SortKey};
use leptos::prelude::*;
use thaw::*;

/// Секция "Полный каталог дверей"
#[component]
pub fn CatalogSection() -> impl IntoView {
    let vm = CatalogVm::new();
    vm.bind_inputs();

    let visible = vm.visible();
    let on_preview = Callback::new(move |door_id: u32| vm.open_preview(door_id));

    view! {
        <section id="catalog" class="section catalog-section reveal">
            <div class="container">
                <div class="section-header">
                    <div>
                        <p class="eyebrow">"Каталог"</p>
                        <h2>"Полный каталог дверей"</h2>
                        <p class="lead">{move || doors_count_label(visible.with(|v| v.len()))}</p>
                    </div>
                    <div class="catalog-sort">
                        <Select value=vm.sort_value>
                            {SortKey::all()
                                .into_iter()
                                .map(|key| view! { <option value=key.code()>{key.display_name()}</option> })
                                .collect_view()}
                        </Select>
                    </div>
                </div>

                <div class="catalog-categories">
                    {CategoryFilter::all()
                        .into_iter()
                        .map(|filter| {
                            view! {
                                <button
                                    class="category-btn"
                                    class:active=move || vm.is_category_active(filter)
                                    on:click=move |_| vm.select_category(filter)
                                >
                                    <span class="category-icon">{filter.icon()}</span>
                                    {filter.display_name()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="catalog-price-filter">
                    <Input value=vm.price_min placeholder="Цена от, ₽" input_type=InputType::Number />
                    <Input value=vm.price_max placeholder="до 300 000 ₽" input_type=InputType::Number />
                    <Show when=move || vm.is_filtered()>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.reset_filters()>
                            "Сбросить фильтры"
                        </Button>
                    </Show>
                </div>

                <div class="catalog-grid">
                    <For each=move || visible.get() key=|door| door.id let:door>
                        <DoorCard door=door on_preview=on_preview />
                    </For>
                </div>

                <Show when=move || visible.with(|v| v.is_empty())>
                    <div class="catalog-empty">
                        <div class="empty-icon">{icon("search")}</div>
                        <h3>"Ничего не найдено"</h3>
                        <p>"Попробуйте изменить фильтры или выберите другую категорию"</p>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.reset_filters()>
                            "Сбросить фильтры"
                        </Button>
                    </div>
                </Show>
            </div>
        </section>

        <QuickView vm=vm />
    }
}
