use crate::shared::config::use_site_config;
use crate::shared::format::format_price;
use crate::shared::icons::icon;
use contracts::domain::a001_door::Door;
use leptos::ev;
use leptos::prelude::*;

/// Карточка двери в сетке каталога
#[component]
pub fn DoorCard(door: Door, on_preview: Callback<u32>) -> impl IntoView {
    let features_limit = use_site_config().catalog.features_on_card;
    let features = door.headline_features(features_limit).to_vec();
    let price = format_price(door.price);
    let Door {
        id,
        name,
        image,
        acoustic,
        size,
        material,
        is_new,
        is_popular,
        ..
    } = door;
    let title = name.clone();

    // Кнопка лежит поверх картинки: клик не должен доходить до карточки
    let on_quick_view = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        ev.prevent_default();
        on_preview.run(id);
    };

    view! {
        <article class="catalog-card">
            <div class="catalog-badges">
                {is_new.then(|| view! { <span class="badge badge-new">"Новинка"</span> })}
                {is_popular.then(|| view! { <span class="badge badge-popular">"Хит"</span> })}
            </div>

            <div class="catalog-image-container">
                <img src=image alt=name class="catalog-image" loading="lazy" />
                <div class="catalog-overlay">
                    <button class="catalog-quick-view" on:click=on_quick_view>
                        {icon("eye")}
                        " Быстрый просмотр"
                    </button>
                </div>
            </div>

            <div class="catalog-info">
                <h3 class="catalog-title">{title}</h3>

                <div class="catalog-specs">
                    <div class="spec-item">
                        <span class="spec-label">"Акустика"</span>
                        <span class="spec-value">{acoustic}</span>
                    </div>
                    <div class="spec-item">
                        <span class="spec-label">"Размер"</span>
                        <span class="spec-value">{size}</span>
                    </div>
                </div>

                <p class="catalog-material">{material}</p>

                <ul class="catalog-features">
                    {features
                        .into_iter()
                        .map(|feature| {
                            view! {
                                <li>
                                    <span class="feature-dot">"•"</span>
                                    {feature}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <div class="catalog-footer">
                    <div class="catalog-price">
                        <span class="price-label">"от"</span>
                        <span class="price-value">{price}</span>
                    </div>
                    <button class="catalog-btn-primary" on:click=move |_| on_preview.run(id)>
                        "Подробнее"
                    </button>
                </div>
            </div>
        </article>
    }
}
