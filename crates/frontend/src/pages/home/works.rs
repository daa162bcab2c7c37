use super::content::{work_slides, WORK_PHOTOS};
use crate::layout::global_context::SiteContext;
use crate::shared::anchor_scroll::AnchorLink;
use crate::shared::carousel::Slider;
use leptos::prelude::*;

/// "Свежие установки": слайдер и сетка фотографий, обе открывают просмотр
#[component]
pub fn WorksSection() -> impl IntoView {
    let ctx = use_context::<SiteContext>().expect("SiteContext context not found");

    let on_slide_click = Callback::new(move |idx: usize| {
        if let Some(&(src, caption)) = WORK_PHOTOS.get(idx) {
            ctx.open_lightbox(src, Some(caption));
        }
    });

    view! {
        <section id="works" class="section reveal">
            <div class="container section-header">
                <div>
                    <p class="eyebrow">"Работы"</p>
                    <h2>"Свежие установки"</h2>
                    <p class="lead">"Живые фото с объектов: геометрия, акустика, чистый монтаж."</p>
                </div>
                <AnchorLink href="#contacts" class="link">
                    "Заказать похожее →"
                </AnchorLink>
            </div>

            <Slider slides=work_slides() on_image_click=on_slide_click />

            // У карточек сетки нет подписи: в просмотре будет подпись по умолчанию
            <div class="works-grid">
                {WORK_PHOTOS
                    .iter()
                    .enumerate()
                    .map(|(idx, &(src, _))| {
                        let alt = format!("Установка двери — фото {}", idx + 1);
                        view! {
                            <figure class="work-card">
                                <img
                                    src=src
                                    alt=alt
                                    loading="lazy"
                                    on:click=move |_| ctx.open_lightbox(src, None)
                                />
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
