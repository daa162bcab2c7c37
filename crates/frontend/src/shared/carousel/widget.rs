use super::{BrowserInterval, Carousel, CarouselAction, Slide};
use crate::shared::config::use_site_config;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Слайдер "Свежие установки".
///
/// Активны ровно один слайд и одна точка; точки строятся по числу слайдов.
#[component]
pub fn Slider(
    slides: Vec<Slide>,
    /// Клик по фотографии слайда (индекс слайда)
    #[prop(optional)]
    on_image_click: Option<Callback<usize>>,
) -> impl IntoView {
    let interval_ms = use_site_config().slider.autoplay_interval_ms;
    let current = RwSignal::new(0usize);

    let carousel = StoredValue::new_local(Carousel::new(slides, interval_ms, BrowserInterval::new()));
    let (count, deck) = carousel.with_value(|c| (c.len(), c.slides().to_vec()));

    let sync = move || {
        if let Some(index) = carousel.try_with_value(|c| c.current()) {
            current.set(index);
        }
    };
    let dispatch = move |action: CarouselAction| {
        carousel.update_value(|c| c.dispatch(action));
        sync();
    };

    carousel.update_value(|c| {
        c.timer_mut().bind(move || dispatch(CarouselAction::Tick));
        c.start();
    });
    if carousel.with_value(|c| c.is_empty()) {
        log::debug!("Slider: no slides, autoplay disabled");
    } else {
        log::debug!("Slider: {} slides, autoplay every {} ms", count, interval_ms);
    }

    view! {
        <div
            class="works-slider"
            on:mouseenter=move |_| dispatch(CarouselAction::Pause)
            on:mouseleave=move |_| dispatch(CarouselAction::Resume)
        >
            <button
                class="slider-btn prev"
                aria-label="Назад"
                on:click=move |_| dispatch(CarouselAction::Prev)
            >
                {icon("arrow-left")}
            </button>
            <div class="slides">
                {deck
                    .into_iter()
                    .enumerate()
                    .map(|(idx, slide)| {
                        let alt = format!("Установка двери — фото {}", idx + 1);
                        view! {
                            <figure class="slide" class:active=move || current.get() == idx>
                                <img
                                    src=slide.image
                                    alt=alt
                                    loading="lazy"
                                    on:click=move |_| {
                                        if let Some(cb) = on_image_click {
                                            cb.run(idx);
                                        }
                                    }
                                />
                                <figcaption>{slide.caption}</figcaption>
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>
            <button
                class="slider-btn next"
                aria-label="Вперёд"
                on:click=move |_| dispatch(CarouselAction::Next)
            >
                {icon("arrow-right")}
            </button>
            <div class="slider-dots">
                {(0..count)
                    .map(|idx| {
                        let label = format!("Слайд {}", idx + 1);
                        view! {
                            <button
                                class:active=move || current.get() == idx
                                aria-label=label
                                on:click=move |_| dispatch(CarouselAction::GoTo(idx as i64))
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
