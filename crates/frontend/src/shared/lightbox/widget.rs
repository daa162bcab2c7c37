use crate::layout::global_context::SiteContext;
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Оверлей фотографии; монтируется один раз, открыт при классе `open`
#[component]
pub fn Lightbox() -> impl IntoView {
    let ctx = use_context::<SiteContext>().expect("SiteContext context not found");
    let lightbox = ctx.lightbox;

    // Закрытие идемпотентно, поэтому Escape обрабатывается без проверки состояния
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            ctx.close_lightbox();
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="lightbox" class:open=move || lightbox.with(|l| l.is_open())>
            <div class="lightbox-backdrop" on:click=move |_| ctx.close_lightbox()></div>
            <figure class="lightbox-content">
                <img src=move || lightbox.with(|l| l.src().to_string()) alt="Просмотр работы" />
                <figcaption>{move || lightbox.with(|l| l.caption().to_string())}</figcaption>
                <button
                    class="lightbox-close"
                    aria-label="Закрыть"
                    on:click=move |_| ctx.close_lightbox()
                >
                    {icon("x")}
                </button>
            </figure>
        </div>
    }
}
