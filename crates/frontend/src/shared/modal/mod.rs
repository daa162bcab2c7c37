use leptos::ev;
use leptos::prelude::*;

/// Модальное окно с затемнением.
///
/// Закрывается по клику на фон, по кнопке × и по Escape; `on_close`
/// должен быть идемпотентным.
#[component]
pub fn Modal(
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // Handle Escape key
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    // Prevent click propagation from modal content
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal">
            <div class="modal-backdrop" on:click=move |_| on_close.run(())></div>
            <div class="modal-content" on:click=stop_propagation>
                <button class="modal-x" aria-label="Закрыть" on:click=move |_| on_close.run(())>
                    "×"
                </button>
                {children()}
            </div>
        </div>
    }
}
