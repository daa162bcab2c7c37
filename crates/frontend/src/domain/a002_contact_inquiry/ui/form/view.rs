use super::view_model::ContactFormVm;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ContactForm() -> impl IntoView {
    let vm = ContactFormVm::new();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <label>
                "Имя"
                <Input value=vm.name placeholder="Как к вам обращаться?" />
            </label>
            <label>
                "Телефон"
                <Input value=vm.phone placeholder="+7 ___ ___-__-__" input_type=InputType::Tel />
            </label>
            <label>
                "Задача"
                <Textarea
                    value=vm.message
                    placeholder="Тип дверей, сроки, особенности объекта"
                    attr:rows=4
                />
            </label>

            <Show when=move || vm.error.get().is_some()>
                <div class="error-message">{move || vm.error.get().unwrap_or_default()}</div>
            </Show>
            <Show when=move || vm.success.get().is_some()>
                <div class="success-message">{move || vm.success.get().unwrap_or_default()}</div>
            </Show>

            <button type="submit" class="primary-btn full">
                "Отправить заявку"
            </button>
            <p class="note">"Нажимая на кнопку, вы соглашаетесь с обработкой персональных данных."</p>
        </form>
    }
}
