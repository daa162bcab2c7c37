use super::view_model::CatalogVm;
use crate::shared::anchor_scroll::AnchorLink;
use crate::shared::format::format_price;
use crate::shared::modal::Modal;
use leptos::prelude::*;

/// Окно быстрого просмотра выбранной двери
#[component]
pub fn QuickView(vm: CatalogVm) -> impl IntoView {
    let preview = vm.preview();
    let on_close = Callback::new(move |_: ()| vm.close_preview());

    move || {
        preview.get().map(|door| {
            let alt = door.name.clone();
            let price = format_price(door.price);
            view! {
                <Modal on_close=on_close>
                    <img src=door.image alt=alt />
                    <div class="modal-body">
                        <h3>{door.name}</h3>
                        <p class="modal-price">{price}</p>
                        <div class="modal-info">
                            <span>"Акустика: " {door.acoustic}</span>
                            <span>"Размер: " {door.size}</span>
                            <span>"Материал: " {door.material}</span>
                        </div>
                        <AnchorLink href="#contacts" class="modal-btn" on_navigate=on_close>
                            "Оставить заявку"
                        </AnchorLink>
                    </div>
                </Modal>
            }
        })
    }
}
