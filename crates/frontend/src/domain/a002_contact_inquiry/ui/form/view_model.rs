//! ViewModel формы "Расскажите о задаче"
//!
//! Заявка не уходит на сервер: после проверки она пишется в лог, а
//! пользователь видит подтверждение.

use contracts::domain::a002_contact_inquiry::ContactInquiry;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ContactFormVm {
    pub name: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub message: RwSignal<String>,

    pub error: RwSignal<Option<String>>,
    /// Текст подтверждения последней принятой заявки
    pub success: RwSignal<Option<String>>,
}

impl ContactFormVm {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            message: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            success: RwSignal::new(None),
        }
    }

    fn to_inquiry(&self) -> ContactInquiry {
        ContactInquiry::new(
            &self.name.get_untracked(),
            &self.phone.get_untracked(),
            &self.message.get_untracked(),
        )
    }

    pub fn submit(&self) {
        let inquiry = self.to_inquiry();
        if let Err(msg) = inquiry.validate() {
            self.success.set(None);
            self.error.set(Some(msg));
            return;
        }

        match serde_json::to_string(&inquiry) {
            Ok(json) => log::info!("Contact inquiry: {}", json),
            Err(e) => log::warn!("Contact inquiry not serialized: {}", e),
        }

        self.error.set(None);
        self.success.set(Some(inquiry.acknowledgment()));
        self.clear_fields();
    }

    pub fn clear_fields(&self) {
        self.name.set(String::new());
        self.phone.set(String::new());
        self.message.set(String::new());
    }
}

impl Default for ContactFormVm {
    fn default() -> Self {
        Self::new()
    }
}
