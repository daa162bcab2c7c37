use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Обращение из формы "Расскажите о задаче" (агрегат a002)
///
/// Заявка только подтверждается на клиенте, на сервер не отправляется.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInquiry {
    pub name: String,

    pub phone: String,

    /// Тип дверей, сроки, особенности объекта
    pub message: String,

    pub submitted_at: DateTime<Utc>,
}

impl ContactInquiry {
    pub fn new(name: &str, phone: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            message: message.trim().to_string(),
            submitted_at: Utc::now(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Укажите, как к вам обращаться".into());
        }
        if self.phone.is_empty() {
            return Err("Укажите телефон для связи".into());
        }
        Ok(())
    }

    /// Текст подтверждения; имя уже проверено `validate()`
    pub fn acknowledgment(&self) -> String {
        format!("Спасибо, {}! Мы свяжемся с вами в рабочее время.", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_are_trimmed() {
        let inquiry = ContactInquiry::new("  Елена ", " +7 968 737 75 55 ", "\nскрытые двери ");
        assert_eq!(inquiry.name, "Елена");
        assert_eq!(inquiry.phone, "+7 968 737 75 55");
        assert_eq!(inquiry.message, "скрытые двери");
    }

    #[test]
    fn test_name_and_phone_required() {
        assert!(ContactInquiry::new("   ", "+7", "").validate().is_err());
        assert!(ContactInquiry::new("Елена", "", "").validate().is_err());
        assert!(ContactInquiry::new("Елена", "+7", "").validate().is_ok());
    }

    #[test]
    fn test_acknowledgment_uses_trimmed_name() {
        let inquiry = ContactInquiry::new("  Елена ", "+7", "");
        assert!(inquiry.validate().is_ok());
        assert_eq!(
            inquiry.acknowledgment(),
            "Спасибо, Елена! Мы свяжемся с вами в рабочее время."
        );
    }
}
