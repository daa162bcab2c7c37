//! Просмотр фотографии работ во весь экран

mod widget;

pub use widget::Lightbox;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open {
        src: String,
        caption: String,
    },
}

impl LightboxState {
    /// Открыть фотографию; пустая или отсутствующая подпись заменяется `fallback`
    pub fn open(&mut self, src: &str, caption: Option<&str>, fallback: &str) {
        let caption = caption
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(fallback);
        *self = LightboxState::Open {
            src: src.to_string(),
            caption: caption.to_string(),
        };
    }

    /// Закрыть; для уже закрытого ничего не делает и возвращает `false`
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = LightboxState::Closed;
        was_open
    }

    pub fn is_open(&self) -> bool {
        matches!(self, LightboxState::Open { .. })
    }

    pub fn src(&self) -> &str {
        match self {
            LightboxState::Open { src, .. } => src,
            LightboxState::Closed => "",
        }
    }

    pub fn caption(&self) -> &str {
        match self {
            LightboxState::Open { caption, .. } => caption,
            LightboxState::Closed => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "Работа A-1 StroimDom";

    #[test]
    fn test_open_with_caption() {
        let mut state = LightboxState::default();
        state.open("/works/IMG_5857.jpeg", Some("Точное совпадение оттенков"), FALLBACK);
        assert!(state.is_open());
        assert_eq!(state.src(), "/works/IMG_5857.jpeg");
        assert_eq!(state.caption(), "Точное совпадение оттенков");
    }

    #[test]
    fn test_missing_caption_uses_fallback() {
        let mut state = LightboxState::default();
        state.open("/works/IMG_5856.jpeg", None, FALLBACK);
        assert_eq!(state.caption(), FALLBACK);

        state.open("/works/IMG_5856.jpeg", Some("   "), FALLBACK);
        assert_eq!(state.caption(), FALLBACK);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut state = LightboxState::default();
        assert!(!state.close());

        state.open("/works/IMG_5856.jpeg", None, FALLBACK);
        assert!(state.close());
        assert!(!state.close());
        assert_eq!(state, LightboxState::Closed);
    }
}
