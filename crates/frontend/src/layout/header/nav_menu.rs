use crate::shared::scroll_lock::ScrollLock;

/// Мобильное меню (бургер).
///
/// Открытие захватывает блокировку прокрутки, любое закрытие её снимает.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
    scroll_lock: ScrollLock,
}

impl NavMenu {
    pub fn open(&mut self) {
        self.open = true;
        self.scroll_lock.acquire();
    }

    /// Возвращает `true`, если меню было открыто
    pub fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        self.scroll_lock.release();
        was_open
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_lock.is_held()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_locks_scroll() {
        let mut menu = NavMenu::default();
        assert!(!menu.is_scroll_locked());
        menu.open();
        assert!(menu.is_open());
        assert!(menu.is_scroll_locked());
    }

    #[test]
    fn test_every_close_path_releases() {
        let mut menu = NavMenu::default();
        menu.toggle();
        assert!(menu.is_scroll_locked());

        // overlay click, Escape and anchor navigation in the same event
        assert!(menu.close());
        assert!(!menu.close());
        assert!(!menu.close());
        assert!(!menu.is_open());
        assert!(!menu.is_scroll_locked());
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut menu = NavMenu::default();
        menu.toggle();
        menu.toggle();
        assert_eq!(menu, NavMenu::default());
    }
}
