/// Блокировка прокрутки документа под модальным оверлеем.
///
/// Единственный общий ресурс страницы. Каждый путь закрытия обязан вызвать
/// `release`, поэтому освобождение можно вызывать сколько угодно раз.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollLock {
    held: bool,
}

impl ScrollLock {
    /// Возвращает `true`, если состояние изменилось
    pub fn acquire(&mut self) -> bool {
        let changed = !self.held;
        self.held = true;
        changed
    }

    /// Возвращает `true`, если блокировка действительно была снята
    pub fn release(&mut self) -> bool {
        let changed = self.held;
        self.held = false;
        changed
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_is_idempotent() {
        let mut lock = ScrollLock::default();
        assert!(!lock.release());

        assert!(lock.acquire());
        assert!(!lock.acquire());
        assert!(lock.is_held());

        assert!(lock.release());
        assert!(!lock.release());
        assert!(!lock.is_held());
    }
}
