//! Слайдер с автопрокруткой
//!
//! Состояние: индекс текущего слайда и признак паузы. Таймер автопрокрутки
//! принадлежит карусели и всегда отменяется перед повторным запуском, поэтому
//! два интервала одновременно работать не могут.

mod timer;
mod widget;

pub use timer::BrowserInterval;
pub use widget::Slider;

/// Периодический таймер, которым владеет карусель
pub trait IntervalTimer {
    /// Запустить таймер с периодом `period_ms`
    fn start(&mut self, period_ms: u32);

    /// Остановить таймер; безопасно вызывать повторно и до первого запуска
    fn cancel(&mut self);

    fn is_running(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub image: String,
    pub caption: String,
}

impl Slide {
    pub fn new(image: &str, caption: &str) -> Self {
        Self {
            image: image.to_string(),
            caption: caption.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    Next,
    Prev,
    GoTo(i64),
    /// Курсор над слайдером
    Pause,
    /// Курсор ушёл со слайдера
    Resume,
    /// Сработал таймер автопрокрутки
    Tick,
}

pub struct Carousel<T: IntervalTimer> {
    slides: Vec<Slide>,
    current: usize,
    paused: bool,
    interval_ms: u32,
    timer: T,
}

impl<T: IntervalTimer> Carousel<T> {
    /// Создать карусель; автопрокрутка начинается после `start()`
    pub fn new(slides: Vec<Slide>, interval_ms: u32, timer: T) -> Self {
        Self {
            slides,
            current: 0,
            paused: false,
            interval_ms,
            timer,
        }
    }

    pub fn start(&mut self) {
        self.restart_timer();
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    pub fn dispatch(&mut self, action: CarouselAction) {
        match action {
            CarouselAction::Next => self.next(),
            CarouselAction::Prev => self.prev(),
            CarouselAction::GoTo(index) => self.go_to(index),
            CarouselAction::Pause => self.pause(),
            CarouselAction::Resume => self.resume(),
            CarouselAction::Tick => self.tick(),
        }
    }

    pub fn next(&mut self) {
        self.go_to(self.current as i64 + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.current as i64 - 1);
    }

    /// Перейти к слайду; любой индекс приводится по модулю длины.
    ///
    /// Ручная навигация перезапускает таймер, так что до следующей
    /// автопрокрутки всегда проходит полный интервал.
    pub fn go_to(&mut self, index: i64) {
        if self.slides.is_empty() {
            return;
        }
        self.current = wrap_index(index, self.slides.len());
        self.restart_timer();
    }

    pub fn pause(&mut self) {
        self.paused = true;
        self.timer.cancel();
    }

    pub fn resume(&mut self) {
        self.paused = false;
        self.restart_timer();
    }

    /// Шаг автопрокрутки. Интервал продолжает идти, перезапуск не нужен.
    pub fn tick(&mut self) {
        if self.slides.is_empty() || self.paused {
            return;
        }
        self.current = wrap_index(self.current as i64 + 1, self.slides.len());
    }

    fn restart_timer(&mut self) {
        self.timer.cancel();
        if self.slides.is_empty() || self.paused {
            return;
        }
        self.timer.start(self.interval_ms);
    }
}

/// `((index mod len) + len) mod len`, всегда в `[0, len)`; `len` > 0
fn wrap_index(index: i64, len: usize) -> usize {
    index.rem_euclid(len as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Таймер с ручным временем
    #[derive(Debug, Default)]
    struct ManualTimer {
        period: Option<u32>,
        elapsed: u32,
        starts: u32,
    }

    impl ManualTimer {
        /// Продвинуть время, вернуть число срабатываний
        fn advance(&mut self, ms: u32) -> u32 {
            let Some(period) = self.period else {
                return 0;
            };
            self.elapsed += ms;
            let fired = self.elapsed / period;
            self.elapsed %= period;
            fired
        }
    }

    impl IntervalTimer for ManualTimer {
        fn start(&mut self, period_ms: u32) {
            assert!(self.period.is_none(), "timer started twice without cancel");
            self.period = Some(period_ms);
            self.elapsed = 0;
            self.starts += 1;
        }

        fn cancel(&mut self) {
            self.period = None;
            self.elapsed = 0;
        }

        fn is_running(&self) -> bool {
            self.period.is_some()
        }
    }

    fn slides(count: usize) -> Vec<Slide> {
        (1..=count)
            .map(|i| Slide::new(&format!("/works/{}.jpeg", i), &format!("Фото {}", i)))
            .collect()
    }

    fn started(count: usize) -> Carousel<ManualTimer> {
        let mut carousel = Carousel::new(slides(count), 4500, ManualTimer::default());
        carousel.start();
        carousel
    }

    fn wait(carousel: &mut Carousel<ManualTimer>, ms: u32) {
        let fired = carousel.timer_mut().advance(ms);
        for _ in 0..fired {
            carousel.dispatch(CarouselAction::Tick);
        }
    }

    #[test]
    fn test_wraps_in_both_directions() {
        let mut carousel = started(7);
        carousel.prev();
        assert_eq!(carousel.current(), 6);
        carousel.next();
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_go_to_uses_true_modulo() {
        let mut carousel = started(7);
        for i in [-15i64, -7, -1, 0, 3, 6, 7, 8, 700] {
            carousel.go_to(i);
            assert_eq!(carousel.current() as i64, ((i % 7) + 7) % 7);
        }
    }

    #[test]
    fn test_autoplay_advances_once_per_interval() {
        let mut carousel = started(7);
        wait(&mut carousel, 4499);
        assert_eq!(carousel.current(), 0);
        wait(&mut carousel, 1);
        assert_eq!(carousel.current(), 1);
        wait(&mut carousel, 4500 * 6);
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_manual_navigation_resets_interval() {
        let mut carousel = started(7);
        wait(&mut carousel, 4000);
        carousel.next();
        assert_eq!(carousel.current(), 1);

        wait(&mut carousel, 4000);
        assert_eq!(carousel.current(), 1);
        wait(&mut carousel, 500);
        assert_eq!(carousel.current(), 2);
        assert_eq!(carousel.timer().starts, 2);
    }

    #[test]
    fn test_pause_and_resume() {
        let mut carousel = started(7);
        carousel.dispatch(CarouselAction::Pause);
        assert!(carousel.is_paused());
        assert!(!carousel.timer().is_running());

        wait(&mut carousel, 20_000);
        assert_eq!(carousel.current(), 0);

        carousel.dispatch(CarouselAction::Pause);
        carousel.dispatch(CarouselAction::Resume);
        assert!(carousel.timer().is_running());
        wait(&mut carousel, 4500);
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn test_navigation_while_paused_keeps_timer_stopped() {
        let mut carousel = started(7);
        carousel.pause();
        carousel.dispatch(CarouselAction::GoTo(4));
        assert_eq!(carousel.current(), 4);
        assert!(!carousel.timer().is_running());
    }

    #[test]
    fn test_empty_deck_never_schedules() {
        let mut carousel = started(0);
        carousel.next();
        carousel.prev();
        carousel.go_to(3);
        carousel.resume();
        carousel.tick();
        assert_eq!(carousel.current(), 0);
        assert!(carousel.slides().get(carousel.current()).is_none());
        assert_eq!(carousel.timer().starts, 0);
        assert!(!carousel.timer().is_running());
    }

    #[test]
    fn test_single_slide_still_restarts_timer() {
        let mut carousel = started(1);
        wait(&mut carousel, 3000);
        carousel.next();
        assert_eq!(carousel.current(), 0);
        assert_eq!(carousel.timer().starts, 2);
        wait(&mut carousel, 3000);
        carousel.prev();
        assert_eq!(carousel.current(), 0);
        assert_eq!(carousel.timer().starts, 3);
    }
}
