use super::IntervalTimer;
use gloo_timers::callback::Interval;
use std::rc::Rc;

/// Браузерный `setInterval`; удаление handle отменяет интервал
#[derive(Default)]
pub struct BrowserInterval {
    on_tick: Option<Rc<dyn Fn()>>,
    handle: Option<Interval>,
}

impl BrowserInterval {
    pub fn new() -> Self {
        Self::default()
    }

    /// Задать обработчик срабатывания; действует со следующего `start`
    pub fn bind(&mut self, on_tick: impl Fn() + 'static) {
        self.on_tick = Some(Rc::new(on_tick));
    }
}

impl IntervalTimer for BrowserInterval {
    fn start(&mut self, period_ms: u32) {
        self.cancel();
        let Some(on_tick) = self.on_tick.clone() else {
            log::debug!("BrowserInterval: start without handler ignored");
            return;
        };
        self.handle = Some(Interval::new(period_ms, move || on_tick()));
    }

    fn cancel(&mut self) {
        self.handle = None;
    }

    fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}
