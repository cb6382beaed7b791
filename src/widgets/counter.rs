use std::sync::atomic::{AtomicUsize, Ordering};

static GLOBAL: WidgetCounter = WidgetCounter::new();

/// Hands out widget ids `w0`, `w1`, ... in order.
///
/// Widgets built with [`crate::AlertFlash::new`] draw from a process-wide
/// counter which starts at zero when the process starts. Code that needs
/// stable ids (tests, or pages rendered concurrently) should use its own
/// counter.
#[derive(Debug, Default)]
pub struct WidgetCounter {
    next: AtomicUsize,
}

impl WidgetCounter {
    pub const fn new() -> Self {
        Self {
            next: AtomicUsize::new(0),
        }
    }

    pub fn global() -> &'static WidgetCounter {
        &GLOBAL
    }

    pub fn next_id(&self) -> String {
        format!("w{}", self.next.fetch_add(1, Ordering::Relaxed))
    }

    pub fn reset(&self) {
        self.next.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_increment_and_reset() {
        let counter = WidgetCounter::new();
        assert_eq!(counter.next_id(), "w0");
        assert_eq!(counter.next_id(), "w1");
        counter.reset();
        assert_eq!(counter.next_id(), "w0");
    }
}
