//! Simulated queue countdown for the patient dashboard.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use crate::config::QueueConfig;

/// Queue position that shrinks by one per tick and never drops below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueCountdown {
    position: u32,
    minutes_per_position: u32,
}

impl QueueCountdown {
    pub fn new(position: u32, minutes_per_position: u32) -> Self {
        Self {
            position: position.max(1),
            minutes_per_position,
        }
    }

    pub fn from_config(config: &QueueConfig) -> Self {
        Self::new(config.initial_position, config.minutes_per_position)
    }

    pub fn tick(&mut self) {
        self.position = self.position.saturating_sub(1).max(1);
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn eta_minutes(&self) -> u32 {
        self.position * self.minutes_per_position
    }

    /// Width of the progress bar, `100 - position * 10` clamped to 0..=100.
    pub fn progress_percent(&self) -> u32 {
        100u32.saturating_sub(self.position.saturating_mul(10))
    }
}

impl Default for QueueCountdown {
    fn default() -> Self {
        Self::from_config(&QueueConfig::default())
    }
}

/// Shared stop flag for a tick loop.
#[derive(Debug, Clone, Default)]
pub struct TickGuard(Rc<Cell<bool>>);

impl TickGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

/// Sleep for `interval`, then call `on_tick`, until the guard is stopped.
///
/// The sleep is injected so the browser can use timer futures while tests
/// drive a paused tokio clock.
pub async fn run_ticker<S, F, T>(interval: Duration, guard: TickGuard, mut sleep: S, mut on_tick: T)
where
    S: FnMut(Duration) -> F,
    F: Future<Output = ()>,
    T: FnMut(),
{
    loop {
        sleep(interval).await;
        if guard.is_stopped() {
            break;
        }
        on_tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{sleep, timeout};

    #[test]
    fn test_countdown_floors_at_one() {
        let mut queue = QueueCountdown::new(3, 15);
        assert_eq!(queue.eta_minutes(), 45);
        assert_eq!(queue.progress_percent(), 70);

        queue.tick();
        assert_eq!(queue.position(), 2);
        queue.tick();
        queue.tick();
        queue.tick();
        assert_eq!(queue.position(), 1);
        assert_eq!(queue.eta_minutes(), 15);
        assert_eq!(queue.progress_percent(), 90);
    }

    #[test]
    fn test_long_queue_progress_clamps_to_zero() {
        let queue = QueueCountdown::new(14, 15);
        assert_eq!(queue.progress_percent(), 0);
        assert_eq!(QueueCountdown::new(0, 15).position(), 1);
    }

    #[test]
    fn test_default_follows_config() {
        let queue = QueueCountdown::default();
        assert_eq!(queue.position(), 3);
        assert_eq!(queue.eta_minutes(), 45);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_decrements_once_per_interval() {
        let queue = Rc::new(Cell::new(QueueCountdown::new(3, 15)));
        let seen = Rc::new(Cell::new(0u32));

        let ticking = {
            let queue = queue.clone();
            let seen = seen.clone();
            run_ticker(Duration::from_secs(5), TickGuard::new(), sleep, move || {
                let mut next = queue.get();
                next.tick();
                queue.set(next);
                seen.set(seen.get() + 1);
            })
        };

        // Ticks land at 5 s, 10 s and 15 s.
        assert!(timeout(Duration::from_secs(16), ticking).await.is_err());
        assert_eq!(seen.get(), 3);
        assert_eq!(queue.get().position(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_idle_before_first_interval() {
        let seen = Rc::new(Cell::new(0u32));
        let counter = seen.clone();
        let ticking = run_ticker(Duration::from_secs(5), TickGuard::new(), sleep, move || {
            counter.set(counter.get() + 1);
        });

        assert!(timeout(Duration::from_millis(4_900), ticking).await.is_err());
        assert_eq!(seen.get(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stopped_guard_ends_loop() {
        let guard = TickGuard::new();
        let seen = Rc::new(Cell::new(0u32));

        let ticking = {
            let guard = guard.clone();
            let seen = seen.clone();
            run_ticker(Duration::from_secs(5), guard.clone(), sleep, move || {
                seen.set(seen.get() + 1);
                if seen.get() == 2 {
                    guard.stop();
                }
            })
        };

        timeout(Duration::from_secs(60), ticking).await.unwrap();
        assert_eq!(seen.get(), 2);
        assert!(guard.is_stopped());
    }

    #[tokio::test(start_paused = true)]
    async fn test_guard_stopped_before_start() {
        let guard = TickGuard::new();
        guard.stop();
        let seen = Rc::new(Cell::new(0u32));
        let counter = seen.clone();

        run_ticker(Duration::from_secs(5), guard, sleep, move || {
            counter.set(counter.get() + 1);
        })
        .await;
        assert_eq!(seen.get(), 0);
    }
}
