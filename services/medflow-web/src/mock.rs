// services/medflow-web/src/mock.rs
//
// MedFlow Site - Simulated live updates
// Drives the patient queue countdown; there is no backend behind it.
//

use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use medflow_shared::queue::{run_ticker, QueueCountdown, TickGuard};

/// Tick the queue countdown every `interval` until the owning view unmounts.
pub fn start_queue_countdown(queue: RwSignal<QueueCountdown>, interval: Duration) {
    let guard = TickGuard::new();

    spawn_local(run_ticker(
        interval,
        guard.clone(),
        |interval: Duration| TimeoutFuture::new(u32::try_from(interval.as_millis()).unwrap_or(u32::MAX)),
        move || {
            queue.update(QueueCountdown::tick);
            log::debug!("Queue position now {}", queue.get_untracked().position());
        },
    ));

    on_cleanup(move || guard.stop());
}
