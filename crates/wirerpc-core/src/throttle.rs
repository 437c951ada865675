//! FIFO request-rate admission gate.
//!
//! Admissions are spaced evenly at `1/N` seconds apart. Each caller waits
//! for its slot, then proceeds; the gate delays initiation only, so an
//! admitted call's completion never blocks or cancels another's.
//! Submission order is preserved because the slot clock sits behind
//! Tokio's fair mutex.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{self, Instant};
use tracing::debug;

/// Admits units of work no faster than N per second, in submission order.
pub struct RequestThrottle {
    interval: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl RequestThrottle {
    /// Create a throttle releasing at most `requests_per_second` admissions
    /// per second.
    pub fn per_second(requests_per_second: u32) -> Self {
        assert!(
            requests_per_second > 0,
            "requests_per_second must be positive"
        );
        Self {
            interval: Duration::from_secs(1) / requests_per_second,
            next_slot: Mutex::new(None),
        }
    }

    /// Spacing between consecutive admissions.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait until this caller's admission slot arrives.
    pub async fn acquire(&self) {
        let slot = {
            let mut next = self.next_slot.lock().await;
            let now = Instant::now();
            let slot = match *next {
                Some(at) if at > now => at,
                _ => now,
            };
            *next = Some(slot + self.interval);
            slot
        };

        let now = Instant::now();
        if slot > now {
            debug!(wait_ms = (slot - now).as_millis() as u64, "throttling request admission");
        }
        time::sleep_until(slot).await;
    }
}

impl std::fmt::Debug for RequestThrottle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestThrottle")
            .field("interval", &self.interval)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex as StdMutex};

    #[tokio::test(start_paused = true)]
    async fn admissions_are_spaced_and_fifo() {
        let throttle = Arc::new(RequestThrottle::per_second(10));
        let admitted: Arc<StdMutex<Vec<(usize, Duration)>>> = Arc::default();
        let start = Instant::now();

        let mut handles = Vec::new();
        for i in 0..5 {
            let throttle = throttle.clone();
            let admitted = admitted.clone();
            handles.push(tokio::spawn(async move {
                throttle.acquire().await;
                admitted.lock().unwrap().push((i, start.elapsed()));
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let admitted = admitted.lock().unwrap();
        let order: Vec<usize> = admitted.iter().map(|(i, _)| *i).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4], "admission must be FIFO");
        for (i, (_, at)) in admitted.iter().enumerate() {
            assert!(
                *at >= Duration::from_millis(100) * i as u32,
                "admission {i} arrived early: {at:?}"
            );
        }
    }

    #[tokio::test(start_paused = true)]
    async fn completion_is_independent_of_other_calls() {
        let throttle = Arc::new(RequestThrottle::per_second(1000));
        let finished: Arc<StdMutex<Vec<&'static str>>> = Arc::default();

        let slow = {
            let throttle = throttle.clone();
            let finished = finished.clone();
            tokio::spawn(async move {
                throttle.acquire().await;
                time::sleep(Duration::from_millis(50)).await;
                finished.lock().unwrap().push("slow");
            })
        };
        let fast = {
            let throttle = throttle.clone();
            let finished = finished.clone();
            tokio::spawn(async move {
                throttle.acquire().await;
                finished.lock().unwrap().push("fast");
            })
        };

        slow.await.unwrap();
        fast.await.unwrap();
        assert_eq!(*finished.lock().unwrap(), vec!["fast", "slow"]);
    }

    #[tokio::test(start_paused = true)]
    async fn idle_throttle_admits_immediately() {
        let throttle = RequestThrottle::per_second(2);
        throttle.acquire().await;
        // Long idle gap: the stale slot must not delay the next caller.
        time::sleep(Duration::from_secs(5)).await;
        let before = Instant::now();
        throttle.acquire().await;
        assert_eq!(Instant::now(), before);
    }

    #[test]
    #[should_panic(expected = "requests_per_second must be positive")]
    fn zero_rate_panics() {
        RequestThrottle::per_second(0);
    }
}
