//! The polling use-case.

use std::sync::Arc;
use std::time::Duration;

use flueview_domain::error::PollError;
use flueview_domain::view::StatusView;

use crate::ports::{StatusDisplay, StatusSource};

/// Polls the status source and projects each snapshot onto the display.
///
/// Cycles are independent: a failed cycle changes nothing and the next tick
/// proceeds as if it had succeeded.
pub struct Poller<S, D> {
    source: S,
    display: D,
}

impl<S, D> Poller<S, D>
where
    S: StatusSource,
    D: StatusDisplay,
{
    pub fn new(source: S, display: D) -> Self {
        Self { source, display }
    }

    /// Run one poll cycle: fetch a snapshot, project it, apply the view.
    ///
    /// # Errors
    ///
    /// Returns the cycle's [`PollError`]; the display keeps its previous
    /// content in every failure case.
    pub async fn refresh(&self) -> Result<(), PollError> {
        let snapshot = self.source.fetch().await?;
        let view = StatusView::from(&snapshot);
        self.display.apply(&view).await?;
        Ok(())
    }
}

impl<S, D> Poller<S, D>
where
    S: StatusSource + 'static,
    D: StatusDisplay + 'static,
{
    /// Run the schedule: one cycle immediately, then one every `period`.
    ///
    /// Each cycle runs as its own task, so a response slower than the
    /// period never delays the next tick — in-flight cycles may overlap
    /// and complete out of send order, and the last apply wins. A cycle's
    /// failure is written to the diagnostic log and otherwise dropped.
    pub async fn run(self: Arc<Self>, period: Duration) {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            let poller = Arc::clone(&self);
            tokio::spawn(async move {
                if let Err(err) = poller.refresh().await {
                    tracing::error!(error = %err, "poll cycle failed");
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::future::Future;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use flueview_domain::error::DisplayError;
    use flueview_domain::snapshot::StatusSnapshot;
    use flueview_domain::view::Region;

    fn snapshot() -> StatusSnapshot {
        StatusSnapshot {
            flue_temperature: 212.345,
            pi_cpu_temperature: 45.0,
            overfire: false,
            force_heat_active: true,
            overfire_force_shutoff_active: false,
            force_heat_on_active: false,
            last_polled: "12:00:01".to_string(),
        }
    }

    #[derive(Default)]
    struct StubSource {
        calls: AtomicUsize,
    }

    impl StatusSource for StubSource {
        fn fetch(&self) -> impl Future<Output = Result<StatusSnapshot, PollError>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            async { Ok(snapshot()) }
        }
    }

    #[derive(Default)]
    struct FailingSource {
        calls: AtomicUsize,
    }

    impl StatusSource for FailingSource {
        fn fetch(&self) -> impl Future<Output = Result<StatusSnapshot, PollError>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            async { Err(PollError::fetch("connection refused")) }
        }
    }

    /// Starts instantly, never responds within a test's horizon.
    #[derive(Default)]
    struct SlowSource {
        started: AtomicUsize,
    }

    impl StatusSource for SlowSource {
        fn fetch(&self) -> impl Future<Output = Result<StatusSnapshot, PollError>> + Send {
            self.started.fetch_add(1, Ordering::SeqCst);
            async {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(PollError::fetch("gave up"))
            }
        }
    }

    #[derive(Default)]
    struct RecordingDisplay {
        applied: Mutex<Vec<StatusView>>,
    }

    impl StatusDisplay for RecordingDisplay {
        fn apply(&self, view: &StatusView) -> impl Future<Output = Result<(), DisplayError>> + Send {
            let view = view.clone();
            async move {
                self.applied.lock().unwrap().push(view);
                Ok(())
            }
        }
    }

    struct FailingDisplay;

    impl StatusDisplay for FailingDisplay {
        fn apply(
            &self,
            _view: &StatusView,
        ) -> impl Future<Output = Result<(), DisplayError>> + Send {
            async { Err(DisplayError::UnknownRegion(Region::Status)) }
        }
    }

    #[tokio::test]
    async fn should_project_and_apply_snapshot_on_refresh() {
        let poller = Poller::new(StubSource::default(), RecordingDisplay::default());

        poller.refresh().await.unwrap();

        let applied = poller.display.applied.lock().unwrap();
        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0], StatusView::from(&snapshot()));
    }

    #[tokio::test]
    async fn should_leave_display_untouched_when_fetch_fails() {
        let poller = Poller::new(FailingSource::default(), RecordingDisplay::default());

        let result = poller.refresh().await;

        assert!(matches!(result, Err(PollError::Fetch(_))));
        assert!(poller.display.applied.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_surface_display_failure() {
        let poller = Poller::new(StubSource::default(), FailingDisplay);

        let result = poller.refresh().await;

        assert!(matches!(result, Err(PollError::Display(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn should_run_first_cycle_immediately() {
        let poller = Arc::new(Poller::new(StubSource::default(), RecordingDisplay::default()));
        let schedule = tokio::spawn(Arc::clone(&poller).run(Duration::from_millis(2000)));

        tokio::time::sleep(Duration::from_millis(1)).await;

        assert_eq!(poller.source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(poller.display.applied.lock().unwrap().len(), 1);
        schedule.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn should_poll_on_a_fixed_schedule() {
        let poller = Arc::new(Poller::new(StubSource::default(), RecordingDisplay::default()));
        let schedule = tokio::spawn(Arc::clone(&poller).run(Duration::from_millis(2000)));

        // Ticks at T, T+2000, T+4000.
        tokio::time::sleep(Duration::from_millis(4900)).await;

        assert_eq!(poller.source.calls.load(Ordering::SeqCst), 3);
        assert_eq!(poller.display.applied.lock().unwrap().len(), 3);
        schedule.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn should_keep_the_schedule_running_after_failed_cycles() {
        let poller = Arc::new(Poller::new(
            FailingSource::default(),
            RecordingDisplay::default(),
        ));
        let schedule = tokio::spawn(Arc::clone(&poller).run(Duration::from_millis(2000)));

        tokio::time::sleep(Duration::from_millis(4900)).await;

        assert_eq!(poller.source.calls.load(Ordering::SeqCst), 3);
        assert!(poller.display.applied.lock().unwrap().is_empty());
        schedule.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn should_not_delay_ticks_behind_a_slow_cycle() {
        let poller = Arc::new(Poller::new(SlowSource::default(), RecordingDisplay::default()));
        let schedule = tokio::spawn(Arc::clone(&poller).run(Duration::from_millis(2000)));

        tokio::time::sleep(Duration::from_millis(4900)).await;

        // Three cycles in flight, none finished, none blocking the ticker.
        assert_eq!(poller.source.started.load(Ordering::SeqCst), 3);
        assert!(poller.display.applied.lock().unwrap().is_empty());
        schedule.abort();
    }
}
