#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use std::cell::Cell;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use timer::db::collection::Collection;
    use timer::db::memory::MemoryCollection;
    use timer::db::time_logs::TimeLogs;
    use timer::libs::config::StorageConfig;
    use timer::libs::error::TimerError;
    use timer::libs::query::{Filter, TaskSelector};
    use timer::libs::time_log::{Status, TimeLog};
    use timer::libs::tracker::{Clock, Tracker};

    /// Clock that advances by one second on every reading.
    struct StepClock {
        next: Cell<DateTime<Utc>>,
    }

    impl StepClock {
        fn new() -> Self {
            StepClock {
                next: Cell::new(Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap()),
            }
        }
    }

    impl Clock for StepClock {
        fn now(&self) -> DateTime<Utc> {
            let now = self.next.get();
            self.next.set(now + Duration::seconds(1));
            now
        }
    }

    struct TrackerTestContext {
        _temp_dir: TempDir,
        clock: StepClock,
        time_logs: TimeLogs,
        memory: MemoryCollection,
    }

    impl TestContext for TrackerTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = StorageConfig {
                database: temp_dir.path().join("timer_db.sqlite").to_string_lossy().into_owned(),
                collection: "timer".to_string(),
            };
            let time_logs = TimeLogs::new(&storage).unwrap();
            TrackerTestContext {
                _temp_dir: temp_dir,
                clock: StepClock::new(),
                time_logs,
                memory: MemoryCollection::new(),
            }
        }
    }

    fn named(name: &str) -> TaskSelector {
        TaskSelector::Named(name.to_string())
    }

    fn all_logs(collection: &dyn Collection) -> Vec<TimeLog> {
        collection.find(&Filter::any(TaskSelector::All)).unwrap()
    }

    fn add_creates_started_session(collection: &mut dyn Collection, clock: &StepClock) {
        let log = Tracker::with_clock(collection, clock).add("write-report").unwrap();

        assert_eq!(log.status, Status::Started);
        assert_eq!(log.work_type, "write-report");
        assert!(log.paused_times.is_empty());
        assert!(log.resume_times.is_empty());
        assert!(log.end_time.is_none());
        assert_eq!(log.created_at, log.start_time);
        assert_eq!(log.updated_at, log.start_time);

        let stored = all_logs(collection);
        assert_eq!(stored, vec![log]);
    }

    fn full_lifecycle(collection: &mut dyn Collection, clock: &StepClock) {
        let task = named("write-report");
        let mut tracker = Tracker::with_clock(collection, clock);
        tracker.add("write-report").unwrap();
        assert_eq!(tracker.pause(&task).unwrap(), 1);
        assert_eq!(tracker.resume(&task).unwrap(), 1);
        assert!(tracker.stop(&task).unwrap());
        drop(tracker);

        let stored = all_logs(collection);
        assert_eq!(stored.len(), 1);
        let log = &stored[0];
        assert_eq!(log.status, Status::Stopped);
        assert_eq!(log.paused_times.len(), 1);
        assert_eq!(log.resume_times.len(), 1);
        let end_time = log.end_time.unwrap();
        assert!(end_time > log.start_time);
        assert!(log.paused_times[0] < log.resume_times[0]);
        assert_eq!(log.updated_at, end_time);
    }

    fn stopped_session_is_frozen(collection: &mut dyn Collection, clock: &StepClock) {
        let task = named("x");
        let mut tracker = Tracker::with_clock(collection, clock);
        tracker.add("x").unwrap();
        tracker.pause(&task).unwrap();
        assert!(tracker.stop(&task).unwrap());
        drop(tracker);
        let before = all_logs(collection);

        let mut tracker = Tracker::with_clock(collection, clock);
        assert_eq!(tracker.pause(&task).unwrap(), 0);
        assert_eq!(tracker.resume(&task).unwrap(), 0);
        assert!(!tracker.stop(&task).unwrap());
        drop(tracker);

        assert_eq!(all_logs(collection), before);
    }

    fn sentinel_pauses_every_task(collection: &mut dyn Collection, clock: &StepClock) {
        let mut tracker = Tracker::with_clock(collection, clock);
        tracker.add("alpha").unwrap();
        tracker.add("beta").unwrap();
        tracker.add("gamma").unwrap();
        assert!(tracker.stop(&named("gamma")).unwrap());

        assert_eq!(tracker.pause(&TaskSelector::from_arg(Some("@"))).unwrap(), 2);
        drop(tracker);

        for log in all_logs(collection) {
            match log.work_type.as_str() {
                "gamma" => {
                    assert_eq!(log.status, Status::Stopped);
                    assert!(log.paused_times.is_empty());
                }
                _ => {
                    assert_eq!(log.status, Status::Paused);
                    assert_eq!(log.paused_times.len(), 1);
                }
            }
        }
    }

    fn stop_closes_first_open_session_only(collection: &mut dyn Collection, clock: &StepClock) {
        let task = named("review");
        let mut tracker = Tracker::with_clock(collection, clock);
        let first = tracker.add("review").unwrap();
        let second = tracker.add("review").unwrap();

        assert!(tracker.stop(&task).unwrap());
        drop(tracker);
        let stored = all_logs(collection);
        assert_eq!(stored[0].id, first.id);
        assert_eq!(stored[0].status, Status::Stopped);
        assert_eq!(stored[1].id, second.id);
        assert_eq!(stored[1].status, Status::Started);

        let mut tracker = Tracker::with_clock(collection, clock);
        assert!(tracker.stop(&task).unwrap());
        assert!(!tracker.stop(&task).unwrap());
    }

    fn repeated_pause_appends_again(collection: &mut dyn Collection, clock: &StepClock) {
        let task = named("x");
        let mut tracker = Tracker::with_clock(collection, clock);
        tracker.add("x").unwrap();
        assert_eq!(tracker.pause(&task).unwrap(), 1);
        assert_eq!(tracker.pause(&task).unwrap(), 1);
        assert_eq!(tracker.resume(&task).unwrap(), 1);
        assert_eq!(tracker.resume(&task).unwrap(), 0);
        drop(tracker);

        let logs = all_logs(collection);
        let log = &logs[0];
        assert_eq!(log.status, Status::Started);
        assert_eq!(log.paused_times.len(), 2);
        assert_eq!(log.resume_times.len(), 1);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_add_creates_started_session(ctx: &mut TrackerTestContext) {
        add_creates_started_session(&mut ctx.time_logs, &ctx.clock);
        add_creates_started_session(&mut ctx.memory, &ctx.clock);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_add_rejects_empty_task_without_writing(ctx: &mut TrackerTestContext) {
        for name in ["", "   "] {
            let result = Tracker::with_clock(&mut ctx.time_logs, &ctx.clock).add(name);
            assert!(matches!(result, Err(TimerError::InvalidArgument(_))));
            let result = Tracker::with_clock(&mut ctx.memory, &ctx.clock).add(name);
            assert!(matches!(result, Err(TimerError::InvalidArgument(_))));
        }
        assert!(all_logs(&ctx.time_logs).is_empty());
        assert!(ctx.memory.is_empty());
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_add_stores_task_name_verbatim(ctx: &mut TrackerTestContext) {
        let log = Tracker::with_clock(&mut ctx.time_logs, &ctx.clock).add("  padded  ").unwrap();
        assert_eq!(log.work_type, "  padded  ");
        assert_eq!(all_logs(&ctx.time_logs)[0].work_type, "  padded  ");

        let mut tracker = Tracker::with_clock(&mut ctx.time_logs, &ctx.clock);
        assert_eq!(tracker.pause(&named("padded")).unwrap(), 0);
        assert_eq!(tracker.pause(&named("  padded  ")).unwrap(), 1);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_pause_then_resume(ctx: &mut TrackerTestContext) {
        let task = named("x");
        let mut tracker = Tracker::with_clock(&mut ctx.time_logs, &ctx.clock);
        tracker.add("x").unwrap();
        tracker.pause(&task).unwrap();
        drop(tracker);

        let logs = all_logs(&ctx.time_logs);
        let log = &logs[0];
        assert_eq!(log.status, Status::Paused);
        assert_eq!(log.paused_times.len(), 1);
        assert!(log.updated_at > log.created_at);

        Tracker::with_clock(&mut ctx.time_logs, &ctx.clock).resume(&task).unwrap();
        let logs = all_logs(&ctx.time_logs);
        let log = &logs[0];
        assert_eq!(log.status, Status::Started);
        assert_eq!(log.resume_times.len(), 1);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_full_lifecycle(ctx: &mut TrackerTestContext) {
        full_lifecycle(&mut ctx.time_logs, &ctx.clock);
        full_lifecycle(&mut ctx.memory, &ctx.clock);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_stopped_session_is_frozen(ctx: &mut TrackerTestContext) {
        stopped_session_is_frozen(&mut ctx.time_logs, &ctx.clock);
        stopped_session_is_frozen(&mut ctx.memory, &ctx.clock);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_sentinel_pauses_every_task(ctx: &mut TrackerTestContext) {
        sentinel_pauses_every_task(&mut ctx.time_logs, &ctx.clock);
        sentinel_pauses_every_task(&mut ctx.memory, &ctx.clock);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_stop_closes_first_open_session_only(ctx: &mut TrackerTestContext) {
        stop_closes_first_open_session_only(&mut ctx.time_logs, &ctx.clock);
        stop_closes_first_open_session_only(&mut ctx.memory, &ctx.clock);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_repeated_pause_appends_again(ctx: &mut TrackerTestContext) {
        repeated_pause_appends_again(&mut ctx.time_logs, &ctx.clock);
        repeated_pause_appends_again(&mut ctx.memory, &ctx.clock);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_operations_on_unknown_task_are_noops(ctx: &mut TrackerTestContext) {
        let mut tracker = Tracker::with_clock(&mut ctx.time_logs, &ctx.clock);
        tracker.add("known").unwrap();
        let unknown = named("unknown");
        assert_eq!(tracker.pause(&unknown).unwrap(), 0);
        assert_eq!(tracker.resume(&unknown).unwrap(), 0);
        assert!(!tracker.stop(&unknown).unwrap());
        drop(tracker);

        let logs = all_logs(&ctx.time_logs);
        let log = &logs[0];
        assert_eq!(log.status, Status::Started);
        assert_eq!(log.updated_at, log.created_at);
    }
}
