//! Polling scheduler
//!
//! Drives the recurring fetches of a session. Each activity has at most one
//! timer and at most one fetch in flight; every issued tick carries a
//! per-activity sequence number so that late or superseded replies can be
//! recognised and dropped.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use serde::Serialize;
use tokio::time::{self, MissedTickBehavior};
use tokio_stream::wrappers::IntervalStream;
use tokio_stream::{StreamExt, StreamMap};
use tracing::{debug, warn};

/// A named recurring fetch.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Activity {
    Lobby,
    Match,
    Leaderboard,
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match *self {
            Self::Lobby => "lobby",
            Self::Match => "match",
            Self::Leaderboard => "leaderboard",
        })
    }
}

/// One issued execution of an activity.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Tick {
    pub activity: Activity,
    pub seq: u64,
}

#[derive(Debug, Default)]
struct Slot {
    /// Last sequence handed out.
    issued: u64,
    /// Replies with a sequence at or below this are stale.
    fence: u64,
    in_flight: Option<u64>,
    rerun: bool,
}

#[derive(Debug, Default)]
pub struct PollingScheduler {
    timers: StreamMap<Activity, IntervalStream>,
    slots: HashMap<Activity, Slot>,
}

impl PollingScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_running(&self, activity: Activity) -> bool {
        self.timers.contains_key(&activity)
    }

    #[must_use]
    pub fn in_flight(&self, activity: Activity) -> bool {
        self.slots
            .get(&activity)
            .is_some_and(|slot| slot.in_flight.is_some())
    }

    /// Starts ticking `activity` every `period`, first tick immediately.
    ///
    /// Returns `false` without touching the existing timer if the activity is
    /// already running, and refuses a zero `period`.
    pub fn start(&mut self, activity: Activity, period: Duration) -> bool {
        if self.is_running(activity) {
            debug!(%activity, "Activity already running, ignoring start");

            return false;
        }

        if period.is_zero() {
            warn!(%activity, "Refusing to start activity with a zero period");

            return false;
        }

        let mut interval = time::interval(period);

        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let _ignored = self.timers.insert(activity, IntervalStream::new(interval));

        debug!(%activity, ?period, "Started activity");

        true
    }

    /// Stops ticking `activity` and fences every tick issued so far, so a
    /// reply still in flight is discarded when it lands.
    ///
    /// Returns `false` if the activity was not running.
    pub fn stop(&mut self, activity: Activity) -> bool {
        let was_running = self.timers.remove(&activity).is_some();

        let slot = self.slots.entry(activity).or_default();

        slot.fence = slot.issued;
        slot.in_flight = None;
        slot.rerun = false;

        if was_running {
            debug!(%activity, fence = slot.fence, "Stopped activity");
        }

        was_running
    }

    /// Stops `from` before starting `to`; there is no point at which both run.
    pub fn replace(&mut self, from: Activity, to: Activity, period: Duration) -> bool {
        let _ignored = self.stop(from);

        self.start(to, period)
    }

    pub fn stop_all(&mut self) {
        for activity in [Activity::Lobby, Activity::Match, Activity::Leaderboard] {
            let _ignored = self.stop(activity);
        }
    }

    /// Issues an out-of-band tick for `activity`, whether or not its timer is
    /// running.
    ///
    /// If a fetch is already in flight nothing is issued now; a re-run is
    /// recorded instead and handed out by [`Self::complete`].
    pub fn issue_now(&mut self, activity: Activity) -> Option<Tick> {
        if let Some(seq) = self.slots.get(&activity).and_then(|slot| slot.in_flight) {
            debug!(%activity, seq, "Fetch in flight, queueing a re-run");

            self.slots.entry(activity).or_default().rerun = true;

            return None;
        }

        Some(self.issue(activity))
    }

    /// Waits for the next due tick of any running activity.
    ///
    /// Ticks of activities whose previous fetch is still outstanding are
    /// skipped. Resolves to `None` immediately when nothing is running.
    pub async fn next_due(&mut self) -> Option<Tick> {
        loop {
            let (activity, _instant) = self.timers.next().await?;

            if let Some(seq) = self.in_flight_seq(activity) {
                debug!(%activity, seq, "Previous fetch still in flight, skipping tick");

                continue;
            }

            return Some(self.issue(activity));
        }
    }

    /// Records the completion of `tick`.
    ///
    /// Returns whether its result may be applied: only the newest reply of an
    /// activity that has not been fenced since the tick was issued is. If a
    /// re-run was queued while `tick` was in flight, it is returned as well.
    pub fn complete(&mut self, tick: Tick) -> (bool, Option<Tick>) {
        let slot = self.slots.entry(tick.activity).or_default();

        if slot.in_flight == Some(tick.seq) {
            slot.in_flight = None;
        }

        let fresh = tick.seq > slot.fence;

        if fresh {
            slot.fence = tick.seq;
        } else {
            debug!(
                activity = %tick.activity,
                seq = tick.seq,
                fence = slot.fence,
                "Discarding stale reply"
            );
        }

        let rerun = if slot.rerun && slot.in_flight.is_none() {
            slot.rerun = false;

            Some(self.issue(tick.activity))
        } else {
            None
        };

        (fresh, rerun)
    }

    fn in_flight_seq(&self, activity: Activity) -> Option<u64> {
        self.slots.get(&activity).and_then(|slot| slot.in_flight)
    }

    fn issue(&mut self, activity: Activity) -> Tick {
        let slot = self.slots.entry(activity).or_default();

        slot.issued += 1;
        slot.in_flight = Some(slot.issued);

        Tick {
            activity,
            seq: slot.issued,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::{self, Instant};

    use super::*;

    const PERIOD: Duration = Duration::from_secs(1);

    /// Collects every tick due before `window` elapses, completing each
    /// immediately.
    async fn drain(scheduler: &mut PollingScheduler, window: Duration) -> Vec<Tick> {
        let deadline = Instant::now() + window;
        let mut ticks = Vec::new();

        while let Ok(Some(tick)) = time::timeout_at(deadline, scheduler.next_due()).await {
            let _ignored = scheduler.complete(tick);
            ticks.push(tick);
        }

        ticks
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_period_is_refused() {
        let mut scheduler = PollingScheduler::new();

        assert!(!scheduler.start(Activity::Leaderboard, Duration::ZERO));
        assert!(!scheduler.is_running(Activity::Leaderboard));
        assert!(scheduler.next_due().await.is_none());

        assert!(scheduler.start(Activity::Leaderboard, PERIOD));
    }

    #[tokio::test(start_paused = true)]
    async fn test_double_start_yields_one_timer() {
        let mut scheduler = PollingScheduler::new();

        assert!(scheduler.start(Activity::Match, PERIOD));
        assert!(!scheduler.start(Activity::Match, PERIOD));

        let ticks = drain(&mut scheduler, Duration::from_millis(5_500)).await;

        // t = 0, 1, 2, 3, 4, 5
        assert_eq!(ticks.len(), 6);
        assert!(ticks.iter().all(|tick| tick.activity == Activity::Match));
        assert_eq!(
            ticks.iter().map(|tick| tick.seq).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 6]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_is_idempotent_and_silences_timer() {
        let mut scheduler = PollingScheduler::new();

        assert!(!scheduler.stop(Activity::Lobby));

        assert!(scheduler.start(Activity::Lobby, PERIOD));
        assert!(scheduler.stop(Activity::Lobby));
        assert!(!scheduler.stop(Activity::Lobby));
        assert!(!scheduler.is_running(Activity::Lobby));

        assert!(scheduler.next_due().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_tick_skipped_while_fetch_in_flight() {
        let mut scheduler = PollingScheduler::new();

        let _ignored = scheduler.start(Activity::Match, PERIOD);

        let first = scheduler.next_due().await.unwrap();

        assert!(scheduler.in_flight(Activity::Match));

        // nothing may be issued while `first` is outstanding
        let result = time::timeout(Duration::from_millis(3_500), scheduler.next_due()).await;

        assert!(result.is_err());

        assert_eq!(scheduler.complete(first), (true, None));

        let next = scheduler.next_due().await.unwrap();

        assert_eq!(next.seq, first.seq + 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_replace_never_overlaps() {
        let mut scheduler = PollingScheduler::new();

        let _ignored = scheduler.start(Activity::Lobby, PERIOD);

        let lobby = scheduler.next_due().await.unwrap();

        assert_eq!(lobby.activity, Activity::Lobby);

        assert!(scheduler.replace(Activity::Lobby, Activity::Match, PERIOD));
        assert!(!scheduler.is_running(Activity::Lobby));
        assert!(scheduler.is_running(Activity::Match));

        // the lobby reply landing after the swap must be dropped
        assert_eq!(scheduler.complete(lobby), (false, None));

        let ticks = drain(&mut scheduler, Duration::from_millis(2_500)).await;

        assert!(ticks.iter().all(|tick| tick.activity == Activity::Match));
    }

    #[test]
    fn test_stale_reply_after_newer_is_discarded() {
        let mut scheduler = PollingScheduler::new();

        let older = scheduler.issue_now(Activity::Match).unwrap();

        // stopping orphans `older`, the restart may issue straight away
        let _ignored = scheduler.stop(Activity::Match);
        let newer = scheduler.issue_now(Activity::Match).unwrap();

        assert!(newer.seq > older.seq);
        assert_eq!(scheduler.complete(newer), (true, None));
        assert_eq!(scheduler.complete(older), (false, None));
        assert!(!scheduler.in_flight(Activity::Match));
    }

    #[test]
    fn test_issue_now_queues_rerun_while_in_flight() {
        let mut scheduler = PollingScheduler::new();

        let first = scheduler.issue_now(Activity::Match).unwrap();

        assert!(scheduler.issue_now(Activity::Match).is_none());
        assert!(scheduler.issue_now(Activity::Match).is_none());

        let (fresh, rerun) = scheduler.complete(first);

        assert!(fresh);

        let rerun = rerun.unwrap();

        assert_eq!(rerun.seq, first.seq + 1);
        assert!(scheduler.in_flight(Activity::Match));
        assert_eq!(scheduler.complete(rerun), (true, None));
    }

    #[tokio::test(start_paused = true)]
    async fn test_activities_are_independent() {
        let mut scheduler = PollingScheduler::new();

        let _ignored = scheduler.start(Activity::Match, PERIOD);
        let _ignored = scheduler.start(Activity::Leaderboard, PERIOD * 5);

        let ticks = drain(&mut scheduler, Duration::from_millis(10_500)).await;

        let matches = ticks
            .iter()
            .filter(|tick| tick.activity == Activity::Match)
            .count();
        let leaderboard = ticks
            .iter()
            .filter(|tick| tick.activity == Activity::Leaderboard)
            .count();

        assert_eq!(matches, 11);
        assert_eq!(leaderboard, 3);

        let _ignored = scheduler.stop(Activity::Match);

        let ticks = drain(&mut scheduler, Duration::from_millis(5_000)).await;

        assert!(ticks.iter().all(|tick| tick.activity == Activity::Leaderboard));
        assert_eq!(ticks.len(), 1);
    }
}
