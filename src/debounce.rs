//! Debounced callbacks
//!
//! Every new event arms a fresh ticket and invalidates the pending one, so a
//! burst of events fires once, `delay_ms` after the last of them. The same
//! ticket is checked again when an async response lands; a response for a
//! superseded request is dropped instead of overwriting a newer render.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ticket {
    generation: u64,
    pub fire_at_ms: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct Debouncer {
    delay_ms: u32,
    generation: u64,
}

impl Debouncer {
    pub const fn new(delay_ms: u32) -> Self {
        Self { delay_ms, generation: 0 }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Cancel the pending ticket and schedule a new one
    pub fn arm(&mut self, now_ms: f64) -> Ticket {
        self.generation += 1;
        Ticket {
            generation: self.generation,
            fire_at_ms: now_ms + f64::from(self.delay_ms),
        }
    }

    /// Ticket for work started right away (a first load). It is superseded
    /// by the next `arm` exactly like a pending timer.
    pub fn issue(&mut self, now_ms: f64) -> Ticket {
        self.generation += 1;
        Ticket {
            generation: self.generation,
            fire_at_ms: now_ms,
        }
    }

    pub fn cancel(&mut self) {
        self.generation += 1;
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.generation == self.generation
    }
}

/// Ticket bound to the debouncer that issued it
#[derive(Clone, Copy)]
pub struct LiveTicket {
    state: StoredValue<Debouncer>,
    ticket: Ticket,
}

impl LiveTicket {
    /// False once a newer event has re-armed the debouncer
    pub fn is_current(&self) -> bool {
        self.state
            .try_with_value(|d| d.is_current(self.ticket))
            .unwrap_or(false)
    }
}

/// Debounced callback plus access to its ticket sequence
pub struct Debounced<A: 'static> {
    state: StoredValue<Debouncer>,
    trigger: Callback<A>,
}

impl<A: 'static> Clone for Debounced<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: 'static> Copy for Debounced<A> {}

impl<A: 'static> Debounced<A> {
    /// Schedule the handler, cancelling the pending call
    pub fn run(&self, arg: A) {
        self.trigger.run(arg);
    }

    /// Ticket for a request issued outside the handler (e.g. on mount).
    /// Any later `run` invalidates it.
    pub fn issue(&self) -> LiveTicket {
        let ticket = self
            .state
            .try_update_value(|d| d.issue(js_sys::Date::now()))
            .unwrap_or(Ticket { generation: 0, fire_at_ms: 0.0 });
        LiveTicket { state: self.state, ticket }
    }
}

/// Wrap `handler` so that it runs `delay_ms` after the last call only.
pub fn use_debounced<A, F>(delay_ms: u32, handler: F) -> Debounced<A>
where
    A: Send + Sync + 'static,
    F: Fn(A, LiveTicket) + 'static,
{
    let state = StoredValue::new(Debouncer::new(delay_ms));
    let handler = StoredValue::new_local(handler);

    let trigger = Callback::new(move |arg: A| {
        let Some(ticket) = state.try_update_value(|d| d.arm(js_sys::Date::now())) else {
            return;
        };
        let live = LiveTicket { state, ticket };
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if live.is_current() {
                handler.with_value(|run| run(arg, live));
            }
        });
    });

    Debounced { state, trigger }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replay `events` (ms) in time order: each event arms the debouncer,
    /// each pending timer elapses at its `fire_at_ms` and runs the handler
    /// only if its ticket is still current then. Returns the run times.
    fn fired(delay_ms: u32, events: &[f64]) -> Vec<f64> {
        let mut debouncer = Debouncer::new(delay_ms);
        let mut pending: Vec<Ticket> = Vec::new();
        let mut runs = Vec::new();

        let mut elapse = |until: f64, debouncer: &Debouncer, pending: &mut Vec<Ticket>| {
            pending.sort_by(|a, b| a.fire_at_ms.total_cmp(&b.fire_at_ms));
            while pending.first().is_some_and(|t| t.fire_at_ms < until) {
                let ticket = pending.remove(0);
                if debouncer.is_current(ticket) {
                    runs.push(ticket.fire_at_ms);
                }
            }
        };

        for &at in events {
            elapse(at, &debouncer, &mut pending);
            pending.push(debouncer.arm(at));
        }
        elapse(f64::INFINITY, &debouncer, &mut pending);
        runs
    }

    #[test]
    fn test_burst_fires_once_after_last_event() {
        assert_eq!(fired(300, &[0.0, 50.0, 100.0]), vec![400.0]);
    }

    #[test]
    fn test_separate_bursts_fire_separately() {
        assert_eq!(fired(300, &[0.0, 50.0, 600.0]), vec![350.0, 900.0]);
    }

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut debouncer = Debouncer::new(300);
        let first = debouncer.arm(0.0);
        let second = debouncer.arm(50.0);
        assert!(!debouncer.is_current(first));
        assert!(debouncer.is_current(second));
        debouncer.cancel();
        assert!(!debouncer.is_current(second));
    }

    #[test]
    fn test_first_load_superseded_by_search() {
        let mut debouncer = Debouncer::new(300);
        let first_load = debouncer.issue(0.0);
        assert!(debouncer.is_current(first_load));

        // keystroke while the first load is still in flight
        let search = debouncer.arm(20.0);
        assert!(!debouncer.is_current(first_load));
        assert!(debouncer.is_current(search));
        assert_eq!(search.fire_at_ms, 320.0);
    }
}
