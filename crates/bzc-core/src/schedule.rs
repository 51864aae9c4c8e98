//! Delay-coalescing task scheduler.
//!
//! A [`Debouncer`] keeps at most one pending task. Scheduling a new task
//! cancels the pending one, so a burst of triggers collapses into a single
//! invocation that runs `delay` after the last trigger.
//!
//! Each debouncer owns one worker thread. Triggers only replace the pending
//! task and its deadline and wake the worker, so a burst never spawns more
//! threads. The worker stops when the debouncer is dropped; a task still
//! pending at that point is discarded.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Cancel handle for one scheduled task.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    cancelled: Arc<AtomicBool>,
}

impl TaskHandle {
    /// Cancel the task if it has not started yet.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

type Task = Box<dyn FnOnce() + Send + 'static>;

struct Pending {
    deadline: Instant,
    cancelled: Arc<AtomicBool>,
    task: Task,
}

#[derive(Default)]
struct State {
    pending: Option<Pending>,
    shutdown: bool,
}

#[derive(Default)]
struct Shared {
    state: Mutex<State>,
    wake: Condvar,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub struct Debouncer {
    delay: Duration,
    shared: Arc<Shared>,
    worker: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        let shared = Arc::new(Shared::default());
        let worker = {
            let shared = Arc::clone(&shared);
            thread::spawn(move || run_worker(&shared))
        };
        Self {
            delay,
            shared,
            worker: Some(worker),
        }
    }

    /// Schedule `task` to run after the delay on the worker thread,
    /// superseding any task still pending. Returns immediately.
    pub fn schedule<F>(&self, task: F) -> TaskHandle
    where
        F: FnOnce() + Send + 'static,
    {
        let cancelled = Arc::new(AtomicBool::new(false));
        let next = Pending {
            deadline: Instant::now() + self.delay,
            cancelled: Arc::clone(&cancelled),
            task: Box::new(task),
        };

        let previous = {
            let mut state = self.shared.lock();
            state.pending.replace(next)
        };
        self.shared.wake.notify_one();

        // Dropped outside the lock; the old closure may own arbitrary state.
        if let Some(previous) = previous {
            if !previous.cancelled.swap(true, Ordering::SeqCst) {
                log::trace!("debounce: pending task superseded");
            }
        }

        TaskHandle { cancelled }
    }

    /// Cancel whatever task is pending, if any.
    pub fn cancel(&self) {
        let previous = self.shared.lock().pending.take();
        if let Some(previous) = previous {
            previous.cancelled.store(true, Ordering::SeqCst);
        }
    }

    /// Whether a task is scheduled and has not yet fired or been cancelled.
    pub fn is_pending(&self) -> bool {
        self.shared
            .lock()
            .pending
            .as_ref()
            .is_some_and(|p| !p.cancelled.load(Ordering::SeqCst))
    }
}

impl fmt::Debug for Debouncer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("pending", &self.is_pending())
            .finish()
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        let discarded = {
            let mut state = self.shared.lock();
            state.shutdown = true;
            state.pending.take()
        };
        self.shared.wake.notify_one();
        drop(discarded);

        if let Some(worker) = self.worker.take() {
            // A task that drops its own debouncer must not join itself.
            if worker.thread().id() != thread::current().id() && worker.join().is_err() {
                log::error!("debounce worker panicked");
            }
        }
    }
}

/// Sleep until the pending deadline, run the task if it is still live, and
/// repeat until shutdown. Replacing the pending task re-arms the wait.
fn run_worker(shared: &Shared) {
    let mut state = shared.lock();
    loop {
        if state.shutdown {
            return;
        }
        let Some(deadline) = state.pending.as_ref().map(|p| p.deadline) else {
            state = shared.wake.wait(state).unwrap_or_else(PoisonError::into_inner);
            continue;
        };

        let now = Instant::now();
        if now < deadline {
            state = shared
                .wake
                .wait_timeout(state, deadline - now)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
            continue;
        }

        let Some(due) = state.pending.take() else {
            continue;
        };
        // Checked under the lock so a cancel through the debouncer either
        // wins entirely or not at all.
        let runnable = !due.cancelled.load(Ordering::SeqCst);
        drop(state);

        if runnable && panic::catch_unwind(AssertUnwindSafe(due.task)).is_err() {
            log::error!("debounced task panicked");
        }
        state = shared.lock();
    }
}
