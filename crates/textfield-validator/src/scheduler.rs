//! Deferred execution for work that must not run inside the current update
//!
//! Resetting an on-demand trigger from within the notification that set it
//! would mutate state the host is still observing. Controllers hand that
//! work to a [`Scheduler`] instead, which runs it on the next turn of the
//! host's event loop.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;
use tracing::trace;

/// Unit of deferred work
pub type Task = Box<dyn FnOnce() + 'static>;

/// Runs tasks after the current update pass has settled
pub trait Scheduler {
    /// Queue `task`; it must not run before this call returns
    fn defer(&self, task: Task);
}

impl<S: Scheduler + ?Sized> Scheduler for Rc<S> {
    fn defer(&self, task: Task) {
        (**self).defer(task)
    }
}

/// FIFO queue drained by the host at the end of each update pass
#[derive(Clone, Default)]
pub struct DeferredQueue {
    tasks: Rc<RefCell<VecDeque<Task>>>,
}

impl DeferredQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks waiting for the next drain
    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }

    /// Whether there is nothing to run
    pub fn is_empty(&self) -> bool {
        self.tasks.borrow().is_empty()
    }

    /// Run every task queued before this call and return how many ran.
    ///
    /// Tasks deferred while draining are kept for the following drain.
    pub fn run_pending(&self) -> usize {
        let batch = std::mem::take(&mut *self.tasks.borrow_mut());
        let count = batch.len();
        for task in batch {
            task();
        }
        if count > 0 {
            trace!(count, "ran deferred tasks");
        }
        count
    }
}

impl Scheduler for DeferredQueue {
    fn defer(&self, task: Task) {
        self.tasks.borrow_mut().push_back(task);
    }
}

impl fmt::Debug for DeferredQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredQueue")
            .field("pending", &self.pending())
            .finish()
    }
}

/// Posts tasks onto the current tokio `LocalSet`
///
/// Deferred tasks run once the task that deferred them yields. Calling
/// [`Scheduler::defer`] outside a `LocalSet` panics, as
/// `tokio::task::spawn_local` does.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTaskScheduler;

impl LocalTaskScheduler {
    /// Create a scheduler for the current `LocalSet`
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for LocalTaskScheduler {
    fn defer(&self, task: Task) {
        tokio::task::spawn_local(async move { task() });
    }
}
