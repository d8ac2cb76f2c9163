//! Work queue and thread pool for per-pixel render jobs.
//!
//! A fixed pool of OS threads pulls zero-argument jobs from one shared
//! FIFO queue. Shutdown is signalled by a sentinel entry: a worker that
//! pops it re-pushes it before exiting, so one sentinel cascades through
//! every worker one at a time.

use log::error;
use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};

type Job = Box<dyn FnOnce() + Send + 'static>;

/// A queue entry: either a job to run or the shutdown sentinel.
type Entry = Option<Job>;

/// FIFO queue of jobs shared between the submitting thread and workers.
///
/// `pop` blocks on a condvar while the queue is empty rather than
/// spinning; FIFO order is preserved.
pub struct WorkQueue {
    entries: Mutex<VecDeque<Entry>>,
    available: Condvar,
}

impl WorkQueue {
    /// Create a new empty queue.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(VecDeque::new()),
            available: Condvar::new(),
        }
    }

    /// Push a job onto the back of the queue.
    pub fn push(&self, job: Job) {
        self.push_entry(Some(job));
    }

    /// Push the shutdown sentinel onto the back of the queue.
    ///
    /// Queued after all real jobs, it reaches workers only once the queue
    /// has drained.
    pub fn push_sentinel(&self) {
        self.push_entry(None);
    }

    fn push_entry(&self, entry: Entry) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.push_back(entry);
        self.available.notify_one();
    }

    /// Pop the front entry, blocking while the queue is empty.
    ///
    /// Returns `None` for the shutdown sentinel.
    pub fn pop(&self) -> Entry {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        loop {
            match entries.pop_front() {
                Some(entry) => return entry,
                None => {
                    entries = self
                        .available
                        .wait(entries)
                        .unwrap_or_else(|e| e.into_inner());
                }
            }
        }
    }

    /// Number of queued entries, including a pending sentinel.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Check if the queue is currently empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for WorkQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-size pool of worker threads draining a shared `WorkQueue`.
///
/// Dropping the pool pushes one sentinel and joins every worker; since
/// each exiting worker re-pushes the sentinel, shutdown latency scales
/// with the worker count.
pub struct ThreadPool {
    workers: Vec<JoinHandle<()>>,
    queue: Arc<WorkQueue>,
}

impl ThreadPool {
    /// Spawn a pool with `num_threads` workers.
    pub fn new(num_threads: usize) -> Self {
        let queue = Arc::new(WorkQueue::new());
        let workers = (0..num_threads)
            .map(|_| {
                let queue = Arc::clone(&queue);
                thread::spawn(move || loop {
                    match queue.pop() {
                        Some(job) => job(),
                        None => {
                            // Pass the sentinel on to the next worker.
                            queue.push_sentinel();
                            break;
                        }
                    }
                })
            })
            .collect();

        Self { workers, queue }
    }

    /// Queue a job for execution. Once queued, a job always runs to
    /// completion; there is no cancellation.
    pub fn queue<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.queue.push(Box::new(job));
    }

    /// Number of worker threads.
    pub fn num_threads(&self) -> usize {
        self.workers.len()
    }

    /// Push the shutdown sentinel and join every worker once the queue
    /// drains.
    ///
    /// Returns the number of workers that exited by panicking. A worker
    /// dies with the job that panicked it, so a non-zero count means some
    /// queued jobs never ran.
    pub fn join(mut self) -> usize {
        self.shutdown()
    }

    fn shutdown(&mut self) -> usize {
        if self.workers.is_empty() {
            return 0;
        }
        self.queue.push_sentinel();
        self.workers
            .drain(..)
            .map(JoinHandle::join)
            .filter(Result::is_err)
            .count()
    }
}

impl Drop for ThreadPool {
    fn drop(&mut self) {
        let panicked = self.shutdown();
        if panicked > 0 {
            // Drop cannot report this to a caller; `join` can.
            error!("{panicked} pool worker(s) panicked before shutdown");
        }
    }
}
