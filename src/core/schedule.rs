#[derive(Clone, Debug)]
struct Scheduled<T> {
    due_ms: f64,
    task: T,
}

/// Deadline-ordered queue of deferred work, driven by an external clock.
///
/// Stands in for `setTimeout` so that timers are owned by the view that
/// created them and disappear with it.
#[derive(Clone, Debug)]
pub struct TaskQueue<T> {
    pending: Vec<Scheduled<T>>,
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<T> TaskQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_ms: f64, task: T) {
        // keep sorted by deadline; ties run in scheduling order
        let at = self.pending.partition_point(|s| s.due_ms <= due_ms);
        self.pending.insert(at, Scheduled { due_ms, task });
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Pop the earliest task due at or before `now_ms` with its deadline.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<(f64, T)> {
        if self.pending.first()?.due_ms > now_ms {
            return None;
        }
        let s = self.pending.remove(0);
        Some((s.due_ms, s.task))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
