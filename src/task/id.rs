use super::TaskId;

/// Allocator for task ids, owned by the manager.
///
/// Hands out ids 1, 2, 3, ... and keeps a watermark of the highest id it
/// has seen, so ids loaded from a persisted collection are never reissued.
/// The watermark only ever grows.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    last: TaskId,
}

impl IdAllocator {
    /// A fresh allocator; the first allocated id is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next id.
    pub fn allocate(&mut self) -> TaskId {
        self.last += 1;
        self.last
    }

    /// Highest id allocated or observed so far (0 before any).
    pub fn watermark(&self) -> TaskId {
        self.last
    }

    /// Raise the watermark to `id`. Lower values are ignored.
    pub fn bump_to(&mut self, id: TaskId) {
        if id > self.last {
            self.last = id;
        }
    }
}
