//! Upload join barrier
//!
//! Files picked in one gesture are read concurrently. The batch collects the
//! results and reports `Ready` exactly once, when the last read settles, so the
//! board is written a single time with every file present.

use crate::models::ProjectFile;

/// Outcome of settling one slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchProgress {
    /// Reads still outstanding
    Pending(usize),
    /// Every read settled; successful files in upload order
    Ready(Vec<ProjectFile>),
}

#[derive(Debug)]
pub struct UploadBatch {
    project_id: u32,
    slots: Vec<Slot>,
    pending: usize,
}

#[derive(Debug)]
enum Slot {
    Waiting,
    Done(ProjectFile),
    Failed,
}

impl UploadBatch {
    pub fn new(project_id: u32, count: usize) -> Self {
        Self {
            project_id,
            slots: (0..count).map(|_| Slot::Waiting).collect(),
            pending: count,
        }
    }

    pub fn project_id(&self) -> u32 {
        self.project_id
    }

    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Record a finished read for slot `index`
    pub fn complete(&mut self, index: usize, file: ProjectFile) -> BatchProgress {
        self.settle(index, Slot::Done(file))
    }

    /// Record a failed read; the file is left out, the rest still lands
    pub fn fail(&mut self, index: usize) -> BatchProgress {
        self.settle(index, Slot::Failed)
    }

    fn settle(&mut self, index: usize, outcome: Slot) -> BatchProgress {
        match self.slots.get_mut(index) {
            Some(slot) if matches!(slot, Slot::Waiting) => {
                *slot = outcome;
                self.pending -= 1;
            }
            // Out of range or settled twice: no effect on the count
            _ => {
                log::warn!(
                    "[UPLOAD] Ignoring repeated or unknown slot {} for project {}",
                    index,
                    self.project_id
                );
                return BatchProgress::Pending(self.pending);
            }
        }

        if self.pending > 0 {
            return BatchProgress::Pending(self.pending);
        }

        let files = std::mem::take(&mut self.slots)
            .into_iter()
            .filter_map(|slot| match slot {
                Slot::Done(file) => Some(file),
                _ => None,
            })
            .collect();
        BatchProgress::Ready(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> ProjectFile {
        ProjectFile::new(name, "data:text/plain;base64,aGk=")
    }

    #[test]
    fn test_ready_only_after_last_read() {
        let mut batch = UploadBatch::new(2, 3);
        assert_eq!(batch.complete(1, file("b")), BatchProgress::Pending(2));
        assert_eq!(batch.complete(2, file("c")), BatchProgress::Pending(1));

        let ready = batch.complete(0, file("a"));
        assert_eq!(ready, BatchProgress::Ready(vec![file("a"), file("b"), file("c")]));
        assert_eq!(batch.pending(), 0);
    }

    #[test]
    fn test_failed_read_does_not_block() {
        let mut batch = UploadBatch::new(1, 2);
        assert_eq!(batch.fail(0), BatchProgress::Pending(1));
        assert_eq!(batch.complete(1, file("b")), BatchProgress::Ready(vec![file("b")]));
    }

    #[test]
    fn test_repeated_slot_ignored() {
        let mut batch = UploadBatch::new(1, 2);
        batch.complete(0, file("a"));
        assert_eq!(batch.complete(0, file("again")), BatchProgress::Pending(1));
        assert_eq!(batch.fail(9), BatchProgress::Pending(1));
        assert_eq!(
            batch.complete(1, file("b")),
            BatchProgress::Ready(vec![file("a"), file("b")])
        );
    }

    #[test]
    fn test_empty_batch() {
        let batch = UploadBatch::new(4, 0);
        assert_eq!(batch.pending(), 0);
        assert_eq!(batch.project_id(), 4);
    }
}
