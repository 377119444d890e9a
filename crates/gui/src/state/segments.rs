//! Ordered collection of committed segments

use shared::Segment;

/// Ошибки коллекции отрезков
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    /// Индекс за пределами коллекции
    IndexOutOfRange { index: usize, len: usize },
}

impl std::fmt::Display for SegmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SegmentError::IndexOutOfRange { index, len } => {
                write!(f, "Segment index {} out of range (len {})", index, len)
            }
        }
    }
}

impl std::error::Error for SegmentError {}

/// Committed segments in insertion order.
///
/// Insertion order is both the draw order and the pairwise scan order.
/// Removal shifts later entries down, so the order survives removals.
#[derive(Debug, Clone, Default)]
pub struct SegmentCollection {
    segments: Vec<Segment>,
    /// Monotonically increasing version counter, bumped on every mutation
    version: u64,
}

impl SegmentCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment and return its index
    pub fn append(&mut self, segment: Segment) -> usize {
        self.segments.push(segment);
        self.version += 1;
        self.segments.len() - 1
    }

    /// Remove the segment at `index`, keeping the order of the rest
    pub fn remove_at(&mut self, index: usize) -> Result<Segment, SegmentError> {
        if index >= self.segments.len() {
            return Err(SegmentError::IndexOutOfRange {
                index,
                len: self.segments.len(),
            });
        }
        self.version += 1;
        Ok(self.segments.remove(index))
    }

    pub fn clear(&mut self) {
        if !self.segments.is_empty() {
            self.version += 1;
        }
        self.segments.clear();
    }

    pub fn all(&self) -> &[Segment] {
        &self.segments
    }

    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Mutable access for in-place updates (collapse animation)
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Segment> {
        let segment = self.segments.get_mut(index)?;
        self.version += 1;
        Some(segment)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}
