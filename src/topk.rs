use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A word together with the number of times it was seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub word: String,
    pub count: usize,
}

impl FrequencyEntry {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl From<(String, usize)> for FrequencyEntry {
    fn from((word, count): (String, usize)) -> Self {
        Self { word, count }
    }
}

// Heap key that compares by count only, so the word never takes part in ordering.
struct ByCount(FrequencyEntry);

impl PartialEq for ByCount {
    fn eq(&self, other: &Self) -> bool {
        self.0.count == other.0.count
    }
}

impl Eq for ByCount {}

impl Ord for ByCount {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.count.cmp(&other.0.count)
    }
}

impl PartialOrd for ByCount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Returns the `k` entries with the largest counts, highest count first.
///
/// Keeps a min-heap of at most `k` entries whose root is the smallest count
/// retained so far; anything not strictly larger than the root is dropped.
/// Runs in `O(n log k)` and never holds more than `k` entries.
///
/// Yields every entry when there are fewer than `k`. The relative order of
/// equal counts is unspecified.
///
/// ```
/// use wordfreq::topk::{top_k, FrequencyEntry};
///
/// let entries = vec![
///     FrequencyEntry::new("the", 5),
///     FrequencyEntry::new("and", 1),
///     FrequencyEntry::new("of", 3),
/// ];
/// let top = top_k(entries, 2);
/// assert_eq!(top[0], FrequencyEntry::new("the", 5));
/// assert_eq!(top[1].count, 3);
/// ```
pub fn top_k<I>(entries: I, k: usize) -> Vec<FrequencyEntry>
where
    I: IntoIterator,
    I::Item: Into<FrequencyEntry>,
{
    if k == 0 {
        return Vec::new();
    }

    let mut entries = entries.into_iter().map(Into::into);
    let capacity = k.min(entries.size_hint().0);
    let mut heap: BinaryHeap<Reverse<ByCount>> = BinaryHeap::with_capacity(capacity);

    for entry in entries.by_ref().take(k) {
        heap.push(Reverse(ByCount(entry)));
    }

    for entry in entries {
        if let Some(mut min) = heap.peek_mut() {
            if entry.count > (min.0).0.count {
                // PeekMut restores the heap property when dropped.
                *min = Reverse(ByCount(entry));
            }
        }
    }

    // Popping yields ascending counts, so fill from the back.
    let mut result = Vec::with_capacity(heap.len());
    while let Some(Reverse(ByCount(entry))) = heap.pop() {
        result.push(entry);
    }
    result.reverse();
    result
}
