// batcher.rs - keeps each request under the server's batch limit

pub struct Batcher {
    pub batch_size: usize,
}

impl Batcher {
    pub fn new(batch_size: usize) -> Self {
        Self { batch_size }
    }

    /// Split items into consecutive batches, preserving order.
    ///
    /// A zero batch size is treated as one item per batch.
    pub fn split<'a, T>(&self, items: &'a [T]) -> Vec<&'a [T]> {
        items.chunks(self.batch_size.max(1)).collect()
    }

    /// Number of requests needed for `len` items
    pub fn batch_count(&self, len: usize) -> usize {
        len.div_ceil(self.batch_size.max(1))
    }
}
