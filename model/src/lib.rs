use rand::Rng;
use serde::Serialize;

/// Number of draws in one batch.
pub const BATCH_SIZE: usize = 500_000;
/// Inclusive upper bound of a single draw.
pub const MAX_DRAW: u32 = 1_000_000;

/// One response worth of uniform draws, kept in draw order.
///
/// Serializes as a bare JSON array so the hosting framework can hand it
/// out as the whole response body.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct NumberBatch(Vec<u32>);

impl NumberBatch {
    /// Draw a full batch from the thread-local generator.
    pub fn draw() -> Self { Self::draw_with(&mut rand::thread_rng()) }

    pub fn draw_with<R: Rng>(rng: &mut R) -> Self {
        let mut numbers = Vec::with_capacity(BATCH_SIZE);
        for _ in 0..BATCH_SIZE {
            numbers.push(rng.gen_range(0..=MAX_DRAW));
        }
        Self(numbers)
    }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn as_slice(&self) -> &[u32] { &self.0 }
}
