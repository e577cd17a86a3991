use rand::seq::SliceRandom;
use rand::Rng;

/// Draws items from a list in shuffled passes.
///
/// Every item is handed out exactly once per pass; when a pass runs out, the
/// bag is reshuffled for the next one. This spreads picks much more evenly
/// than independent random draws, although an item drawn last in one pass can
/// still come up first in the following one.
///
/// All randomness comes from the caller-supplied [`Rng`], so deterministic
/// tests can pass a seeded generator.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use collide2d::utils::ShuffleBag;
///
/// let mut rng = rand::thread_rng();
/// let mut bag = ShuffleBag::new(vec!["a", "b", "c"], &mut rng).unwrap();
/// for _ in 0..3 {
///     let _ = bag.draw(&mut rng);
/// }
/// // Three draws covered all three items, in some shuffled order.
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ShuffleBag<T> {
    items: Vec<T>,
    // Indices into `items` not yet drawn this pass, drawn from the back.
    order: Vec<usize>,
}

impl<T> ShuffleBag<T> {
    /// Creates a bag holding `items`, with the first pass already shuffled.
    ///
    /// Returns `None` if `items` is empty, since such a bag could never
    /// honor a draw.
    pub fn new<R: Rng>(items: Vec<T>, rng: &mut R) -> Option<Self> {
        if items.is_empty() {
            return None;
        }

        let mut order: Vec<usize> = (0..items.len()).collect();
        order.shuffle(rng);
        Some(ShuffleBag { items, order })
    }

    /// Draws the next item of the current pass, reshuffling a new pass first
    /// if the previous one was exhausted.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> &T {
        if self.order.is_empty() {
            self.order.extend(0..self.items.len());
            self.order.shuffle(rng);
        }

        match self.order.pop() {
            Some(idx) => &self.items[idx],
            // The pass was refilled above and `items` is never empty.
            None => unreachable!(),
        }
    }

    /// The items held by this bag.
    #[inline]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The number of items drawn in one full pass.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// A bag is never empty; this only exists to pair with [`ShuffleBag::len`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
