use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use std::cell::Cell;
use std::marker::PhantomData;

use crate::selector::IndexSelector;

/// A first-in, random-out queue.
///
/// Elements go in at the back of a contiguous store; `dequeue` removes a
/// uniformly random element with the swap-and-pop idiom, so insertion
/// order is not preserved or meaningful. `sample` picks a uniformly
/// random element without removing it, and every traversal walks the
/// elements in a freshly generated independent random permutation.
///
/// # Examples
///
/// ```
/// use firoq::RandomizedQueue;
///
/// let mut queue = RandomizedQueue::new();
/// queue.enqueue("a");
/// queue.enqueue("b");
/// queue.enqueue("c");
/// assert_eq!(queue.len(), 3);
///
/// let taken = queue.dequeue().unwrap();
/// assert!(["a", "b", "c"].contains(&taken));
/// assert_eq!(queue.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RandomizedQueue<T> {
    data: Vec<T>,
    selector: IndexSelector,
    seed: u64,
    traversals: Cell<u64>,
}

impl<T> RandomizedQueue<T> {
    /// Creates an empty queue with its generator seeded from entropy.
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Creates an empty queue with a deterministic generator.
    ///
    /// Two queues built from the same seed and driven through the same
    /// sequence of calls make identical random choices, which keeps
    /// randomized behavior reproducible in tests.
    pub fn with_seed(seed: u64) -> Self {
        RandomizedQueue {
            data: Vec::new(),
            selector: IndexSelector::new(seed),
            seed,
            traversals: Cell::new(0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Appends `item` to the backing store. Amortized O(1).
    pub fn enqueue(&mut self, item: T) {
        self.data.push(item);
        self.selector.refresh(self.data.len());
    }

    /// Removes and returns a uniformly random element, or `None` if the
    /// queue is empty. Amortized O(1).
    pub fn dequeue(&mut self) -> Option<T> {
        let index = self.selector.draw()?;
        let last = self.data.len() - 1;
        self.data.swap(index, last);
        let item = self.data.pop();
        self.selector.refresh(self.data.len());
        item
    }

    /// Returns a reference to a uniformly random element without removing
    /// it, or `None` if the queue is empty.
    ///
    /// The store is untouched; the receiver is `&mut` only because each
    /// call advances the shared generator.
    pub fn sample(&mut self) -> Option<&T> {
        let index = self.selector.draw()?;
        self.data.get(index)
    }

    /// Returns an iterator over the elements in a fresh uniformly random
    /// order. Each call produces an independent permutation, so two
    /// successive traversals generally differ.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            data: &self.data,
            order: self.permutation(),
            cursor: 0,
        }
    }

    /// Like [`iter`](Self::iter), but yields mutable references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            order: self.permutation(),
            ptr: self.data.as_mut_ptr(),
            cursor: 0,
            marker: PhantomData,
        }
    }

    // Fisher-Yates shuffle of the current index range, driven by a
    // per-traversal generator derived from the instance seed
    fn permutation(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.data.len()).collect();
        let mut rng = self.traversal_rng();
        order.shuffle(&mut rng);
        order
    }

    // Each traversal gets its own stream; seed_from_u64 mixes the raw
    // value, so consecutive sub-seeds give unrelated sequences
    fn traversal_rng(&self) -> Pcg64Mcg {
        let count = self.traversals.get();
        self.traversals.set(count.wrapping_add(1));
        Pcg64Mcg::seed_from_u64(self.seed.wrapping_add(count).wrapping_add(1))
    }
}

impl<T> Default for RandomizedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for RandomizedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for RandomizedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
        self.selector.refresh(self.data.len());
    }
}

/// Immutable random-permutation traversal over a queue.
#[derive(Debug)]
pub struct Iter<'a, T> {
    data: &'a [T],
    order: Vec<usize>,
    cursor: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let index = *self.order.get(self.cursor)?;
        self.cursor += 1;
        Some(&self.data[index])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.order.len() - self.cursor;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> std::iter::FusedIterator for Iter<'_, T> {}

/// Mutable random-permutation traversal over a queue.
///
/// All yielded references derive from one base pointer captured at
/// construction, so callers may hold them simultaneously.
#[derive(Debug)]
pub struct IterMut<'a, T> {
    ptr: *mut T,
    order: Vec<usize>,
    cursor: usize,
    marker: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let index = *self.order.get(self.cursor)?;
        self.cursor += 1;
        // Safety: `ptr` carries provenance over the whole store for 'a
        // (the queue stays exclusively borrowed that long), `order` is a
        // permutation of distinct in-bounds indexes, and the cursor only
        // moves forward, so no element is handed out twice and no yielded
        // reference aliases or invalidates another.
        unsafe { Some(&mut *self.ptr.add(index)) }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.order.len() - self.cursor;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> std::iter::FusedIterator for IterMut<'_, T> {}

/// Owning traversal that drains the queue in uniformly random order.
#[derive(Debug)]
pub struct IntoIter<T> {
    data: Vec<T>,
    rng: Pcg64Mcg,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let index = self.rng.gen_range(0..self.data.len());
        Some(self.data.swap_remove(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.data.len(), Some(self.data.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> std::iter::FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for RandomizedQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let rng = self.traversal_rng();
        IntoIter {
            data: self.data,
            rng,
        }
    }
}

impl<'a, T> IntoIterator for &'a RandomizedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RandomizedQueue<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
