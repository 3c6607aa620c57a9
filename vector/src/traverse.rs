//! Functional traversal shared by [`BitVec`](crate::BitVec) and
//! [`NumVec`](crate::NumVec).

/// Index-ordered, read-only traversal over a vector.
///
/// All provided methods visit `[0, len)` in ascending order, where `len` is the
/// length at the time the traversal starts. They only borrow the vector, so it
/// can't grow while one of them is running.
pub trait Traverse {
    type Item: Copy;

    /// The number of addressable elements.
    fn len(&self) -> usize;

    /// Reads the element at `idx`, which must be less than `self.len()`.
    fn item(&self, idx: usize) -> Self::Item;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calls `f` with each element and its index.
    fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(Self::Item, usize),
    {
        for i in 0..self.len() {
            f(self.item(i), i);
        }
    }

    /// Collects `f` applied to each element. The result has one entry per
    /// element, at the same index.
    fn map<U, F>(&self, mut f: F) -> Vec<U>
    where
        F: FnMut(Self::Item) -> U,
    {
        (0..self.len()).map(|i| f(self.item(i))).collect()
    }

    /// Left fold over the elements, starting from `init`.
    fn reduce<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, Self::Item) -> A,
    {
        (0..self.len()).fold(init, |acc, i| f(acc, self.item(i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Squares(usize);

    impl Traverse for Squares {
        type Item = usize;

        fn len(&self) -> usize {
            self.0
        }

        fn item(&self, idx: usize) -> usize {
            idx * idx
        }
    }

    #[test]
    fn visits_in_order() {
        let mut seen = Vec::new();
        Squares(4).for_each(|v, i| seen.push((i, v)));
        assert_eq!(seen, vec![(0, 0), (1, 1), (2, 4), (3, 9)]);
    }

    #[test]
    fn reduce_is_left_fold() {
        let s = Squares(4).reduce(String::new(), |acc, v| format!("({acc}{v})"));
        assert_eq!(s, "((((0)1)4)9)");
        assert_eq!(Squares(0).reduce(7, |acc, v| acc + v), 7);
    }

    #[test]
    fn map_preserves_length() {
        assert_eq!(Squares(3).map(|v| v + 1), vec![1, 2, 5]);
        assert!(Squares(0).map(|v| v).is_empty());
        assert!(Squares(0).is_empty());
    }
}
