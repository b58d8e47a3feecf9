use std::fmt::Debug;
use std::ops::Deref;

/// A bijection on `0..n`, stored as the list of images.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    /// Accept `values` only if every index in `0..values.len()` appears exactly once.
    pub fn new(values: impl IntoIterator<Item = usize>) -> Option<Self> {
        let vec: Vec<usize> = values.into_iter().collect();

        let n = vec.len();
        let mut seen = vec![false; n];

        for &value in &vec {
            if value >= n || seen[value] {
                return None;
            }
            seen[value] = true;
        }

        Some(Self(vec))
    }

    pub fn identity(size: usize) -> Self {
        Self((0..size).collect())
    }

    pub fn inverse(&self) -> Self {
        let mut inverse = vec![0; self.0.len()];
        for (i, &image) in self.0.iter().enumerate() {
            inverse[image] = i;
        }
        Self(inverse)
    }
}

impl Deref for Permutation {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}
