/// Number of k-element subsets of an n-element set.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// Iterator over all C(n, k) combinations of indices `0..n`.
///
/// Combinations are produced lazily in lexicographic order, which is the
/// order an include-first recursive construction visits them in. Each
/// subset is produced exactly once.
pub struct Combinations {
    n: usize,
    k: usize,
    indices: Vec<usize>,
    remaining: usize,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self { n, k, indices: (0..k).collect(), remaining: binomial(n, k) }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let result = self.indices.clone();
        self.remaining -= 1;
        if self.remaining == 0 {
            return Some(result);
        }

        // Find the rightmost index that can be incremented
        let mut i = self.k - 1;
        while self.indices[i] >= self.n - (self.k - i) {
            i -= 1;
        }
        self.indices[i] += 1;

        // Reset all indices to the right
        for j in (i + 1)..self.k {
            self.indices[j] = self.indices[j - 1] + 1;
        }

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Combinations {}
