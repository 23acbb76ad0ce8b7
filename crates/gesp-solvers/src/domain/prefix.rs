//! Prefix-sum tables for O(1) range aggregation
//!
//! Both tables are 1-indexed with a zero-filled border at index 0, so
//! queries never special-case the lower boundary. Invariant for the grid:
//! `table[i][j]` holds the sum of all cells with row <= i and column <= j.

/// 1-D cumulative sums over a sequence.
#[derive(Clone, Debug)]
pub struct PrefixSums {
    sums: Vec<i64>,
}

impl PrefixSums {
    /// Build the table in O(n).
    pub fn build(values: &[i64]) -> Self {
        let mut sums = Vec::with_capacity(values.len() + 1);
        sums.push(0);
        for (i, &v) in values.iter().enumerate() {
            sums.push(sums[i] + v);
        }
        Self { sums }
    }

    /// Number of underlying elements.
    pub fn len(&self) -> usize {
        self.sums.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of elements `l..=r`, 1-indexed inclusive.
    ///
    /// An inverted range (`l > r`) is the empty sum.
    ///
    /// # Panics
    ///
    /// Panics if `r` exceeds the sequence length or `l` is 0.
    pub fn range(&self, l: usize, r: usize) -> i64 {
        if l > r {
            return 0;
        }
        assert!(l >= 1, "prefix queries are 1-indexed");
        self.sums[r] - self.sums[l - 1]
    }

    /// Sum of the first `r` elements (`1..=r`).
    pub fn prefix(&self, r: usize) -> i64 {
        self.sums[r]
    }
}

/// 2-D prefix-sum grid with inclusion–exclusion range queries.
#[derive(Clone, Debug)]
pub struct PrefixGrid {
    rows: usize,
    cols: usize,
    table: Vec<i64>,
}

impl PrefixGrid {
    /// Build from row-major cell values. Every row must have equal length.
    pub fn build(cells: &[Vec<i64>]) -> Self {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);
        let width = cols + 1;

        let mut table = vec![0i64; (rows + 1) * width];
        for (i, row) in cells.iter().enumerate() {
            assert_eq!(row.len(), cols, "ragged grid");
            for (j, &v) in row.iter().enumerate() {
                let (r, c) = (i + 1, j + 1);
                table[r * width + c] =
                    table[(r - 1) * width + c] + table[r * width + c - 1]
                        - table[(r - 1) * width + c - 1]
                        + v;
            }
        }

        Self { rows, cols, table }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Sum over the rectangle `(r1, c1)..=(r2, c2)`, 1-indexed inclusive.
    ///
    /// An inverted rectangle is the empty sum.
    ///
    /// # Panics
    ///
    /// Panics if the rectangle exceeds grid bounds or a coordinate is 0.
    pub fn query(&self, r1: usize, c1: usize, r2: usize, c2: usize) -> i64 {
        if r1 > r2 || c1 > c2 {
            return 0;
        }
        assert!(r1 >= 1 && c1 >= 1, "grid queries are 1-indexed");
        assert!(r2 <= self.rows && c2 <= self.cols, "query out of bounds");

        let w = self.cols + 1;
        self.table[r2 * w + c2] - self.table[(r1 - 1) * w + c2] - self.table[r2 * w + c1 - 1]
            + self.table[(r1 - 1) * w + c1 - 1]
    }

    /// Sum over the whole grid.
    pub fn total(&self) -> i64 {
        if self.rows == 0 || self.cols == 0 {
            0
        } else {
            self.query(1, 1, self.rows, self.cols)
        }
    }
}
