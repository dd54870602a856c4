use crate::weather::Weight;

/// Dense `size x size` matrix stored as a flat vector.
///
/// The value for a pair lives at `from * size + to`.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix {
    values: Vec<Weight>,
    size: usize,
}

impl SquareMatrix {
    pub fn filled(size: usize, value: Weight) -> Self {
        SquareMatrix {
            values: vec![value; size * size],
            size,
        }
    }

    #[inline(always)]
    fn index(&self, from: usize, to: usize) -> usize {
        debug_assert!(from < self.size && to < self.size);
        from * self.size + to
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn get(&self, from: usize, to: usize) -> Weight {
        self.values[self.index(from, to)]
    }

    #[inline(always)]
    pub fn set(&mut self, from: usize, to: usize, value: Weight) {
        let index = self.index(from, to);
        self.values[index] = value;
    }

    pub fn row(&self, from: usize) -> &[Weight] {
        &self.values[from * self.size..(from + 1) * self.size]
    }

    pub(crate) fn row_mut(&mut self, from: usize) -> &mut [Weight] {
        &mut self.values[from * self.size..(from + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Weight]> + '_ {
        // chunks(0) panics; an empty matrix has no values to chunk anyway
        self.values.chunks(self.size.max(1))
    }
}
