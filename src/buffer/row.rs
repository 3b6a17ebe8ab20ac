use std::fmt;

/// One contiguous allocation carved into rows of independent sizes.
#[derive(Clone, PartialEq)]
pub struct RowBuffer {
    buffer: Box<[f64]>,
    row_offsets_and_sizes: Box<[(usize, usize)]>,
}

impl fmt::Debug for RowBuffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let mut s = &mut f.debug_struct("RowBuffer");
        if self.buffer.len() < 30 {
            s = s.field("buffer", &self.buffer);
        } else {
            s = s.field("buffer_len", &self.buffer.len());
        }
        s.field("row_offsets_and_sizes", &self.row_offsets_and_sizes)
            .finish()
    }
}

impl RowBuffer {

    pub fn new_with_row_sizes(initial_value: f64, row_sizes: impl AsRef<[usize]>) -> Self {
        let row_sizes = row_sizes.as_ref();
        assert!(row_sizes.len() > 0);
        let total_size: usize = row_sizes.iter().sum();
        let mut row_offsets_and_sizes: Vec<(usize, usize)> = Vec::with_capacity(row_sizes.len());
        let mut offset: usize = 0;
        for &size in row_sizes {
            row_offsets_and_sizes.push((offset, size));
            offset += size;
        }
        RowBuffer {
            buffer: vec![initial_value; total_size].into_boxed_slice(),
            row_offsets_and_sizes: row_offsets_and_sizes.into_boxed_slice()
        }
    }

    #[inline]
    pub fn get_row(&self, row: usize) -> &[f64] {
        let (offset, size) = self.row_offsets_and_sizes[row];
        &self.buffer[offset..offset + size]
    }

    #[inline]
    pub fn get_row_mut(&mut self, row: usize) -> &mut [f64] {
        let (offset, size) = self.row_offsets_and_sizes[row];
        &mut self.buffer[offset..offset + size]
    }

    /// Borrows two distinct rows mutably at once, in argument order.
    pub fn split_rows(&mut self, row_first: usize, row_second: usize) -> (&mut [f64], &mut [f64]) {
        assert_ne!(row_first, row_second);
        let (offset_first, size_first) = self.row_offsets_and_sizes[row_first];
        let (offset_second, size_second) = self.row_offsets_and_sizes[row_second];
        if offset_first < offset_second {
            let (left, right) = self.buffer.split_at_mut(offset_second);
            (&mut left[offset_first..offset_first + size_first], &mut right[..size_second])
        } else {
            let (left, right) = self.buffer.split_at_mut(offset_first);
            (&mut right[..size_first], &mut left[offset_second..offset_second + size_second])
        }
    }

    #[inline]
    pub fn get_last_row_mut(&mut self) -> &mut [f64] {
        let last = self.row_offsets_and_sizes.len() - 1;
        self.get_row_mut(last)
    }

}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_row_sizes_types() {
        RowBuffer::new_with_row_sizes(0.0, vec![1, 2, 3]);
        RowBuffer::new_with_row_sizes(0.0, &vec![1, 2, 3]);
        RowBuffer::new_with_row_sizes(0.0, [1, 2, 3]);
        RowBuffer::new_with_row_sizes(0.0, &[1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "assertion failed: row_sizes.len() > 0")]
    fn test_empty_not_allowed() {
        RowBuffer::new_with_row_sizes(0.0, Vec::new());
    }

    #[test]
    fn test_basics() {

        let mut buf = RowBuffer::new_with_row_sizes(0.0, vec![1, 0, 10, 2]);

        // check for correct structure
        assert_eq!(1, buf.get_row(0).len());
        assert_eq!(0, buf.get_row(1).len());
        assert_eq!(10, buf.get_row_mut(2).len());
        assert_eq!(2, buf.get_row(3).len());
        assert_eq!(2, buf.get_last_row_mut().len());

        // populate data
        for i in 0..4 {
            let row = buf.get_row_mut(i);
            for j in 0..row.len() {
                row[j] = (i * 10 + j) as f64;
            }
        }

        for i in 0..4 {
            let row = buf.get_row(i);
            for j in 0..row.len() {
                assert_eq!(row[j], (i * 10 + j) as f64);
            }
        }
        assert_eq!(buf.get_row(3), &[30., 31.]);
    }

    #[test]
    fn test_split_rows() {
        let mut buf = RowBuffer::new_with_row_sizes(0.0, vec![3, 2, 4]);
        let mut value = 0.0;
        for i in 0..3 {
            for slot in buf.get_row_mut(i).iter_mut() {
                *slot = value;
                value += 1.0;
            }
        }
        {
            let (first, second) = buf.split_rows(0, 2);
            assert_eq!(first, &[0., 1., 2.]);
            assert_eq!(second, &[5., 6., 7., 8.]);
            second[0] = -1.0;
        }
        {
            let (first, second) = buf.split_rows(2, 1);
            assert_eq!(first, &[-1., 6., 7., 8.]);
            assert_eq!(second, &[3., 4.]);
            first[3] += second[1];
        }
        assert_eq!(buf.get_row(2), &[-1., 6., 7., 12.]);
        assert_eq!(buf.get_row(1), &[3., 4.]);
    }

}
