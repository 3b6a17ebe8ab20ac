use std::path::Path;

use itertools::chain;
use rand::Rng;

use crate::error::NetResult;
use crate::utils::{into_string_vec, first_duplicate};

quick_error! {
    #[derive(Debug)]
    pub enum DataSetError {
        ZeroColumns {
            description("Zero columns in dataset")
        }
        ZeroColumnsSelected {
            description("Zero columns selected")
        }
        ColumnCountMismatch(count: usize, previous: usize) {
            description("Invalid number of columns, did not match previous columns")
            display("Invalid number of columns {}, previous was {}", count, previous)
        }
        ColumnNotFound(name: String) {
            description("Column with specified name not found")
            display("Column with name {} not found", name)
        }
        DuplicateColumns(name: String) {
            description("Duplicate columns found in file")
            display("Duplicate columns found in file: {}", name)
        }
        DuplicateColumnsSpecified(name: String) {
            description("Duplicate columns specified")
            display("Duplicate columns specified: {}", name)
        }
    }
}

/// Rows of `(input, expected)` pairs stored back to back in one buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedDataSet {
    data: Box<[f64]>,
    num_cols: usize,
    num_rows: usize,
    independent_cols: usize,
    dependent_cols: usize,
}

impl PreparedDataSet {

    pub fn from_csv<T1, I1, T2, I2>(
        path: impl AsRef<Path>,
        independent_cols: T1,
        dependent_cols: T2
    ) -> NetResult<PreparedDataSet>
        where T1: AsRef<[I1]>, I1: ToString,
              T2: AsRef<[I2]>, I2: ToString
    {

        let independent_cols = into_string_vec(independent_cols);
        let dependent_cols = into_string_vec(dependent_cols);

        if independent_cols.is_empty() || dependent_cols.is_empty() {
            return Err(DataSetError::ZeroColumnsSelected.into());
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)?;

        let column_names = reader.headers()?
            .iter()
            .map(str::to_owned)
            .collect::<Vec<String>>();

        let n_cols = column_names.len();

        if n_cols == 0 {
            return Err(DataSetError::ZeroColumns.into());
        }

        if let Some(dupe) = first_duplicate(column_names.iter()) {
            return Err(DataSetError::DuplicateColumns(dupe.clone()).into());
        }

        if let Some(dupe) = first_duplicate(chain(independent_cols.iter(), dependent_cols.iter())) {
            return Err(DataSetError::DuplicateColumnsSpecified(dupe.clone()).into());
        }

        let independent_indices = column_indices(&column_names, &independent_cols)?;
        let dependent_indices = column_indices(&column_names, &dependent_cols)?;

        let mut row_vals = Vec::with_capacity(n_cols);
        let mut num_rows = 0usize;
        let mut data = Vec::new();

        for row in reader.records() {
            row_vals.clear();
            for datum in row?.iter() {
                row_vals.push(datum.parse::<f64>()?);
            }
            if n_cols != row_vals.len() {
                return Err(DataSetError::ColumnCountMismatch(row_vals.len(), n_cols).into());
            }
            for &i in chain(&independent_indices, &dependent_indices) {
                data.push(row_vals[i]);
            }
            num_rows += 1;
        }

        log::debug!("loaded {} rows with {} inputs and {} outputs", num_rows, independent_cols.len(), dependent_cols.len());

        Ok(Self::from_vec(data, independent_cols.len(), dependent_cols.len(), num_rows))

    }

    /// Builds a data set from in-memory `(input, expected)` pairs. Every pair
    /// must have the lengths of the first one.
    pub fn from_pairs<I, A, B>(pairs: I) -> NetResult<PreparedDataSet>
        where I: IntoIterator<Item=(A, B)>,
              A: AsRef<[f64]>,
              B: AsRef<[f64]>
    {
        let mut data = Vec::new();
        let mut shape: Option<(usize, usize)> = None;
        let mut num_rows = 0usize;

        for (input, expected) in pairs {
            let (input, expected) = (input.as_ref(), expected.as_ref());
            let row_shape = (input.len(), expected.len());
            match shape {
                None => {
                    if row_shape.0 == 0 || row_shape.1 == 0 {
                        return Err(DataSetError::ZeroColumnsSelected.into());
                    }
                    shape = Some(row_shape);
                },
                Some(previous) if previous != row_shape => {
                    return Err(DataSetError::ColumnCountMismatch(
                        row_shape.0 + row_shape.1,
                        previous.0 + previous.1
                    ).into());
                },
                Some(_) => (),
            }
            data.extend_from_slice(input);
            data.extend_from_slice(expected);
            num_rows += 1;
        }

        let (independent_cols, dependent_cols) = shape.ok_or(DataSetError::ZeroColumns)?;
        Ok(Self::from_vec(data, independent_cols, dependent_cols, num_rows))
    }

    fn from_vec(data: Vec<f64>, independent_cols: usize, dependent_cols: usize, num_rows: usize) -> Self {
        let num_cols = dependent_cols + independent_cols;
        assert_eq!(data.len(), num_rows * num_cols, "data length mismatch");
        PreparedDataSet {
            data: data.into_boxed_slice(),
            num_cols,
            num_rows,
            independent_cols,
            dependent_cols
        }
    }

    #[inline]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_rows == 0
    }

    #[inline]
    pub fn independent_cols(&self) -> usize {
        self.independent_cols
    }

    #[inline]
    pub fn dependent_cols(&self) -> usize {
        self.dependent_cols
    }

    pub fn iter(&self) -> PreparedDataSetIterator<'_> {
        PreparedDataSetIterator {
            data: &self.data,
            offset: 0,
            end: self.data.len(),
            num_cols: self.num_cols,
            independent_cols: self.independent_cols
        }
    }

    /// Fisher-Yates shuffle of the rows.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for row in (1..self.num_rows).rev() {
            let other = rng.gen_range(0, row + 1);
            if other != row {
                for col in 0..self.num_cols {
                    self.data.swap(row * self.num_cols + col, other * self.num_cols + col);
                }
            }
        }
    }

}

fn column_indices(column_names: &[String], selected: &[String]) -> NetResult<Vec<usize>> {
    let mut indices = Vec::with_capacity(selected.len());
    for col_name in selected {
        match column_names.iter().position(|n| n == col_name) {
            None => return Err(DataSetError::ColumnNotFound(col_name.clone()).into()),
            Some(i) => indices.push(i),
        }
    }
    Ok(indices)
}

pub struct PreparedDataSetIterator<'a> {
    data: &'a [f64],
    offset: usize,
    end: usize,
    num_cols: usize,
    independent_cols: usize,
}

impl<'a> PreparedDataSetIterator<'a> {

    #[inline]
    pub fn has_next(&self) -> bool {
        self.offset != self.end
    }

    pub fn next_unchecked(&mut self) -> (&'a [f64], &'a [f64]) {
        let offset = self.offset;
        let dependent_offset = offset + self.independent_cols;
        let row_end = offset + self.num_cols;
        self.offset = row_end;
        (&self.data[offset..dependent_offset], &self.data[dependent_offset..row_end])
    }

}

impl<'a> Iterator for PreparedDataSetIterator<'a> {
    type Item = (&'a [f64], &'a [f64]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.has_next() {
            Some(self.next_unchecked())
        } else {
            None
        }
    }

}

impl<'a> IntoIterator for &'a PreparedDataSet {
    type Item = (&'a [f64], &'a [f64]);
    type IntoIter = PreparedDataSetIterator<'a>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
