//! Stratified train/test splitting
//!
//! Partitions row indices so each side preserves the overall class balance.
//! Rows are shuffled per class with a seeded RNG, so the same seed always
//! produces the same partition.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::BTreeMap;

use super::error::PrepError;

/// Disjoint row partitions produced by [`stratified_split`].
///
/// Indices are ascending within each side, so taking them from a frame keeps
/// the original row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitIndices {
    pub train: Vec<u32>,
    pub test: Vec<u32>,
}

/// Split row indices into train and test sets, stratified by label.
///
/// Each class contributes `round(class_size * test_size)` rows to the test
/// side, clamped so both sides keep at least one row of every class.
///
/// # Errors
/// - [`PrepError::InvalidTestSize`] if `test_size` is not in (0, 1)
/// - [`PrepError::SingleClass`] if fewer than 2 distinct labels are present
/// - [`PrepError::ClassTooSmall`] if any class has fewer than 2 rows
pub fn stratified_split(
    labels: &[i32],
    test_size: f64,
    seed: u64,
) -> Result<SplitIndices, PrepError> {
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(PrepError::InvalidTestSize(test_size));
    }

    let mut classes: BTreeMap<i32, Vec<u32>> = BTreeMap::new();
    for (row, &label) in labels.iter().enumerate() {
        classes.entry(label).or_default().push(row as u32);
    }

    if classes.len() < 2 {
        return Err(PrepError::SingleClass(classes.len()));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut train = Vec::new();
    let mut test = Vec::new();

    // BTreeMap ordering keeps the per-class shuffle sequence stable
    for (&label, rows) in &classes {
        let count = rows.len();
        if count < 2 {
            return Err(PrepError::ClassTooSmall { label, count });
        }

        let mut rows = rows.clone();
        rows.shuffle(&mut rng);

        let n_test = ((count as f64 * test_size).round() as usize).clamp(1, count - 1);
        test.extend_from_slice(&rows[..n_test]);
        train.extend_from_slice(&rows[n_test..]);
    }

    train.sort_unstable();
    test.sort_unstable();

    Ok(SplitIndices { train, test })
}
