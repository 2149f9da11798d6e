//! Pipeline module - the preparation stages

pub mod categorical;
pub mod error;
pub mod leakage;
pub mod loader;
pub mod numeric;
pub mod prepare;
pub mod router;
pub mod split;
pub mod target;

pub use categorical::{CategoricalTransformer, CategoryVocab};
pub use error::PrepError;
pub use leakage::{drop_leakage_columns, DropSpec};
pub use loader::{csv_column_names, load_csv};
pub use numeric::{NumericStats, NumericTransformer};
pub use prepare::{prepare_dataset, PrepConfig, PreparedData};
pub use router::{classify_columns, ColumnRoles};
pub use split::{stratified_split, SplitIndices};
pub use target::{derive_binary_target, TargetCutoff};
