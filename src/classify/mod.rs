//! Interchangeable stroke classifiers.

pub mod fold;
pub mod geometric;
pub mod legacy;
pub mod table;

pub use fold::FoldClassifier;
pub use geometric::GeometricClassifier;
pub use legacy::LegacyClassifier;
pub use table::{StrokeTable, TableClassifier};
