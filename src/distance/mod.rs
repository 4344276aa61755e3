//! Distance matrix for evaluating tours.
//!
//! The edit engine never looks at distances; search strategies use this to
//! score candidate moves before handing them to the editor.

mod matrix;

pub use matrix::DistanceMatrix;
