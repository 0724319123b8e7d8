/// Guillotine decomposability of solved boards
pub mod decompose;

pub use decompose::undecomposable;
