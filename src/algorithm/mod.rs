/// Square recovery from labeled boards
pub mod reconstruct;
/// First-solution backtracking search
pub mod search;
/// Ordered sets of allowed square sizes
pub mod sizes;
/// Symmetry-exploiting sweep over board dimensions
pub mod sweep;
/// Posterior validation of witness tilings
pub mod verify;

pub use search::{SearchOutcome, search};
pub use sizes::SizeSet;
pub use sweep::Sweep;
pub use verify::{verify, verify_all};
