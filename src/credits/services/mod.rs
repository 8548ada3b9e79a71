pub mod selection;

pub use selection::{select_credits, SelectionOutcome};
