pub use predicates::{intervals_overlap, set_contains, te_sets_intersect};
pub use record::Insertion;

mod predicates;
mod record;
