pub mod human;
pub mod random;
pub mod registry;

pub use human::HumanScorer;
pub use random::RandomScorer;
pub use registry::create_scorer_from_spec;
