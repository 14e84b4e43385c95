pub mod order;
pub mod validation;

pub use order::{
    deterministic_shuffle, leading_year, sort_board_members, sort_teams, title_priority,
    SeededRng, DEFAULT_SHUFFLE_SEED,
};
pub use validation::validate;
