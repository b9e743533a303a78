//! Game orchestration: the shared table, the game itself and its builder.

mod builder;
mod snapshot;
mod state;
mod table;

pub use builder::GameBuilder;
pub use snapshot::GameSnapshot;
pub use state::Game;
pub use table::Table;
