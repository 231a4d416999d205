pub mod state;
pub mod sweeper;

pub use state::build_state;
pub use sweeper::spawn_session_sweeper;
