mod state;

pub use state::GenerationState;
