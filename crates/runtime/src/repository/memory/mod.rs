mod state;

pub use state::InMemorySeedRepo;
