mod state;

pub use state::FileSeedRepository;
