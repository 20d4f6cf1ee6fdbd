pub mod answer;
pub mod observer;
pub mod setup;
pub mod state;
pub mod summary;
pub mod timer;
