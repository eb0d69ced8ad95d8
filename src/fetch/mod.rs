pub mod mediator;

pub use mediator::{MediaItem, MediatorClient};
