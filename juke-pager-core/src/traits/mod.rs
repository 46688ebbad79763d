//! Render target abstraction trait definition

mod container;

pub use container::{Container, ContainerResolver, InMemoryContainer, InMemoryDocument};
