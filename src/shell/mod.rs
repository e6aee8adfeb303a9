// Composition root for the feedback wall.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the flat file persistence and the entry store.
// - Wire the store into the use case handlers and mount the HTTP and GraphQL surfaces.

pub mod admin;
pub mod config;
pub mod graphql;
pub mod http;
pub mod problem;
pub mod state;
