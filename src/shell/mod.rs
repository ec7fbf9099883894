// Composition root for the activities service.
//
// Responsibilities
// - Read config from the environment.
// - Build the activity directory from the seed catalog.
// - Wire the directory into use case handlers and the HTTP/GraphQL surfaces.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
