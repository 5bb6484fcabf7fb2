/// Paths and headers of the remote user API.
pub mod routes;
