//! HTTP request handlers.
//!
//! Controllers extract request data, hand it to the service layer and convert the
//! resulting domain models into DTOs. Every handler is annotated for the OpenAPI
//! document served by the router.

pub mod game;
pub mod genre;

#[cfg(test)]
mod test;
