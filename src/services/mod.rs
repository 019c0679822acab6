//! Service layer for the relay.
//!
//! Services hold the request pipeline so the HTTP layer only translates
//! results into status codes.

mod relay_service;

pub use relay_service::ContactRelayService;
