//! Adapters: caching decorators over the upstream ports and the inbound
//! HTTP surface.

pub mod cache;
pub mod http;
