//! End-to-end tests: both pools on real sockets, driven over HTTP.

mod common;
mod failover;
mod version;
