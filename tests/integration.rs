//! Integration test suite (requires a real Globus ID account).
//!
//! Run all integration tests with:
//!   GLOBUS_NEXUS_USERNAME=... GLOBUS_NEXUS_PASSWORD=... \
//!     cargo test --test integration -- --ignored --nocapture

#[path = "integration/common.rs"]
mod common;
#[path = "integration/goauth.rs"]
mod goauth;
#[path = "integration/groups.rs"]
mod groups;
