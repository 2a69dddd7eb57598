//! # Consignment Service Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs          # Server spawning and payload builders
//! └── integration/
//!     ├── grpc_flows.rs    # Client → server → registry round trips
//!     └── concurrency.rs   # Many concurrent callers against one registry
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p consignment-tests
//!
//! # Benchmarks
//! cargo bench -p consignment-tests
//! ```

pub mod fixtures;
