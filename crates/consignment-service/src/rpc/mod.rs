//! gRPC surface for `consignment.ShippingService`.
//!
//! Generated types live in [`proto`]; [`ShippingHandler`] is the adapter that
//! plugs the registry into the generated server trait.

pub mod handler;

pub use handler::ShippingHandler;

/// Types and stubs generated from `proto/consignment.proto`.
pub mod proto {
    tonic::include_proto!("consignment");
}

/// Encoded descriptor set used to serve reflection.
pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("consignment_descriptor");

/// Fully qualified gRPC service name.
pub const SERVICE_NAME: &str = "consignment.ShippingService";
