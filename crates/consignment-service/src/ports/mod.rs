//! Ports for the consignment service.
//!
//! - Inbound: [`ShippingApi`] - the create operation offered to transports
//! - Outbound: [`ConsignmentRepository`] - the storage capability it depends on

pub mod inbound;
pub mod outbound;

pub use inbound::ShippingApi;
pub use outbound::ConsignmentRepository;
