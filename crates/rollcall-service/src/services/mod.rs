//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod aggregation;
pub mod archive;
pub mod context;
pub mod error;
pub mod quota;
pub mod registry;

// Re-export all services for convenience
pub use aggregation::AggregationService;
pub use archive::ArchiveService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use quota::QuotaService;
pub use registry::RegistryService;
