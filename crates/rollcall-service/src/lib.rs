//! # rollcall-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AggregationService, ArchiveService, QuotaService, RegistryService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
