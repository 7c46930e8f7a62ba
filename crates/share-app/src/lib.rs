//! Share normalization orchestration layer
//!
//! This crate contains the use cases that turn an inbound share event into a
//! normalized record by driving the [`ResourceResolverPort`].
//!
//! [`ResourceResolverPort`]: share_core::ports::ResourceResolverPort

pub mod usecases;

pub use usecases::share::{LoadShareItemDataUseCase, NormalizeShareEventUseCase};
