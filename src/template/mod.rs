//! Materialization engine for Codecraft
//!
//! This module contains the core processing components:
//! - `operation`: Defines operations to be performed on the filesystem
//! - `processor`: Plans the operations for a structure description
//! - `executor`: Applies planned operations, honouring dry runs

pub mod executor;
pub mod operation;
pub mod processor;

pub use executor::OperationExecutor;
pub use operation::TemplateOperation;
pub use processor::StructureProcessor;
