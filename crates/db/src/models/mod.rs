//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod activity;
pub mod aspect;
pub mod audit;
pub mod chemical;
pub mod claim;
pub mod dashboard;
pub mod document;
pub mod goal;
pub mod incident;
pub mod insurance;
pub mod measure;
pub mod meeting;
pub mod reminder;
pub mod risk;
pub mod sds_suggestion;
pub mod session;
pub mod tenant;
pub mod training;
pub mod user;
