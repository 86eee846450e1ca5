#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog_service;
pub mod completion_service;
pub mod config;
pub mod enrollment_service;
pub mod error;
pub mod session_service;
pub mod store;

pub use app_services::{Dashboard, SeedData};
pub use catalog_service::CourseCatalog;
pub use completion_service::{CompletionEngine, ReferencePolicy, ToggleOutcome, resolve_course};
pub use config::DashboardConfig;
pub use enrollment_service::{CoursePartition, EnrollmentRegistry};
pub use error::{CompletionError, DashboardError};
pub use session_service::SessionController;
pub use store::DurableStore;
