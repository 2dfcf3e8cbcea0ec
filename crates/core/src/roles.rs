//! Well-known role name constants.
//!
//! These must match the CHECK constraint on `users.role` in the initial
//! migration and the seed data used by integration tests.

/// Tenant administrator: full access, including user management.
pub const ROLE_ADMIN: &str = "admin";

/// HSE manager: may create and mutate compliance records.
pub const ROLE_HSE_MANAGER: &str = "hse_manager";

/// Regular employee: read access plus own-profile updates.
pub const ROLE_EMPLOYEE: &str = "employee";
