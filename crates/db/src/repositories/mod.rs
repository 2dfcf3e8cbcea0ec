//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Methods on tenant-owned
//! tables take the tenant id as the second argument and filter on it.

pub mod activity_log_repo;
pub mod aspect_repo;
pub mod audit_repo;
pub mod chemical_repo;
pub mod claim_repo;
pub mod dashboard_repo;
pub mod document_repo;
pub mod goal_repo;
pub mod incident_repo;
pub mod insurance_repo;
pub mod measure_repo;
pub mod meeting_repo;
pub mod reminder_repo;
pub mod risk_repo;
pub mod sds_suggestion_repo;
pub mod session_repo;
pub mod tenant_repo;
pub mod training_repo;
pub mod user_repo;

pub use activity_log_repo::ActivityLogRepo;
pub use aspect_repo::AspectRepo;
pub use audit_repo::AuditRepo;
pub use chemical_repo::ChemicalRepo;
pub use claim_repo::ClaimRepo;
pub use dashboard_repo::DashboardRepo;
pub use document_repo::DocumentRepo;
pub use goal_repo::GoalRepo;
pub use incident_repo::IncidentRepo;
pub use insurance_repo::InsuranceRepo;
pub use measure_repo::MeasureRepo;
pub use meeting_repo::MeetingRepo;
pub use reminder_repo::ReminderRepo;
pub use risk_repo::RiskRepo;
pub use sds_suggestion_repo::SdsSuggestionRepo;
pub use session_repo::SessionRepo;
pub use tenant_repo::TenantRepo;
pub use training_repo::TrainingRepo;
pub use user_repo::UserRepo;
