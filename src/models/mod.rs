pub mod plan;

pub use plan::{PlanDocument, PlanListing, StoredPlan};
