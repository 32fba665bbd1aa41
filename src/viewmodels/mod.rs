pub mod trip_map_viewmodel;
pub mod trip_summary_viewmodel;
pub mod eld_viewmodel;
pub mod planner_viewmodel;

pub use trip_map_viewmodel::TripMapViewModel;
pub use trip_summary_viewmodel::TripSummaryViewModel;
pub use eld_viewmodel::EldViewModel;
pub use planner_viewmodel::{PlannerViewModel, PlannerForm, PlannerField, PlannerError};
