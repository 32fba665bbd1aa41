pub mod app;
pub mod landing;
pub mod planner;
pub mod trip_summary;
pub mod eld_log;
pub mod not_found;
pub mod shared;

pub use app::render_app;
pub use landing::render_landing;
pub use planner::render_planner;
pub use trip_summary::render_trip_summary;
pub use eld_log::render_eld_log;
pub use not_found::render_not_found;
