pub mod header;
pub mod link;

pub use header::render_header;
pub use link::render_link;
