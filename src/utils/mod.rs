// Utils compartidos

pub mod constants;
pub mod leaflet_ffi;
pub mod i18n;

pub use constants::*;
pub use i18n::*;
