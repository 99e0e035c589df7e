pub mod coordinates;
pub mod details;
pub mod error;
pub mod home;
pub mod map;

pub use coordinates::coordinate_picker_page;
pub use details::details_page;
pub use error::error_page;
pub use home::{home_page, HomeVm};
pub use map::{map_page, MapVm};
