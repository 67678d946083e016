pub mod drop_zone;
pub mod nav;
pub mod results;
pub mod viewport;
