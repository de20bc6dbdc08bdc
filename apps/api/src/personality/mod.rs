pub mod clusters;
pub mod handlers;
pub mod ipip;
pub mod items;
pub mod scoring;
pub mod traits;
