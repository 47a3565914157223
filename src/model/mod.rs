pub mod features;
pub mod profile;
pub mod traits;
