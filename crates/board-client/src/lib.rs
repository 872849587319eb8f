pub mod about;

pub use about::{AboutUsPage, AboutUsView};
