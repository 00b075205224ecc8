//! Marketing site pages

mod home;

pub use home::HomePage;
