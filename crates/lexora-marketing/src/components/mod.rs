//! Marketing site components

mod nav;
mod footer;
mod cards;
mod slideshow;
mod inquiry_form;

pub use nav::MarketingNav;
pub use footer::Footer;
pub use cards::*;
pub use slideshow::DemoSlideshow;
pub use inquiry_form::InquiryForm;
