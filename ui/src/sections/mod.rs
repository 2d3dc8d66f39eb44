// The page sections, top to bottom.

pub mod cta;
pub mod download;
pub mod faq;
pub mod features;
pub mod footer;
pub mod hero;
pub mod how_it_works;
pub mod navbar;
pub mod stats;
pub mod testimonials;
