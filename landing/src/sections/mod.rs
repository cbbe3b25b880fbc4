// Page sections, top to bottom

mod contact;
mod footer;
mod gallery;
mod header;
mod hero;
mod services;
mod testimonials;

pub use contact::Contact;
pub use footer::Footer;
pub use gallery::Gallery;
pub use header::Header;
pub use hero::Hero;
pub use services::Services;
pub use testimonials::Testimonials;
