// Reusable page building blocks

mod fade_in;
mod logo;
mod modal;
mod scroll_to_top;

pub use fade_in::{Direction, FadeIn};
pub use logo::Logo;
pub use modal::Modal;
pub use scroll_to_top::ScrollToTop;
