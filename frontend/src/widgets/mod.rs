mod celebration;
mod faq_item;
mod gradient_background;
mod gradient_card;
mod section;

pub use celebration::Celebration;
pub use faq_item::FaqItem;
pub use gradient_background::GradientBackground;
pub use gradient_card::GradientCard;
pub use section::Section;
