mod forms;
mod nav;
mod section;

pub use forms::{ContactRequest, NewsletterRequest};
pub use nav::{anchor_of, is_current_route, ItemId, NavEntry};
pub use section::{Section, SectionId, SiteLinks};
