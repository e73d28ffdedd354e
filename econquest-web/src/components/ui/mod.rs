pub mod avatar;
pub mod badge;
pub mod card;
pub mod foundation;
pub mod icon;
pub mod progress;
pub mod view_tabs;

pub use avatar::Avatar;
pub use badge::Badge;
pub use card::Card;
pub use foundation::{Size, Tone};
pub use icon::Icon;
pub use progress::Progress;
pub use view_tabs::ViewTabs;
