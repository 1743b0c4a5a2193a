// Landing page sections

mod features;
mod header;
mod hero;
mod modal;
mod trending;

pub use features::Features;
pub use header::Header;
pub use hero::Hero;
pub use modal::PortfolioModal;
pub use trending::Trending;
