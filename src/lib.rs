#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod convert;
pub mod object;
pub mod system;
pub mod text;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::SmallCommonsConfig;
pub use object::NullOrder;
pub use text::QuoteKind;
pub use utils::error::{Result, UtilError};
