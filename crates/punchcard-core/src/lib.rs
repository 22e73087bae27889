pub mod clipboard;
pub mod config;
pub mod error;
pub mod export;
pub mod form;
pub mod io;
pub mod paths;
pub mod rating;
pub mod render;
pub mod sanitize;
pub mod template;
pub mod templates;
pub mod types;
pub mod values;

pub use error::{PunchcardError, Result};
pub use export::RenderedCard;
pub use form::FormSession;
pub use render::{render, render_with, RenderOptions};
pub use template::CardTemplate;
pub use types::{CardType, FieldValue};
pub use values::FieldValues;
