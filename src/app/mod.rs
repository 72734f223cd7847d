pub mod display;
pub mod mix_form;
pub mod settings;

pub use display::{format_amount, placeholder, MixDisplay};
pub use mix_form::{Field, MixForm, UnknownField};
pub use settings::{Settings, SettingsError};
