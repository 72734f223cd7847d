mod invalid_input;
mod mix_input;
mod mix_result;

pub use invalid_input::InvalidInput;
pub use mix_input::{MixInput, ValidMix};
pub use mix_result::MixResult;
