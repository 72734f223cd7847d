use super::settings::Settings;
use crate::model::MixResult;

/// Fixed-point amount with the configured unit, e.g. `"0.67 kg"`.
pub fn format_amount(value: f64, settings: &Settings) -> String {
    let number = format!("{:.*}", settings.decimal_places, value);
    // Rounding error in the diluent subtraction can leave a tiny negative amount
    let rounds_to_zero = number
        .strip_prefix('-')
        .is_some_and(|digits| digits.chars().all(|c| c == '0' || c == '.'));
    let number = if rounds_to_zero {
        number[1..].to_string()
    } else {
        number
    };
    let number = if settings.decimal_separator == '.' {
        number
    } else {
        number.replace('.', &settings.decimal_separator.to_string())
    };
    format!("{} {}", number, settings.unit_suffix)
}

/// What is shown instead of an amount when there is no result, e.g. `"-- kg"`.
pub fn placeholder(settings: &Settings) -> String {
    format!("{} {}", settings.placeholder, settings.unit_suffix)
}

/// The three amounts as they appear to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixDisplay {
    pub main: String,
    pub hardener: String,
    pub dilution: String,
}

impl MixDisplay {
    /// All three fields are reset together when there is no result, so a
    /// stale amount is never left next to fresh ones.
    pub fn new(result: Option<&MixResult>, settings: &Settings) -> Self {
        match result {
            Some(result) => Self {
                main: format_amount(result.main_amount, settings),
                hardener: format_amount(result.hardener_amount, settings),
                dilution: format_amount(result.dilution_amount, settings),
            },
            None => Self::empty(settings),
        }
    }

    pub fn empty(settings: &Settings) -> Self {
        Self {
            main: placeholder(settings),
            hardener: placeholder(settings),
            dilution: placeholder(settings),
        }
    }

    pub fn is_empty(&self, settings: &Settings) -> bool {
        *self == Self::empty(settings)
    }

    /// `(label, value)` pairs in display order.
    pub fn rows(&self) -> [(&'static str, &str); 3] {
        [
            ("Main", self.main.as_str()),
            ("Hardener", self.hardener.as_str()),
            ("Dilution", self.dilution.as_str()),
        ]
    }
}
