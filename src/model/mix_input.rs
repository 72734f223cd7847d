use log::trace;

use crate::calculator;
use crate::model::{InvalidInput, MixResult};

/// The four values a mix is computed from. Any of them may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MixInput {
    pub main_ratio: Option<f64>,
    pub hardener_ratio: Option<f64>,
    /// Percentage, so `10.0` means 10%. Absent is the same as zero.
    pub dilution_rate: Option<f64>,
    pub total_amount: Option<f64>,
}

/// Inputs that passed validation, with the defaults filled in.
///
/// Only [`MixInput::validate`] builds one, so a `ValidMix` always has a
/// positive ratio sum and a non-negative total.
///
/// ```compile_fail
/// use paintcalc::model::ValidMix;
///
/// let forged = ValidMix {
///     main_ratio: 0.0,
///     hardener_ratio: 0.0,
///     dilution_rate: 0.0,
///     total_amount: -5.0,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidMix {
    main_ratio: f64,
    hardener_ratio: f64,
    dilution_rate: f64,
    total_amount: f64,
}

impl ValidMix {
    pub fn main_ratio(&self) -> f64 {
        self.main_ratio
    }

    pub fn hardener_ratio(&self) -> f64 {
        self.hardener_ratio
    }

    pub fn dilution_rate(&self) -> f64 {
        self.dilution_rate
    }

    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    pub fn ratio_sum(&self) -> f64 {
        self.main_ratio + self.hardener_ratio
    }
}

impl MixInput {
    pub fn new(
        main_ratio: Option<f64>,
        hardener_ratio: Option<f64>,
        dilution_rate: Option<f64>,
        total_amount: Option<f64>,
    ) -> Self {
        Self {
            main_ratio,
            hardener_ratio,
            dilution_rate,
            total_amount,
        }
    }

    /// Runs the input checks in order and reports the first one that fails.
    ///
    /// Negative dilution rates and negative individual ratios are accepted as
    /// long as the checks below pass.
    pub fn validate(&self) -> Result<ValidMix, InvalidInput> {
        let main_ratio = self.main_ratio.ok_or(InvalidInput::MissingMainRatio)?;
        let hardener_ratio = self
            .hardener_ratio
            .ok_or(InvalidInput::MissingHardenerRatio)?;
        let total_amount = self.total_amount.ok_or(InvalidInput::MissingTotalAmount)?;

        if main_ratio + hardener_ratio <= 0.0 {
            return Err(InvalidInput::NonPositiveRatioSum);
        }

        if total_amount < 0.0 {
            return Err(InvalidInput::NegativeTotalAmount);
        }

        Ok(ValidMix {
            main_ratio,
            hardener_ratio,
            dilution_rate: self.dilution_rate.unwrap_or(0.0),
            total_amount,
        })
    }

    pub fn calculate(&self) -> Option<MixResult> {
        match self.validate() {
            Ok(valid) => Some(calculator::mix(&valid)),
            Err(reason) => {
                trace!(target: "calculator", "rejected {:?}: {}", self, reason);
                None
            }
        }
    }
}
