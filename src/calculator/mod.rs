//! Ratio mixing: how much main component, hardener and diluent go into a
//! batch of a given total mass.

use log::trace;

use crate::model::{MixInput, MixResult, ValidMix};

/// Splits `total_amount` into main component, hardener and diluent.
///
/// `dilution_rate` is a percentage of the undiluted mass and defaults to zero.
/// Returns `None` when a ratio or the total is missing, when the ratios add
/// up to zero or less, or when the total is negative.
pub fn calculate(
    main_ratio: Option<f64>,
    hardener_ratio: Option<f64>,
    dilution_rate: Option<f64>,
    total_amount: Option<f64>,
) -> Option<MixResult> {
    MixInput::new(main_ratio, hardener_ratio, dilution_rate, total_amount).calculate()
}

/// Computes the mix for inputs that already passed validation.
///
/// The diluent is whatever is left of the total after main component and
/// hardener, so the three amounts always add back up to the total.
pub(crate) fn mix(valid: &ValidMix) -> MixResult {
    let ratio_sum = valid.ratio_sum();
    let total_amount = valid.total_amount();
    let pre_dilution_amount = total_amount / (1.0 + valid.dilution_rate() / 100.0);

    let main_amount = pre_dilution_amount * valid.main_ratio() / ratio_sum;
    let hardener_amount = pre_dilution_amount * valid.hardener_ratio() / ratio_sum;
    let dilution_amount = total_amount - main_amount - hardener_amount;

    let result = MixResult::new(main_amount, hardener_amount, dilution_amount);
    trace!(target: "calculator", "{:?} -> {}", valid, result);
    result
}
