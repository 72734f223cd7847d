use thiserror::Error;

/// Why a set of inputs could not produce a mix.
///
/// Variants are listed in the order the checks run; only the first failure
/// is ever reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("main ratio is missing")]
    MissingMainRatio,
    #[error("hardener ratio is missing")]
    MissingHardenerRatio,
    #[error("total amount is missing")]
    MissingTotalAmount,
    #[error("main and hardener ratios must add up to more than zero")]
    NonPositiveRatioSum,
    #[error("total amount must not be negative")]
    NegativeTotalAmount,
}
