/// Masses of each component needed to produce the requested total.
///
/// The three amounts always add back up to the total they were computed from
/// (within floating-point rounding).
#[readonly::make]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixResult {
    pub main_amount: f64,
    pub hardener_amount: f64,
    pub dilution_amount: f64,
}

impl MixResult {
    pub(crate) fn new(main_amount: f64, hardener_amount: f64, dilution_amount: f64) -> Self {
        Self {
            main_amount,
            hardener_amount,
            dilution_amount,
        }
    }

    pub fn total(&self) -> f64 {
        self.main_amount + self.hardener_amount + self.dilution_amount
    }

    /// Main component plus hardener, before any diluent is added.
    pub fn pre_dilution_amount(&self) -> f64 {
        self.main_amount + self.hardener_amount
    }
}

impl std::fmt::Display for MixResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "main={} hardener={} dilution={}",
            self.main_amount, self.hardener_amount, self.dilution_amount
        )
    }
}
