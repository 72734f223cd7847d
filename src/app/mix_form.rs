use itertools::Itertools;
use log::debug;
use std::str::FromStr;

use super::display::MixDisplay;
use super::settings::Settings;
use crate::helpers::parse_localized_number;
use crate::model::{InvalidInput, MixInput, MixResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    MainRatio,
    HardenerRatio,
    DilutionRate,
    TotalAmount,
}

impl Field {
    pub fn all() -> [Field; 4] {
        [
            Field::MainRatio,
            Field::HardenerRatio,
            Field::DilutionRate,
            Field::TotalAmount,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            Field::MainRatio => 0,
            Field::HardenerRatio => 1,
            Field::DilutionRate => 2,
            Field::TotalAmount => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Field::MainRatio => "main",
            Field::HardenerRatio => "hardener",
            Field::DilutionRate => "dilution",
            Field::TotalAmount => "total",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl std::fmt::Display for UnknownField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown field '{}', expected one of: {}",
            self.0,
            Field::all().iter().map(Field::name).join(", ")
        )
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Field::all()
            .into_iter()
            .find(|field| field.name() == name)
            .ok_or(UnknownField(s.to_string()))
    }
}

/// Four text boxes and the amounts derived from them.
///
/// Every edit recalculates straight away; nothing is cached between edits.
#[derive(Debug, Clone, Default)]
pub struct MixForm {
    texts: [String; 4],
    settings: Settings,
}

impl MixForm {
    pub fn new(settings: Settings) -> Self {
        Self {
            texts: Default::default(),
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn text(&self, field: Field) -> &str {
        &self.texts[field.index()]
    }

    pub fn set_text(&mut self, field: Field, text: &str) -> MixDisplay {
        self.texts[field.index()] = text.to_string();
        debug!(target: "mix_form", "{} = {:?}", field.name(), text);
        self.display()
    }

    pub fn clear(&mut self) -> MixDisplay {
        self.texts = Default::default();
        self.display()
    }

    pub fn input(&self) -> MixInput {
        let parse = |field: Field| {
            parse_localized_number(self.text(field), self.settings.decimal_separator)
        };
        MixInput::new(
            parse(Field::MainRatio),
            parse(Field::HardenerRatio),
            parse(Field::DilutionRate),
            parse(Field::TotalAmount),
        )
    }

    pub fn result(&self) -> Option<MixResult> {
        self.input().calculate()
    }

    /// Why there is no result, if there isn't one.
    pub fn problem(&self) -> Option<InvalidInput> {
        self.input().validate().err()
    }

    pub fn display(&self) -> MixDisplay {
        MixDisplay::new(self.result().as_ref(), &self.settings)
    }

    /// The display as aligned `label value` lines.
    pub fn render(&self) -> String {
        self.display()
            .rows()
            .iter()
            .map(|(label, value)| format!("{:<10}{}", format!("{}:", label), value))
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use test_context::test_context;

    use super::*;
    use crate::tests::UsingLogger;

    fn filled_form() -> MixForm {
        let mut form = MixForm::new(Settings::default());
        form.set_text(Field::MainRatio, "2");
        form.set_text(Field::HardenerRatio, "1");
        form.set_text(Field::DilutionRate, "10");
        form.set_text(Field::TotalAmount, "1");
        form
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!("main".parse::<Field>(), Ok(Field::MainRatio));
        assert_eq!(" Hardener ".parse::<Field>(), Ok(Field::HardenerRatio));
        assert_eq!("dilution".parse::<Field>(), Ok(Field::DilutionRate));
        assert_eq!("TOTAL".parse::<Field>(), Ok(Field::TotalAmount));
        assert_eq!(
            "thinner".parse::<Field>(),
            Err(UnknownField("thinner".to_string()))
        );
    }

    #[test]
    fn test_unknown_field_message() {
        let err = "x".parse::<Field>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown field 'x', expected one of: main, hardener, dilution, total"
        );
    }

    #[test]
    fn test_new_form_shows_placeholders() {
        let form = MixForm::new(Settings::default());
        assert!(form.display().is_empty(form.settings()));
        assert_eq!(form.problem(), Some(InvalidInput::MissingMainRatio));
    }

    #[test_context(UsingLogger)]
    #[test]
    fn test_each_edit_recalculates(_: &mut UsingLogger) {
        let mut form = MixForm::new(Settings::default());
        assert_eq!(form.set_text(Field::MainRatio, "2").main, "-- kg");
        assert_eq!(form.set_text(Field::HardenerRatio, "1").main, "-- kg");
        let display = form.set_text(Field::TotalAmount, "1");
        assert_eq!(display.main, "0.67 kg");
        assert_eq!(display.hardener, "0.33 kg");
        assert_eq!(display.dilution, "0.00 kg");

        let display = form.set_text(Field::DilutionRate, "10");
        assert_eq!(display.main, "0.61 kg");
        assert_eq!(display.dilution, "0.09 kg");
    }

    #[test]
    fn test_bad_text_resets_every_amount() {
        let mut form = filled_form();
        assert!(form.result().is_some());

        let display = form.set_text(Field::TotalAmount, "1kg");
        assert!(display.is_empty(form.settings()));
        assert_eq!(form.problem(), Some(InvalidInput::MissingTotalAmount));

        let display = form.set_text(Field::TotalAmount, "-1");
        assert!(display.is_empty(form.settings()));
        assert_eq!(form.problem(), Some(InvalidInput::NegativeTotalAmount));
    }

    #[test]
    fn test_empty_dilution_counts_as_zero() {
        let mut form = filled_form();
        let display = form.set_text(Field::DilutionRate, "");
        assert_eq!(display.dilution, "0.00 kg");
        assert_eq!(form.input().dilution_rate, None);
    }

    #[test]
    fn test_clear() {
        let mut form = filled_form();
        let display = form.clear();
        assert!(display.is_empty(form.settings()));
        assert_eq!(form.text(Field::MainRatio), "");
        assert_eq!(form.input(), MixInput::default());
    }

    #[test]
    fn test_comma_separator() {
        let mut settings = Settings::default();
        settings.decimal_separator = ',';
        let mut form = MixForm::new(settings);
        form.set_text(Field::MainRatio, "1,5");
        form.set_text(Field::HardenerRatio, "0,5");
        let display = form.set_text(Field::TotalAmount, "2");
        assert_eq!(display.main, "1,50 kg");
        assert_eq!(display.hardener, "0,50 kg");
    }

    #[test]
    fn test_render() {
        let form = filled_form();
        assert_eq!(
            form.render(),
            "Main:     0.61 kg\nHardener: 0.30 kg\nDilution: 0.09 kg"
        );
    }
}
