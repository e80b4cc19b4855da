//! Bilingual (English / European Portuguese) display strings.
//!
//! The engine and store operate on canonical English day identifiers; the
//! tables here translate those identifiers and the status vocabulary for
//! display. Stored data never contains localized strings.

use serde::{Deserialize, Serialize};

/// Supported display languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "pt-PT")]
    PtPt,
}

impl Language {
    /// The persisted identifier for this language.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::PtPt => "pt-PT",
        }
    }

    /// Parses a persisted identifier. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "en" => Some(Language::En),
            "pt-PT" => Some(Language::PtPt),
            _ => None,
        }
    }

    /// The translation table for this language.
    pub fn translations(&self) -> &'static Translations {
        match self {
            Language::En => &EN,
            Language::PtPt => &PT_PT,
        }
    }
}

/// All locale-dependent strings the engine and preview need.
#[derive(Debug)]
pub struct Translations {
    pub greeting_morning: &'static str,
    pub greeting_afternoon: &'static str,
    pub greeting_evening: &'static str,

    pub status_working: &'static str,
    pub status_off: &'static str,
    /// Off label for upcoming days, distinct from today's in pt-PT.
    pub status_off_upcoming: &'static str,
    pub status_tba: &'static str,
    pub status_sleeping: &'static str,
    pub work_starting_in: &'static str,

    pub hour_unit: &'static str,
    pub minute_unit: &'static str,

    pub today: &'static str,
    pub next_days: &'static str,

    pub tomorrow: &'static str,
    pub monday: &'static str,
    pub tuesday: &'static str,
    pub wednesday: &'static str,
    pub thursday: &'static str,
    pub friday: &'static str,
    pub saturday: &'static str,
    pub sunday: &'static str,
}

pub static EN: Translations = Translations {
    greeting_morning: "Good Morning",
    greeting_afternoon: "Good Afternoon",
    greeting_evening: "Good Evening",

    status_working: "Working",
    status_off: "Off",
    status_off_upcoming: "Day off",
    status_tba: "To be announced",
    status_sleeping: "Sleeping",
    work_starting_in: "Work starting in",

    hour_unit: "h",
    minute_unit: "min",

    today: "Today",
    next_days: "Next days",

    tomorrow: "Tomorrow",
    monday: "Monday",
    tuesday: "Tuesday",
    wednesday: "Wednesday",
    thursday: "Thursday",
    friday: "Friday",
    saturday: "Saturday",
    sunday: "Sunday",
};

pub static PT_PT: Translations = Translations {
    greeting_morning: "Bom dia",
    greeting_afternoon: "Boa tarde",
    greeting_evening: "Boa noite",

    status_working: "A trabalhar",
    status_off: "Indisponível",
    status_off_upcoming: "De folga",
    status_tba: "Por anunciar",
    status_sleeping: "A dormir",
    work_starting_in: "O trabalho começa em",

    hour_unit: "h",
    minute_unit: "min",

    today: "Hoje",
    next_days: "Próximos dias",

    tomorrow: "Amanhã",
    monday: "Segunda-feira",
    tuesday: "Terça-feira",
    wednesday: "Quarta-feira",
    thursday: "Quinta-feira",
    friday: "Sexta-feira",
    saturday: "Sábado",
    sunday: "Domingo",
};

/// Translates a canonical day identifier into the display label for the
/// given language. Identifiers outside the canonical set pass through
/// unchanged.
pub fn translate_day_name(day: &str, language: Language) -> String {
    let t = language.translations();
    let translated = match day {
        "Tomorrow" => t.tomorrow,
        "Monday" => t.monday,
        "Tuesday" => t.tuesday,
        "Wednesday" => t.wednesday,
        "Thursday" => t.thursday,
        "Friday" => t.friday,
        "Saturday" => t.saturday,
        "Sunday" => t.sunday,
        other => return other.to_string(),
    };
    translated.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_round_trip() {
        assert_eq!(Language::parse("en"), Some(Language::En));
        assert_eq!(Language::parse("pt-PT"), Some(Language::PtPt));
        assert_eq!(Language::parse("fr"), None);
        assert_eq!(Language::PtPt.as_str(), "pt-PT");
    }

    #[test]
    fn test_language_serde_uses_persisted_identifiers() {
        assert_eq!(serde_json::to_string(&Language::PtPt).unwrap(), "\"pt-PT\"");
        let parsed: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Language::En);
    }

    #[test]
    fn test_all_canonical_days_are_translated() {
        for day in crate::schedule::CANONICAL_DAYS {
            // pt-PT has a distinct label for every canonical identifier;
            // passthrough would mean a hole in the table
            assert_ne!(translate_day_name(day, Language::PtPt), day);
        }
    }

    #[test]
    fn test_translate_day_name() {
        assert_eq!(translate_day_name("Wednesday", Language::PtPt), "Quarta-feira");
        assert_eq!(translate_day_name("Tomorrow", Language::PtPt), "Amanhã");
        assert_eq!(translate_day_name("Wednesday", Language::En), "Wednesday");
        // Unknown identifiers fall through untouched
        assert_eq!(translate_day_name("Someday", Language::PtPt), "Someday");
    }
}
