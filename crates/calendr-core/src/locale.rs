/// Read-only label tables keyed by locale code
use crate::models::FirstDayOfWeek;
use chrono::{Datelike, NaiveDate};

pub const BASE_LOCALE: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub code: &'static str,
    pub months: [&'static str; 12],
    /// Sunday first
    pub weekdays_short: [&'static str; 7],
    /// Sunday first
    pub weekdays_long: [&'static str; 7],
    pub prev_month: &'static str,
    pub next_month: &'static str,
    pub focused_on: &'static str,
    pub selected: &'static str,
    pub range_start: &'static str,
    pub range_selected: &'static str,
}

static EN: Locale = Locale {
    code: "en",
    months: [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ],
    weekdays_short: ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
    weekdays_long: [
        "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
    ],
    prev_month: "Previous month",
    next_month: "Next month",
    focused_on: "Focused on {date}",
    selected: "Selected {date}",
    range_start: "Range start {date}",
    range_selected: "Selected range {start} to {end}",
};

static ES: Locale = Locale {
    code: "es",
    months: [
        "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
        "octubre", "noviembre", "diciembre",
    ],
    weekdays_short: ["do", "lu", "ma", "mi", "ju", "vi", "sá"],
    weekdays_long: [
        "domingo", "lunes", "martes", "miércoles", "jueves", "viernes", "sábado",
    ],
    prev_month: "Mes anterior",
    next_month: "Mes siguiente",
    focused_on: "Enfocado en {date}",
    selected: "Seleccionado {date}",
    range_start: "Inicio del rango {date}",
    range_selected: "Rango seleccionado {start} a {end}",
};

static FR: Locale = Locale {
    code: "fr",
    months: [
        "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
        "octobre", "novembre", "décembre",
    ],
    weekdays_short: ["di", "lu", "ma", "me", "je", "ve", "sa"],
    weekdays_long: [
        "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
    ],
    prev_month: "Mois précédent",
    next_month: "Mois suivant",
    focused_on: "Focus sur {date}",
    selected: "Sélectionné {date}",
    range_start: "Début de la période {date}",
    range_selected: "Période sélectionnée du {start} au {end}",
};

static DE: Locale = Locale {
    code: "de",
    months: [
        "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
        "Oktober", "November", "Dezember",
    ],
    weekdays_short: ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"],
    weekdays_long: [
        "Sonntag", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag",
    ],
    prev_month: "Vorheriger Monat",
    next_month: "Nächster Monat",
    focused_on: "Fokus auf {date}",
    selected: "Ausgewählt {date}",
    range_start: "Zeitraum beginnt {date}",
    range_selected: "Zeitraum {start} bis {end} ausgewählt",
};

static PT: Locale = Locale {
    code: "pt",
    months: [
        "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
        "outubro", "novembro", "dezembro",
    ],
    weekdays_short: ["do", "se", "te", "qa", "qi", "sx", "sá"],
    weekdays_long: [
        "domingo", "segunda-feira", "terça-feira", "quarta-feira", "quinta-feira",
        "sexta-feira", "sábado",
    ],
    prev_month: "Mês anterior",
    next_month: "Próximo mês",
    focused_on: "Foco em {date}",
    selected: "Selecionado {date}",
    range_start: "Início do intervalo {date}",
    range_selected: "Intervalo selecionado de {start} a {end}",
};

static LOCALES: [&Locale; 5] = [&EN, &ES, &FR, &DE, &PT];

/// Look a locale up by code. `pt-BR` falls back to `pt`, unknown codes
/// fall back to the base locale.
pub fn lookup(code: &str) -> &'static Locale {
    let normalised = code.trim().to_lowercase().replace('_', "-");
    let language = normalised.split('-').next().unwrap_or_default();
    LOCALES
        .iter()
        .find(|l| l.code == normalised)
        .or_else(|| LOCALES.iter().find(|l| l.code == language))
        .copied()
        .unwrap_or(&EN)
}

impl Locale {
    pub fn month_name(&self, month0: u32) -> &'static str {
        self.months[(month0 as usize).min(11)]
    }

    /// Short weekday labels ordered to match the grid columns
    pub fn weekday_labels(&self, first_day: FirstDayOfWeek) -> Vec<&'static str> {
        let shift = match first_day {
            FirstDayOfWeek::Sunday => 0,
            FirstDayOfWeek::Monday => 1,
        };
        (0..7).map(|i| self.weekdays_short[(i + shift) % 7]).collect()
    }

    /// e.g. "Monday, January 15, 2024"
    pub fn long_date(&self, date: NaiveDate) -> String {
        format!(
            "{}, {} {}, {}",
            self.weekdays_long[date.weekday().num_days_from_sunday() as usize],
            self.month_name(date.month0()),
            date.day(),
            date.year()
        )
    }

    pub fn focused_on_text(&self, date: NaiveDate) -> String {
        self.focused_on.replace("{date}", &self.long_date(date))
    }

    pub fn selected_text(&self, date: NaiveDate) -> String {
        self.selected.replace("{date}", &self.long_date(date))
    }

    pub fn range_start_text(&self, date: NaiveDate) -> String {
        self.range_start.replace("{date}", &self.long_date(date))
    }

    pub fn range_selected_text(&self, start: NaiveDate, end: NaiveDate) -> String {
        self.range_selected
            .replace("{start}", &self.long_date(start))
            .replace("{end}", &self.long_date(end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_fallbacks() {
        assert_eq!(lookup("fr").code, "fr");
        assert_eq!(lookup("pt-BR").code, "pt");
        assert_eq!(lookup("de_AT").code, "de");
        assert_eq!(lookup("xx").code, BASE_LOCALE);
        assert_eq!(lookup("").code, BASE_LOCALE);
    }

    #[test]
    fn test_weekday_labels_follow_first_day() {
        let en = lookup("en");
        assert_eq!(en.weekday_labels(FirstDayOfWeek::Sunday)[0], "Su");
        let monday_first = en.weekday_labels(FirstDayOfWeek::Monday);
        assert_eq!(monday_first[0], "Mo");
        assert_eq!(monday_first[6], "Su");
    }

    #[test]
    fn test_long_date_and_templates() {
        let en = lookup("en");
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(en.long_date(date), "Monday, January 15, 2024");
        assert_eq!(en.focused_on_text(date), "Focused on Monday, January 15, 2024");
        let end = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        assert_eq!(
            en.range_selected_text(date, end),
            "Selected range Monday, January 15, 2024 to Saturday, January 20, 2024"
        );
    }
}
