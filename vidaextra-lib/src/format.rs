//! Human readable renderings of the derived figures.

const MINUTES_PER_HOUR: f64 = 60.0;
const MINUTES_PER_DAY: f64 = 1440.0;
const MILLIGRAMS_PER_GRAM: f64 = 1000.0;

/// Upper (exclusive) bound of each band and what that much money would buy.
const COST_BANDS: [(f64, &str); 14] = [
    (0.5, "Un chicle"),
    (1.0, "Una barra de pan"),
    (3.0, "Un café o botella de agua"),
    (4.0, "1kg de plátanos de Canarias"),
    (10.0, "Un libro de bolsillo"),
    (20.0, "Una botella de Aceite de Oliva Virgen Extra"),
    (35.0, "Una suscripción mensual al Gimnasio"),
    (50.0, "Una sesión de Fisioterapia"),
    (80.0, "Unas buenas zapatillas de Running"),
    (120.0, "Una limpieza dental completa"),
    (200.0, "Un reloj inteligente"),
    (300.0, "Un curso de especialización profesional"),
    (500.0, "Un fin de semana de Spa y relax"),
    (1000.0, "Aportación a un Fondo de Inversión"),
];
const TOP_BAND: &str = "La entrada para un coche eléctrico o reforma";

/// Minutes below an hour, hours below a day, days otherwise.
pub fn time(minutes: f64) -> String {
    if minutes < MINUTES_PER_HOUR {
        format!("{minutes:.0} min")
    } else if minutes < MINUTES_PER_DAY {
        format!("{:.1} h", minutes / MINUTES_PER_HOUR)
    } else {
        format!("{:.1} días", minutes / MINUTES_PER_DAY)
    }
}

/// Milligrams, switching to grams from 1000 mg on.
pub fn mass(milligrams: f64) -> String {
    if milligrams >= MILLIGRAMS_PER_GRAM {
        format!("{:.2} g", milligrams / MILLIGRAMS_PER_GRAM)
    } else {
        format!("{milligrams:.0} mg")
    }
}

pub fn money(amount: f64, currency: &str) -> String {
    format!("{amount:.2} {currency}")
}

/// Something that costs about `amount`. Empty for zero or less.
pub fn cost_phrase(amount: f64) -> &'static str {
    if amount <= 0.0 {
        return "";
    }

    COST_BANDS
        .iter()
        .find(|(upper, _)| amount < *upper)
        .map_or(TOP_BAND, |(_, phrase)| phrase)
}
