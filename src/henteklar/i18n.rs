//! Localized strings.
//!
//! Two static tables keyed by dotted namespace (`dashboard.title`). The active
//! locale is a plain value on [`Translator`]; switching it affects every string
//! looked up afterwards. Lookups fall back to Norwegian, then to the key.

use crate::error::HenteklarError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Nb,
    En,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Nb => "nb",
            Locale::En => "en",
        }
    }

    /// The other locale.
    pub fn toggled(&self) -> Self {
        match self {
            Locale::Nb => Locale::En,
            Locale::En => Locale::Nb,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Locale {
    type Err = HenteklarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nb" | "no" => Ok(Locale::Nb),
            "en" => Ok(Locale::En),
            other => Err(HenteklarError::Validation(format!(
                "Unsupported language: {} (expected nb or en)",
                other
            ))),
        }
    }
}

type Table = HashMap<&'static str, &'static str>;

static NB: Lazy<Table> = Lazy::new(|| {
    HashMap::from([
        ("appName", "Henteklar"),
        ("error", "Feil"),
        ("login", "Logg inn"),
        ("logout", "Logg ut"),
        ("back", "Tilbake"),
        ("search", "Søk"),
        ("loginPage.subtitle", "Logg inn for å fortsette"),
        ("loginPage.email", "E-post"),
        ("loginPage.password", "Passord"),
        ("loginPage.loggingIn", "Logger inn..."),
        ("loginPage.loginError", "Feil e-post eller passord"),
        ("loginPage.fillAllFields", "Vennligst fyll ut alle feltene"),
        ("loginPage.loggedInAs", "Logget inn som"),
        ("loginPage.notLoggedIn", "Ikke logget inn"),
        ("loginPage.loggedOut", "Du er logget ut"),
        ("dashboard.title", "Oversikt"),
        ("dashboard.totalChildren", "Totalt barn"),
        ("dashboard.checkedIn", "Inne nå"),
        ("dashboard.checkedOut", "Hentet"),
        ("dashboard.allChildren", "Alle barn"),
        ("dashboard.noChildrenFound", "Ingen barn funnet"),
        ("dashboard.inSince", "Inne siden"),
        ("dashboard.pickedUp", "Hentet"),
        ("dashboard.years", "år"),
        ("checkInOut.title", "Sjekk inn / ut"),
        ("checkInOut.all", "Alle"),
        ("checkInOut.in", "Inne"),
        ("checkInOut.out", "Hentet"),
        ("checkInOut.checkIn", "Sjekk inn"),
        ("checkInOut.checkOut", "Sjekk ut"),
        ("checkInOut.checkedIn", "ble sjekket inn kl."),
        ("checkInOut.checkedOut", "ble sjekket ut kl."),
        ("checkInOut.noChildrenFound", "Ingen barn funnet"),
        ("childProfile.notFound", "Barn ikke funnet"),
        ("childProfile.inSince", "Inne siden"),
        ("childProfile.contactInfo", "Kontaktinformasjon"),
        ("childProfile.primary", "Primær"),
        ("childProfile.call", "Ring"),
        ("childProfile.sendEmail", "Send e-post"),
        ("settings.title", "Innstillinger"),
        ("settings.account", "Konto"),
        ("settings.language", "Språk"),
        ("settings.languageDesc", "Norsk (Bokmål)"),
        ("settings.staff", "Ansatt"),
        ("settings.parent", "Forelder"),
        ("nav.overview", "Oversikt"),
        ("nav.checkInOut", "Sjekk inn/ut"),
        ("nav.settings", "Innstillinger"),
        ("relations.mother", "Mor"),
        ("relations.father", "Far"),
        ("relations.guardian", "Foresatt"),
    ])
});

static EN: Lazy<Table> = Lazy::new(|| {
    HashMap::from([
        ("appName", "Henteklar"),
        ("error", "Error"),
        ("login", "Log in"),
        ("logout", "Log out"),
        ("back", "Back"),
        ("search", "Search"),
        ("loginPage.subtitle", "Log in to continue"),
        ("loginPage.email", "Email"),
        ("loginPage.password", "Password"),
        ("loginPage.loggingIn", "Logging in..."),
        ("loginPage.loginError", "Wrong email or password"),
        ("loginPage.fillAllFields", "Please fill in all fields"),
        ("loginPage.loggedInAs", "Logged in as"),
        ("loginPage.notLoggedIn", "Not logged in"),
        ("loginPage.loggedOut", "You are logged out"),
        ("dashboard.title", "Overview"),
        ("dashboard.totalChildren", "Total children"),
        ("dashboard.checkedIn", "Checked in"),
        ("dashboard.checkedOut", "Picked up"),
        ("dashboard.allChildren", "All children"),
        ("dashboard.noChildrenFound", "No children found"),
        ("dashboard.inSince", "In since"),
        ("dashboard.pickedUp", "Picked up"),
        ("dashboard.years", "years"),
        ("checkInOut.title", "Check in / out"),
        ("checkInOut.all", "All"),
        ("checkInOut.in", "In"),
        ("checkInOut.out", "Out"),
        ("checkInOut.checkIn", "Check in"),
        ("checkInOut.checkOut", "Check out"),
        ("checkInOut.checkedIn", "was checked in at"),
        ("checkInOut.checkedOut", "was checked out at"),
        ("checkInOut.noChildrenFound", "No children found"),
        ("childProfile.notFound", "Child not found"),
        ("childProfile.inSince", "In since"),
        ("childProfile.contactInfo", "Contact information"),
        ("childProfile.primary", "Primary"),
        ("childProfile.call", "Call"),
        ("childProfile.sendEmail", "Send email"),
        ("settings.title", "Settings"),
        ("settings.account", "Account"),
        ("settings.language", "Language"),
        ("settings.languageDesc", "English"),
        ("settings.staff", "Staff"),
        ("settings.parent", "Parent"),
        ("nav.overview", "Overview"),
        ("nav.checkInOut", "Check in/out"),
        ("nav.settings", "Settings"),
        ("relations.mother", "Mother"),
        ("relations.father", "Father"),
        ("relations.guardian", "Guardian"),
    ])
});

fn table(locale: Locale) -> &'static Table {
    match locale {
        Locale::Nb => &NB,
        Locale::En => &EN,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn toggle(&mut self) -> Locale {
        self.locale = self.locale.toggled();
        self.locale
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        table(self.locale)
            .get(key)
            .or_else(|| table(Locale::default()).get(key))
            .copied()
            .unwrap_or(key)
    }
}
