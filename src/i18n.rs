//! Bilingual label tables.
//!
//! Every user-facing string of the explorer is authored as a [`LabelPair`]
//! holding both the English and the Danish text. Components never branch on
//! the language themselves; they hand a pair to the language store and get
//! back the text to draw.

use log::warn;

use crate::definitions::LanguageCode;

/// A fixed English/Danish text pair bound to one UI slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LabelPair {
    english: &'static str,
    danish: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LabelError {
    #[error("label `{other}` is missing its {missing} text")]
    MissingText {
        missing: LanguageCode,
        other: &'static str,
    },
    #[error("label has no text in either language")]
    Empty,
}

impl LabelPair {
    pub const fn new(english: &'static str, danish: &'static str) -> Self {
        Self { english, danish }
    }

    pub fn english(&self) -> &'static str {
        self.english
    }

    pub fn danish(&self) -> &'static str {
        self.danish
    }

    /// Selects the text for `language`.
    ///
    /// A pair with an empty side is a content defect: debug builds assert,
    /// release builds fall back to the other language instead of drawing
    /// nothing.
    pub fn text(&self, language: LanguageCode) -> &'static str {
        let (text, complete) = self.select(language);
        debug_assert!(complete, "label {:?} has no `{}` text", self, language);
        if !complete {
            warn!("Label {:?} has no `{}` text, falling back", self, language);
        }
        text
    }

    /// The text for `language`, or the other side when that one is empty.
    /// The flag is false when the fallback was taken.
    fn select(&self, language: LanguageCode) -> (&'static str, bool) {
        let (selected, other) = match language {
            LanguageCode::En => (self.english, self.danish),
            LanguageCode::Da => (self.danish, self.english),
        };
        if selected.is_empty() {
            (other, false)
        } else {
            (selected, true)
        }
    }

    pub fn validate(&self) -> Result<(), LabelError> {
        match (self.english.is_empty(), self.danish.is_empty()) {
            (false, false) => Ok(()),
            (true, true) => Err(LabelError::Empty),
            (true, false) => Err(LabelError::MissingText {
                missing: LanguageCode::En,
                other: self.danish,
            }),
            (false, true) => Err(LabelError::MissingText {
                missing: LanguageCode::Da,
                other: self.english,
            }),
        }
    }
}

/// Substitutes `{key}` placeholders in an already resolved label.
pub fn fill(text: &str, key: &str, value: &str) -> String {
    text.replace(&format!("{{{}}}", key), value)
}

pub const APP_TITLE: LabelPair =
    LabelPair::new("Danish Statistics Explorer", "Dansk Statistik Udforsker");
/// Shown on the language button. The English-mode text offers Danish and vice versa.
pub const SWITCH_LANGUAGE: LabelPair = LabelPair::new("Switch to Danish", "Switch to English");
/// Theme button captions read the same in both languages.
pub const SWITCH_TO_DARK: LabelPair = LabelPair::new("Switch to dark mode", "Switch to dark mode");
pub const SWITCH_TO_LIGHT: LabelPair = LabelPair::new("Switch to light mode", "Switch to light mode");
pub const SIDEBAR_TRIGGER: LabelPair = LabelPair::new("Toggle sidebar", "Vis/skjul sidepanel");

pub const SIDEBAR_TITLE: LabelPair = LabelPair::new("Statistics Explorer", "Statistik Udforsker");
pub const RECENT_QUERIES: LabelPair = LabelPair::new("Recent Queries", "Seneste forespørgsler");
pub const EXAMPLE_QUERY: LabelPair =
    LabelPair::new("Example query {n}", "Eksempel forespørgsel {n}");
pub const EXAMPLE_QUERY_COUNT: usize = 3;
pub const DATA_CATEGORIES: LabelPair = LabelPair::new("Data Categories", "Datakategorier");
pub const CATEGORIES: [LabelPair; 5] = [
    LabelPair::new("Demographics", "Demografi"),
    LabelPair::new("Economy", "Økonomi"),
    LabelPair::new("Education", "Uddannelse"),
    LabelPair::new("Health", "Sundhed"),
    LabelPair::new("Environment", "Miljø"),
];

pub const EXPORT_DATA: LabelPair = LabelPair::new("Export data", "Eksportér data");
pub const NEW_QUERY: LabelPair = LabelPair::new("New query", "Ny forespørgsel");

pub const FOOTER: LabelPair = LabelPair::new(
    "© {year} Danish Statistics Explorer",
    "© {year} Danish Statistics Explorer",
);

pub const WELCOME_HEADING: LabelPair = LabelPair::new(
    "Welcome to Danish Statistics Explorer",
    "Velkommen til Dansk Statistik Udforsker",
);
pub const WELCOME_NOTICE: LabelPair = LabelPair::new(
    "This is a placeholder interface. The full application is under development.",
    "Dette er en midlertidig brugerflade. Den fulde applikation er under udvikling.",
);
pub const QUERY_PLACEHOLDER: LabelPair = LabelPair::new(
    "Ask about Danish statistics...",
    "Spørg om dansk statistik...",
);
pub const SUBMIT: LabelPair = LabelPair::new("Submit", "Send");
pub const COMING_SOON: LabelPair = LabelPair::new(
    "Coming soon: Intelligent, conversational access to Danish statistics",
    "Kommer snart: Intelligent, samtalebaseret adgang til dansk statistik",
);

pub const KEY_HINT: LabelPair = LabelPair::new(
    "Ctrl+L language | Ctrl+T theme | Ctrl+B sidebar | Ctrl+Q quit",
    "Ctrl+L sprog | Ctrl+T tema | Ctrl+B sidepanel | Ctrl+Q afslut",
);
pub const LANGUAGE_SWITCHED: LabelPair =
    LabelPair::new("Language set to English", "Sproget er skiftet til dansk");
pub const DARK_MODE_ON: LabelPair = LabelPair::new("Dark mode on", "Mørk tilstand slået til");
pub const LIGHT_MODE_ON: LabelPair = LabelPair::new("Light mode on", "Lys tilstand slået til");
pub const SIDEBAR_SHOWN: LabelPair = LabelPair::new("Sidebar shown", "Sidepanel vist");
pub const SIDEBAR_HIDDEN: LabelPair = LabelPair::new("Sidebar hidden", "Sidepanel skjult");
pub const QUERY_CLEARED: LabelPair =
    LabelPair::new("Started a new query", "Ny forespørgsel startet");
pub const EXPORT_UNAVAILABLE: LabelPair = LabelPair::new(
    "Export is not available yet",
    "Eksport er endnu ikke tilgængelig",
);
pub const SELECTED: LabelPair = LabelPair::new("Selected: {item}", "Valgt: {item}");
pub const TOO_SMALL: LabelPair = LabelPair::new(
    "Terminal window too small, resize to at least {size}.",
    "Terminalvinduet er for lille, gør det mindst {size}.",
);

/// Every built-in pair, used to check the tables are complete.
pub const ALL: &[LabelPair] = &[
    APP_TITLE,
    SWITCH_LANGUAGE,
    SWITCH_TO_DARK,
    SWITCH_TO_LIGHT,
    SIDEBAR_TRIGGER,
    SIDEBAR_TITLE,
    RECENT_QUERIES,
    EXAMPLE_QUERY,
    DATA_CATEGORIES,
    CATEGORIES[0],
    CATEGORIES[1],
    CATEGORIES[2],
    CATEGORIES[3],
    CATEGORIES[4],
    EXPORT_DATA,
    NEW_QUERY,
    FOOTER,
    WELCOME_HEADING,
    WELCOME_NOTICE,
    QUERY_PLACEHOLDER,
    SUBMIT,
    COMING_SOON,
    KEY_HINT,
    LANGUAGE_SWITCHED,
    DARK_MODE_ON,
    LIGHT_MODE_ON,
    SIDEBAR_SHOWN,
    SIDEBAR_HIDDEN,
    QUERY_CLEARED,
    EXPORT_UNAVAILABLE,
    SELECTED,
    TOO_SMALL,
];
