/// Source and target language pair for a translation lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// English source, French target (`enfr`).
    EnFr,
    /// French source, English target (`fren`).
    FrEn,
}

impl Direction {
    /// Parse a direction token from the command line.
    ///
    /// Accepts exactly `enfr` or `fren`; anything else is `None`.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "enfr" => Some(Self::EnFr),
            "fren" => Some(Self::FrEn),
            _ => None,
        }
    }

    /// The language translations are recorded from.
    pub fn source(self) -> Language {
        match self {
            Self::EnFr => Language::English,
            Self::FrEn => Language::French,
        }
    }

    /// The language translations are recorded into.
    pub fn target(self) -> Language {
        match self {
            Self::EnFr => Language::French,
            Self::FrEn => Language::English,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    French,
}

impl Language {
    /// Name of the per-language directory under the dictionary root.
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::French => "french",
        }
    }
}

/// A single store record: a word plus its translations in insertion order.
///
/// Store lines are split on bare `,` with each field trimmed of surrounding
/// whitespace. There is no quoting or escaping; a trailing `,` therefore
/// parses as one empty translation field, and the empty field participates
/// in merge membership tests like any other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub word: String,
    pub translations: Vec<String>,
}

impl Record {
    pub fn new(word: impl Into<String>, translations: Vec<String>) -> Self {
        Self {
            word: word.into(),
            translations,
        }
    }

    /// Parse a store line into a record.
    ///
    /// Splitting always yields at least one field, so even an empty line
    /// parses (to a record with an empty word and no translations).
    pub fn parse(line: &str) -> Self {
        let mut fields = line.split(',').map(|field| field.trim().to_string());
        let word = fields.next().unwrap_or_default();
        let translations: Vec<String> = fields.collect();
        Self { word, translations }
    }

    /// Whether this record is a bare placeholder: a word with no
    /// translation fields at all.
    pub fn is_bare(&self) -> bool {
        self.translations.is_empty()
    }

    /// Serialize back to a store line, fields joined with `", "`.
    pub fn to_line(&self) -> String {
        if self.translations.is_empty() {
            self.word.clone()
        } else {
            format!("{}, {}", self.word, self.translations.join(", "))
        }
    }

    /// Append each supplied translation not already present, preserving the
    /// original relative order and adding new ones at the end. Membership is
    /// exact string equality on the trimmed field. Returns how many
    /// translations were genuinely new.
    pub fn merge(&mut self, incoming: &[String]) -> usize {
        let mut added = 0;
        for translation in incoming {
            if !self.translations.contains(translation) {
                self.translations.push(translation.clone());
                added += 1;
            }
        }
        added
    }
}
