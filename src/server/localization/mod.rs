//! Localized message resolution.
//!
//! Every response message is looked up by [`MessageKey`] in the culture chosen for
//! the request. Cultures are parsed from `Accept-Language`; unknown tags fall back
//! to [`Locale::EnUs`].

mod messages;

pub use messages::MessageKey;

use std::fmt;

/// Cultures the API can answer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    EnUs,
    EnGb,
    DeDe,
    FrFr,
    ArEg,
}

impl Locale {
    pub const SUPPORTED: [Locale; 5] = [
        Locale::EnUs,
        Locale::EnGb,
        Locale::DeDe,
        Locale::FrFr,
        Locale::ArEg,
    ];

    /// Culture tag such as `en-US`.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::DeDe => "de-DE",
            Locale::FrFr => "fr-FR",
            Locale::ArEg => "ar-EG",
        }
    }

    /// Parses one language tag. A bare language (`ar`, `de`) maps to its culture.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        if let Some(locale) = Self::SUPPORTED
            .iter()
            .find(|l| l.tag().eq_ignore_ascii_case(tag))
        {
            return Some(*locale);
        }

        let language = tag.split(['-', '_']).next()?.to_ascii_lowercase();
        match language.as_str() {
            "en" => Some(Locale::EnUs),
            "de" => Some(Locale::DeDe),
            "fr" => Some(Locale::FrFr),
            "ar" => Some(Locale::ArEg),
            _ => None,
        }
    }

    /// Picks the first supported culture from an `Accept-Language` value.
    ///
    /// Quality weights are honoured; entries with equal weight keep header order.
    pub fn from_accept_language(header: &str) -> Self {
        let mut candidates: Vec<(f32, usize, &str)> = header
            .split(',')
            .enumerate()
            .filter_map(|(index, part)| {
                let mut pieces = part.split(';');
                let tag = pieces.next()?.trim();
                if tag.is_empty() {
                    return None;
                }
                let quality = pieces
                    .find_map(|p| p.trim().strip_prefix("q="))
                    .and_then(|q| q.parse::<f32>().ok())
                    .unwrap_or(1.0);
                Some((quality, index, tag))
            })
            .collect();

        candidates.sort_by(|a, b| b.0.total_cmp(&a.0).then(a.1.cmp(&b.1)));

        candidates
            .into_iter()
            .filter(|(quality, _, _)| *quality > 0.0)
            .find_map(|(_, _, tag)| Self::from_tag(tag))
            .unwrap_or_default()
    }

    pub fn is_arabic(self) -> bool {
        matches!(self, Locale::ArEg)
    }

    /// Chooses between the Arabic and English name of a record.
    pub fn localize<'a>(self, name_ar: &'a str, name_en: &'a str) -> &'a str {
        if self.is_arabic() {
            name_ar
        } else {
            name_en
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Resolves message keys for a single culture.
#[derive(Debug, Clone, Copy, Default)]
pub struct Localizer {
    locale: Locale,
}

impl Localizer {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn get(&self, key: MessageKey) -> String {
        key.text(self.locale).to_string()
    }

    /// Resolves a key and substitutes `{name}` placeholders.
    pub fn format(&self, key: MessageKey, args: &[(&str, &str)]) -> String {
        let mut message = self.get(key);
        for (name, value) in args {
            message = message.replace(&format!("{{{}}}", name), value);
        }
        message
    }
}
