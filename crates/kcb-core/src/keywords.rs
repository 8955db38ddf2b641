//! Keyword set and the case-insensitive substring matcher.

/// Built-in alert keywords, in display order.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "bancolombia",
    "latam",
    "netflix",
    "bancodebogota",
    "vencen",
    "nacionales",
    "multas",
    "prejuridico",
    "suscripcion",
    "suspension",
    "suspendida",
    "nvoadades",
    "mastercard",
    "poliza",
    "llave",
    "bre b",
    "nequi",
    "simit",
    "facturas",
    "factura",
    "comparendos",
    "seguro",
    "%",
    "claro",
    "movistar",
    "impuestos",
    "valor",
    "caducarán",
    "medianoche",
    "word – hasta",
    "hasta",
    "paga",
    "hoy",
    "paga hoy",
    "apuestale a tu",
    "betplay",
    "b a n c olo m bia",
    "postpago",
    "pago",
];

/// Ordered, immutable list of lowercase keywords.
///
/// Order is the definition order and is what `/keywords` shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    /// Build a set from arbitrary literals. Entries are lowercased; blanks are dropped.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Keywords occurring in `text` (case-insensitive substring test).
    ///
    /// Hits come back unique and in definition order. Absent or empty text
    /// yields nothing.
    pub fn matches(&self, text: Option<&str>) -> Vec<String> {
        let Some(text) = text.filter(|t| !t.is_empty()) else {
            return Vec::new();
        };

        let lower = text.to_lowercase();
        let mut matched: Vec<String> = Vec::new();
        for kw in &self.keywords {
            if lower.contains(kw.as_str()) && !matched.contains(kw) {
                matched.push(kw.clone());
            }
        }
        matched
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS.iter().copied())
    }
}
