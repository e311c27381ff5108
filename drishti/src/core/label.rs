//! Cell labels, shop-name normalization and visibility signatures.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::annotation::SHOP_KIND;

/// Text of the sentinel label for cells outside every polygon.
pub const BACKGROUND: &str = "background";

/// Characters treated as word separators in shop names.
const NAME_SEPARATORS: [char; 2] = ['|', '/'];

/// Label held by one grid cell.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RegionLabel {
    /// Outside every polygon
    #[default]
    Background,
    /// Inside an annotation polygon
    Region {
        /// Annotation kind (`shop`, `corridor`, ...)
        kind: String,
        /// Annotation label
        name: String,
    },
}

impl RegionLabel {
    /// Create a region label.
    pub fn region(kind: impl Into<String>, name: impl Into<String>) -> Self {
        RegionLabel::Region {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Is this the background sentinel?
    #[inline]
    pub fn is_background(&self) -> bool {
        matches!(self, RegionLabel::Background)
    }

    /// Annotation kind, `None` for background.
    pub fn kind(&self) -> Option<&str> {
        match self {
            RegionLabel::Background => None,
            RegionLabel::Region { kind, .. } => Some(kind),
        }
    }

    /// Annotation name, `None` for background.
    pub fn name(&self) -> Option<&str> {
        match self {
            RegionLabel::Background => None,
            RegionLabel::Region { name, .. } => Some(name),
        }
    }
}

impl fmt::Display for RegionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionLabel::Background => f.write_str(BACKGROUND),
            RegionLabel::Region { kind, name } => write!(f, "{}:{}", kind, name),
        }
    }
}

/// Normalize a shop name for signature comparison.
///
/// Applied to map labels when the index is built and to recognizer output
/// when it is queried. Lowercases, turns `|` and `/` into word breaks,
/// collapses whitespace and strips the `shop:` prefix.
///
/// ```
/// use drishti::core::normalize_shop_name;
///
/// assert_eq!(normalize_shop_name("shop:Foo|Bar/"), "foo bar");
/// assert_eq!(normalize_shop_name("  FOO   bar "), "foo bar");
/// ```
pub fn normalize_shop_name(name: &str) -> String {
    let lowered = name.to_lowercase().replace(&NAME_SEPARATORS[..], " ");
    let collapsed = lowered.split_whitespace().collect::<Vec<_>>().join(" ");

    let prefix = format!("{}:", SHOP_KIND);
    let mut rest = collapsed.as_str();
    while let Some(stripped) = rest.strip_prefix(prefix.as_str()) {
        rest = stripped.trim_start();
    }
    rest.to_string()
}

/// Canonical set of names visible from one pose.
///
/// Names are normalized with [`normalize_shop_name`], empty names are
/// dropped, and the remainder is sorted and deduplicated. Two observations
/// with the same signature are indistinguishable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Signature(Vec<String>);

impl Signature {
    /// The empty signature (nothing visible).
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Build a signature from raw labels or recognizer output.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = labels
            .into_iter()
            .map(|label| normalize_shop_name(label.as_ref()))
            .filter(|name| !name.is_empty())
            .collect();
        names.sort();
        names.dedup();
        Self(names)
    }

    /// Sorted, normalized names.
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Number of distinct names.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Nothing visible.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Does the signature contain this (already normalized) name?
    pub fn contains(&self, name: &str) -> bool {
        self.0.binary_search_by(|n| n.as_str().cmp(name)).is_ok()
    }
}

impl From<Vec<String>> for Signature {
    fn from(names: Vec<String>) -> Self {
        Signature::from_labels(names)
    }
}

impl From<Signature> for Vec<String> {
    fn from(signature: Signature) -> Self {
        signature.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_documented_transformations() {
        assert_eq!(normalize_shop_name("shop:Zara"), "zara");
        assert_eq!(normalize_shop_name("H&M"), "h&m");
        assert_eq!(normalize_shop_name("Marks|Spencer"), "marks spencer");
        assert_eq!(normalize_shop_name("Food/Court"), "food court");
        assert_eq!(
            normalize_shop_name("shop:Foo|Bar/"),
            normalize_shop_name("foo bar")
        );
    }

    #[test]
    fn test_normalize_idempotent() {
        let samples = [
            "shop:Foo|Bar/",
            "SHOP: shop:Nike",
            "|shop:Apple",
            "  Mixed   CASE  ",
            "shop:",
            "",
            "Ünïcode Störe",
            "a//b||c",
        ];
        for s in samples {
            let once = normalize_shop_name(s);
            assert_eq!(normalize_shop_name(&once), once, "input {:?}", s);
        }
    }

    #[test]
    fn test_signature_canonical() {
        let a = Signature::from_labels(["shop:Beta", "shop:Alpha", "ALPHA"]);
        let b = Signature::from_labels(["alpha", "beta"]);
        assert_eq!(a, b);
        assert_eq!(a.names(), &["alpha".to_string(), "beta".to_string()]);
        assert!(a.contains("beta"));
        assert!(!a.contains("gamma"));
    }

    #[test]
    fn test_signature_drops_empty_names() {
        let sig = Signature::from_labels(["shop:", "  ", "|"]);
        assert!(sig.is_empty());
        assert_eq!(sig, Signature::empty());
    }

    #[test]
    fn test_signature_deserialize_canonicalizes() {
        let sig: Signature = serde_json::from_str(r#"["shop:Beta", "Alpha"]"#).unwrap();
        assert_eq!(sig.names(), &["alpha".to_string(), "beta".to_string()]);
        assert_eq!(serde_json::to_string(&sig).unwrap(), r#"["alpha","beta"]"#);
    }

    #[test]
    fn test_region_label_display() {
        assert_eq!(RegionLabel::Background.to_string(), "background");
        assert_eq!(RegionLabel::region("shop", "Zara").to_string(), "shop:Zara");
        assert_eq!(RegionLabel::region("shop", "Zara").kind(), Some("shop"));
        assert_eq!(RegionLabel::Background.name(), None);
    }
}
