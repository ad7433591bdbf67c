//! Scheme kinds and their name tokens

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ColorError;

/// The six geometric rules for building a scheme from a base color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemeKind {
    /// Base plus its opposite on the wheel
    Complementary,
    /// Neighbours at ±30° steps
    Analogous,
    /// Three colors 120° apart
    Triadic,
    /// Four colors 90° apart
    Tetradic,
    /// One hue, lightness ramp from dark to light
    Monochromatic,
    /// Small hue drift with decreasing saturation and increasing value
    Harmonic,
}

impl SchemeKind {
    pub const ALL: [SchemeKind; 6] = [
        SchemeKind::Complementary,
        SchemeKind::Analogous,
        SchemeKind::Triadic,
        SchemeKind::Tetradic,
        SchemeKind::Monochromatic,
        SchemeKind::Harmonic,
    ];

    /// Upper-case token, as accepted by [`FromStr`] and used in JSON
    pub fn token(self) -> &'static str {
        match self {
            SchemeKind::Complementary => "COMPLEMENTARY",
            SchemeKind::Analogous => "ANALOGOUS",
            SchemeKind::Triadic => "TRIADIC",
            SchemeKind::Tetradic => "TETRADIC",
            SchemeKind::Monochromatic => "MONOCHROMATIC",
            SchemeKind::Harmonic => "HARMONIC",
        }
    }

    /// Token stored by older catalog records
    pub fn legacy_token(self) -> &'static str {
        match self {
            SchemeKind::Complementary => "COMPLEMENTARIO",
            SchemeKind::Analogous => "ANALOGO",
            SchemeKind::Triadic => "TRIADICO",
            SchemeKind::Tetradic => "TETRADICO",
            SchemeKind::Monochromatic => "MONOCROMATICO",
            SchemeKind::Harmonic => "ARMONICO",
        }
    }

    /// Human-readable name
    pub fn label(self) -> &'static str {
        match self {
            SchemeKind::Complementary => "Complementary",
            SchemeKind::Analogous => "Analogous",
            SchemeKind::Triadic => "Triadic",
            SchemeKind::Tetradic => "Tetradic",
            SchemeKind::Monochromatic => "Monochromatic",
            SchemeKind::Harmonic => "Harmonic",
        }
    }

    /// Number of colors for schemes whose size does not depend on a count
    pub fn fixed_len(self) -> Option<usize> {
        match self {
            SchemeKind::Complementary => Some(2),
            SchemeKind::Triadic => Some(3),
            SchemeKind::Tetradic => Some(4),
            SchemeKind::Analogous | SchemeKind::Monochromatic | SchemeKind::Harmonic => None,
        }
    }
}

impl FromStr for SchemeKind {
    type Err = ColorError;

    /// Case-insensitive; surrounding whitespace is ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        SchemeKind::ALL
            .into_iter()
            .find(|kind| {
                token.eq_ignore_ascii_case(kind.token())
                    || token.eq_ignore_ascii_case(kind.legacy_token())
            })
            .ok_or_else(|| ColorError::UnknownScheme {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("triadic".parse::<SchemeKind>().unwrap(), SchemeKind::Triadic);
        assert_eq!("Harmonic".parse::<SchemeKind>().unwrap(), SchemeKind::Harmonic);
        assert_eq!(" TETRADIC ".parse::<SchemeKind>().unwrap(), SchemeKind::Tetradic);
    }

    #[test]
    fn test_parse_legacy_tokens() {
        assert_eq!(
            "monocromatico".parse::<SchemeKind>().unwrap(),
            SchemeKind::Monochromatic
        );
        assert_eq!("ARMONICO".parse::<SchemeKind>().unwrap(), SchemeKind::Harmonic);
        assert_eq!("Analogo".parse::<SchemeKind>().unwrap(), SchemeKind::Analogous);
    }

    #[test]
    fn test_parse_unknown() {
        match "no_such_scheme".parse::<SchemeKind>() {
            Err(ColorError::UnknownScheme { name }) => assert_eq!(name, "no_such_scheme"),
            other => panic!("expected UnknownScheme, got {other:?}"),
        }
        assert!("".parse::<SchemeKind>().is_err());
    }

    #[test]
    fn test_tokens_roundtrip_through_parse() {
        for kind in SchemeKind::ALL {
            assert_eq!(kind.token().parse::<SchemeKind>().unwrap(), kind);
            assert_eq!(kind.legacy_token().parse::<SchemeKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_serde_uses_token() {
        let json = serde_json::to_string(&SchemeKind::Monochromatic).unwrap();
        assert_eq!(json, "\"MONOCHROMATIC\"");
        let kind: SchemeKind = serde_json::from_str("\"ANALOGOUS\"").unwrap();
        assert_eq!(kind, SchemeKind::Analogous);
    }

    #[test]
    fn test_fixed_len() {
        assert_eq!(SchemeKind::Complementary.fixed_len(), Some(2));
        assert_eq!(SchemeKind::Tetradic.fixed_len(), Some(4));
        assert_eq!(SchemeKind::Monochromatic.fixed_len(), None);
    }
}
