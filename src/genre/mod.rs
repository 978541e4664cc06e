//! Artist → genre classification.
//!
//! The engine only depends on the [`GenreClassifier`] contract. The bundled
//! [`GenreRegistry`] merges a built-in artist table with artists from the
//! config file and falls back to keyword heuristics, then to `"Other"`.

mod builtin;

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use builtin::BUILTIN_ARTISTS;

/// Label returned when nothing else matches.
pub const FALLBACK_GENRE: &str = "Other";

/// Maps an artist credit to ordered genre labels.
pub trait GenreClassifier {
    /// Non-empty, deterministic, never fails.
    fn classify(&self, artist: &str) -> Vec<String>;
}

/// Config file artist definition (deserialized from TOML).
#[derive(Debug, Deserialize, Clone)]
pub struct CustomArtistConfig {
    pub name: String,
    pub genres: Vec<String>,
}

/// A single artist entry with its genres.
#[derive(Debug, Clone)]
pub struct ArtistEntry {
    pub name: String,
    pub genres: Vec<String>,
    /// Lowercase name for partial matching
    lower: String,
}

#[derive(Debug)]
pub struct GenreRegistry {
    artists: Vec<ArtistEntry>,
    /// Maps exact artist name → index in `artists`
    name_to_index: HashMap<String, usize>,
}

// Separators between collaborating artists in a single credit
static CREDIT_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[,&]").unwrap());

/// Keyword heuristics, tried in order against the lowercase credit.
const KEYWORD_RULES: &[(&[&str], &[&str])] = &[
    (&["dj", "remix"], &["Electronic", "Dance"]),
    (&["jazz", "quartet"], &["Jazz"]),
    (&["orchestra", "symphony"], &["Classical", "Orchestral"]),
    (&["mc ", " mc"], &["Hip-Hop", "Rap"]),
];

impl Default for GenreRegistry {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl GenreRegistry {
    pub fn new(custom_artists: &[CustomArtistConfig]) -> Self {
        let mut artists: Vec<ArtistEntry> = BUILTIN_ARTISTS
            .iter()
            .map(|(name, genres)| {
                ArtistEntry::new(name, genres.iter().map(|g| g.to_string()).collect())
            })
            .collect();

        for custom in custom_artists {
            if custom.genres.is_empty() {
                log::warn!("Ignoring custom artist {:?} with no genres", custom.name);
                continue;
            }
            let lower = custom.name.to_lowercase();
            match artists.iter_mut().find(|a| a.lower == lower) {
                Some(entry) => entry.genres = custom.genres.clone(),
                None => artists.push(ArtistEntry::new(&custom.name, custom.genres.clone())),
            }
        }

        let mut name_to_index = HashMap::new();
        for (i, artist) in artists.iter().enumerate() {
            name_to_index.insert(artist.name.clone(), i);
        }

        GenreRegistry {
            artists,
            name_to_index,
        }
    }

    fn exact(&self, name: &str) -> Option<&[String]> {
        self.name_to_index
            .get(name)
            .map(|&i| self.artists[i].genres.as_slice())
    }

    /// First entry whose name contains the credit or is contained by it.
    fn partial(&self, lower: &str) -> Option<&[String]> {
        self.artists
            .iter()
            .find(|a| lower.contains(a.lower.as_str()) || a.lower.contains(lower))
            .map(|a| a.genres.as_slice())
    }

    fn lookup(&self, name: &str) -> Option<&[String]> {
        self.exact(name).or_else(|| self.partial(&name.to_lowercase()))
    }

    /// Get all artist entries.
    pub fn artists(&self) -> &[ArtistEntry] {
        &self.artists
    }
}

impl ArtistEntry {
    fn new(name: &str, genres: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            lower: name.to_lowercase(),
            genres,
        }
    }
}

impl GenreClassifier for GenreRegistry {
    fn classify(&self, artist: &str) -> Vec<String> {
        let artist = artist.trim();
        // Blank text would partially match every entry; it is Other instead
        if artist.is_empty() {
            return vec![FALLBACK_GENRE.to_string()];
        }

        if let Some(genres) = self.lookup(artist) {
            return genres.to_vec();
        }

        // Compound credit: first collaborator with a match wins
        for part in CREDIT_SEPARATOR.split(artist).map(str::trim) {
            // Same for an empty part such as the tail of "A, "
            if part.is_empty() {
                continue;
            }
            if let Some(genres) = self.lookup(part) {
                return genres.to_vec();
            }
        }

        let lower = artist.to_lowercase();
        for (keywords, genres) in KEYWORD_RULES {
            if keywords.iter().any(|k| lower.contains(k)) {
                return genres.iter().map(|g| g.to_string()).collect();
            }
        }

        vec![FALLBACK_GENRE.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_registry() -> GenreRegistry {
        GenreRegistry::new(&[])
    }

    #[test]
    fn test_exact_match() {
        let reg = test_registry();
        assert_eq!(reg.classify("Bon Iver"), vec!["Indie Folk", "Alternative"]);
        assert_eq!(reg.classify("Tyler, The Creator"), vec!["Hip-Hop", "Alternative Hip-Hop"]);
    }

    #[test]
    fn test_partial_match_is_case_insensitive() {
        let reg = test_registry();
        assert_eq!(reg.classify("daft punk"), vec!["Electronic", "House"]);
        assert_eq!(
            reg.classify("Kendrick Lamar feat. Someone"),
            vec!["Hip-Hop", "Conscious Rap"]
        );
    }

    #[test]
    fn test_compound_credit_uses_known_collaborator() {
        let custom = vec![CustomArtistConfig {
            name: "Zqxv Bee".to_string(),
            genres: vec!["Zydeco".to_string()],
        }];
        let reg = GenreRegistry::new(&custom);
        assert_eq!(reg.classify("Qwpl Ayy, Zqxv Bee"), vec!["Zydeco"]);
        assert_eq!(reg.classify("Qwpl Ayy & Zqxv Bee"), vec!["Zydeco"]);
    }

    #[test]
    fn test_compound_credit_matches_per_part() {
        // Only the single credited part is a substring of the known name
        let custom = vec![CustomArtistConfig {
            name: "Zqxv Bee Collective".to_string(),
            genres: vec!["Afrobeat".to_string()],
        }];
        let reg = GenreRegistry::new(&custom);
        assert_eq!(reg.classify("Qwpl Ayy, Zqxv Bee"), vec!["Afrobeat"]);
        assert_eq!(reg.classify("Qwpl Ayy"), vec!["Other"]);
    }

    #[test]
    fn test_keyword_heuristics() {
        let reg = test_registry();
        assert_eq!(reg.classify("Xqz DJ Krrp"), vec!["Electronic", "Dance"]);
        assert_eq!(reg.classify("Vvq Quartet"), vec!["Jazz"]);
        assert_eq!(reg.classify("Prrg Symphony"), vec!["Classical", "Orchestral"]);
        assert_eq!(reg.classify("MC Zzyx"), vec!["Hip-Hop", "Rap"]);
    }

    #[test]
    fn test_unknown_and_blank_fall_back_to_other() {
        let reg = test_registry();
        assert_eq!(reg.classify("Qqqxzv Wwwpk"), vec!["Other"]);
        assert_eq!(reg.classify(""), vec!["Other"]);
        assert_eq!(reg.classify("   "), vec!["Other"]);
        assert_eq!(reg.classify("Qqqxzv Wwwpk, "), vec!["Other"]);
        assert_eq!(reg.classify(" & , "), vec!["Other"]);
    }

    #[test]
    fn test_custom_artist_overrides_builtin() {
        let custom = vec![CustomArtistConfig {
            name: "bon iver".to_string(),
            genres: vec!["Chamber Folk".to_string()],
        }];
        let reg = GenreRegistry::new(&custom);
        assert_eq!(reg.classify("Bon Iver"), vec!["Chamber Folk"]);
        assert_eq!(reg.artists().len(), BUILTIN_ARTISTS.len());
    }

    #[test]
    fn test_custom_artist_appended() {
        let custom = vec![CustomArtistConfig {
            name: "The Zqxv".to_string(),
            genres: vec!["Garage Rock".to_string()],
        }];
        let reg = GenreRegistry::new(&custom);
        assert_eq!(reg.classify("The Zqxv"), vec!["Garage Rock"]);
        assert_eq!(reg.artists().len(), BUILTIN_ARTISTS.len() + 1);
    }

    #[test]
    fn test_custom_artist_without_genres_ignored() {
        let custom = vec![CustomArtistConfig {
            name: "Qqqxzv".to_string(),
            genres: vec![],
        }];
        let reg = GenreRegistry::new(&custom);
        assert_eq!(reg.classify("Qqqxzv"), vec!["Other"]);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let reg = test_registry();
        for name in ["Madness", "M-Beat, General Levy", "Someone & DJ Thing"] {
            assert_eq!(reg.classify(name), reg.classify(name));
        }
    }
}
