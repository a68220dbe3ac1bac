//! Proficiency level ceiling and tag matching

/// Tag prefix used by the HSK 3.0 ("new") level markers
pub const DEFAULT_LEVEL_PREFIX: &str = "new-";

/// Highest proficiency level a vocabulary entry may be tagged with
///
/// A ceiling of `N` accepts any tag containing `{prefix}1` .. `{prefix}N` as a
/// substring. Matching is by containment, so with the default prefix
/// `new-2-up` matches level 2, and `new-12` also matches level 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LevelCeiling(u32);

impl LevelCeiling {
    /// Ceiling used when none is configured
    pub const DEFAULT: LevelCeiling = LevelCeiling(3);

    /// Create a ceiling, rejecting zero
    pub fn new(max_level: u32) -> Result<Self, String> {
        if max_level == 0 {
            return Err("max_level must be at least 1".to_string());
        }
        Ok(Self(max_level))
    }

    /// Get the numeric ceiling
    pub fn get(&self) -> u32 {
        self.0
    }

    /// Substring patterns for every accepted level, lowest first
    pub fn patterns(&self, prefix: &str) -> Vec<String> {
        (1..=self.0).map(|i| format!("{}{}", prefix, i)).collect()
    }

    /// Check whether a single tag names an accepted level
    pub fn accepts_tag(&self, tag: &str, prefix: &str) -> bool {
        (1..=self.0).any(|i| tag.contains(&format!("{}{}", prefix, i)))
    }

    /// Find the first tag that names an accepted level
    ///
    /// Tags after the first match are not examined.
    pub fn first_accepted<'a, I, S>(&self, tags: I, prefix: &str) -> Option<&'a str>
    where
        I: IntoIterator<Item = &'a S>,
        S: AsRef<str> + ?Sized + 'a,
    {
        let patterns = self.patterns(prefix);
        tags.into_iter()
            .map(|tag: &'a S| -> &'a str { tag.as_ref() })
            .find(|tag| patterns.iter().any(|p| tag.contains(p.as_str())))
    }
}

impl Default for LevelCeiling {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for LevelCeiling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for LevelCeiling {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| format!("Invalid level ceiling: {}", s))?;
        Self::new(value)
    }
}
