//! Code-point length bounds

/// Number of Unicode scalar values in `text`
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Inclusive `[min, max]` range of code-point lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthBounds {
    /// Shortest accepted length
    pub min: usize,
    /// Longest accepted length
    pub max: usize,
}

impl LengthBounds {
    /// Create new bounds
    ///
    /// # Panics
    /// Panics if `min` is zero or `min > max`
    pub fn new(min: usize, max: usize) -> Self {
        Self::try_new(min, max).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Create new bounds, reporting invalid ranges as an error
    pub fn try_new(min: usize, max: usize) -> Result<Self, String> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Check the range is non-empty and excludes zero-length text
    pub fn validate(&self) -> Result<(), String> {
        if self.min == 0 {
            return Err("minimum length must be at least 1".to_string());
        }
        if self.min > self.max {
            return Err(format!(
                "minimum length {} exceeds maximum length {}",
                self.min, self.max
            ));
        }
        Ok(())
    }

    /// Check whether a length falls inside the bounds
    pub fn contains(&self, len: usize) -> bool {
        len >= self.min && len <= self.max
    }

    /// Check whether the code-point length of `text` falls inside the bounds
    pub fn fits(&self, text: &str) -> bool {
        self.contains(char_len(text))
    }
}

impl std::fmt::Display for LengthBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
