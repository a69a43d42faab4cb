/// Cleans free-form party names.
///
/// Keeps alphabetic characters (any script) and spaces, drops everything
/// else, then trims the result.
#[derive(Debug, Default, Clone, Copy)]
pub struct NameNormalizer;

impl NameNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, name: &str) -> String {
        let kept: String = name
            .chars()
            .filter(|c| c.is_alphabetic() || *c == ' ')
            .collect();
        kept.trim().to_string()
    }
}
