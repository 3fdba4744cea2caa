use std::collections::HashMap;

/// Ordinal encoder mapping each distinct category to an integer code.
///
/// Codes follow the order in which categories are first seen, so the same
/// input always yields the same mapping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LabelEncoder {
    classes: Vec<String>,
    codes: HashMap<String, usize>,
}

impl LabelEncoder {
    /// Learns the categories of `values`.
    pub fn fit<'a, I: IntoIterator<Item = &'a str>>(values: I) -> Self {
        let mut encoder = LabelEncoder::default();
        for value in values {
            if !encoder.codes.contains_key(value) {
                encoder.codes.insert(value.to_string(), encoder.classes.len());
                encoder.classes.push(value.to_string());
            }
        }
        encoder
    }

    /// Categories indexed by their code.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }

    /// Code of a category, `None` if it was never seen during fit.
    pub fn transform(&self, value: &str) -> Option<usize> {
        self.codes.get(value).copied()
    }

    /// Category of a code.
    pub fn inverse_transform(&self, code: usize) -> Option<&str> {
        self.classes.get(code).map(String::as_str)
    }
}
