use crate::method::Method;

/// Parameters gathered for a single transform call
#[derive(Debug, Clone)]
pub struct TransformOptions {
    pub method: Method,
    /// Caesar shift; any integer, reduced modulo 26
    pub shift: i64,
    /// Rail fence rail count
    pub rails: usize,
    /// Vigenère, Polybios and table-shift key
    pub key: Option<String>,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            method: Method::default(),
            shift: 3,
            rails: 2,
            key: None,
        }
    }
}

impl TransformOptions {
    pub fn for_method(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_shift(mut self, shift: i64) -> Self {
        self.shift = shift;
        self
    }

    pub fn with_rails(mut self, rails: usize) -> Self {
        self.rails = rails;
        self
    }
}

/// Encrypt or decrypt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_form_defaults() {
        let opts = TransformOptions::default();
        assert_eq!(opts.method, Method::Caesar);
        assert_eq!(opts.shift, 3);
        assert_eq!(opts.rails, 2);
        assert!(opts.key.is_none());
    }

    #[test]
    fn test_builders() {
        let opts = TransformOptions::for_method(Method::RailFence)
            .with_rails(5)
            .with_shift(-4)
            .with_key("LEMON");
        assert_eq!(opts.method, Method::RailFence);
        assert_eq!(opts.rails, 5);
        assert_eq!(opts.shift, -4);
        assert_eq!(opts.key.as_deref(), Some("LEMON"));
    }
}
