//! Breach history lookup.
//!
//! The analyzer asks a [`BreachLookup`] whether a password appeared in a known
//! data breach. No real data source is wired in; [`NoBreachLookup`] answers
//! `false` for everything.

use secrecy::SecretString;

/// Source of breach-history signals.
pub trait BreachLookup: Send + Sync {
    fn is_breached(&self, password: &SecretString) -> bool;
}

/// Placeholder lookup that never reports a breach.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBreachLookup;

impl BreachLookup for NoBreachLookup {
    fn is_breached(&self, _password: &SecretString) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_breach_lookup_always_false() {
        for pwd in ["", "password", "Abcdefghijk1!"] {
            let pwd = SecretString::new(pwd.to_string().into());
            assert!(!NoBreachLookup.is_breached(&pwd));
        }
    }
}
