/// Normalise un symbole NSE : espaces retirés, majuscules.
/// Retourne None si le symbole est vide après nettoyage.
pub fn normalize_symbol(raw: &str) -> Option<String> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_variants_resolve_to_same_key() {
        for raw in ["tcs", "TCS", " Tcs ", "\ttcS\n"] {
            assert_eq!(normalize_symbol(raw).as_deref(), Some("TCS"));
        }
    }

    #[test]
    fn test_normalize_blank() {
        assert_eq!(normalize_symbol(""), None);
        assert_eq!(normalize_symbol("   "), None);
    }

    #[test]
    fn test_normalize_keeps_inner_characters() {
        assert_eq!(normalize_symbol("m&m").as_deref(), Some("M&M"));
        assert_eq!(normalize_symbol("bajaj-auto").as_deref(), Some("BAJAJ-AUTO"));
    }
}
