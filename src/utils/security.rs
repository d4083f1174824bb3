use subtle::ConstantTimeEq;

// Comparar secretos sin filtrar por tiempo cuántos bytes coinciden
pub fn secrets_match(provided: &str, expected: &str) -> bool {
    provided.as_bytes().ct_eq(expected.as_bytes()).into()
}
