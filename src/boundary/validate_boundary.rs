use crate::BoundaryViolation;

/// RFC 2046 section 5.1.1 caps boundaries at 70 bytes.
pub const MAX_BOUNDARY_LEN: usize = 70;

/// Checks a boundary against the RFC 2046 `bchars` grammar.
///
/// A space may appear anywhere except as the final character.
pub fn validate_boundary(boundary: &str) -> Result<(), BoundaryViolation> {
    if boundary.is_empty() {
        return Err(BoundaryViolation::Empty);
    }

    if boundary.len() > MAX_BOUNDARY_LEN {
        return Err(BoundaryViolation::TooLong {
            len: boundary.len(),
        });
    }

    let last_index = boundary.len() - 1;
    for (index, character) in boundary.char_indices() {
        let is_allowed = match character {
            c if c.is_ascii_alphanumeric() => true,
            '\'' | '(' | ')' | '+' | '_' | ',' | '-' | '.' | '/' | ':' | '=' | '?' => true,
            ' ' => index != last_index,
            _ => false,
        };

        if !is_allowed {
            return Err(BoundaryViolation::IllegalCharacter { character, index });
        }
    }

    Ok(())
}
