const OPENING: [char; 3] = ['(', '[', '{'];
const CLOSING: [char; 3] = [')', ']', '}'];

/// Checks whether the brackets `()`, `[]` and `{}` in `input` are balanced and properly nested. Every other character is ignored.
///
/// # Example
/// ```rust
/// use positree::algorithms::is_matched;
///
/// assert!(is_matched("( )(( )){([( )])}"));
/// assert!(is_matched(""));
/// assert!(!is_matched(")(( )){([( )])}"));
/// assert!(!is_matched("({[ ])}"));
/// assert!(!is_matched("("));
/// ```
pub fn is_matched(input: &str) -> bool {
    let mut stack = Vec::new();
    for c in input.chars() {
        if let Some(kind) = OPENING.iter().position(|&open| open == c) {
            stack.push(kind);
        } else if let Some(kind) = CLOSING.iter().position(|&close| close == c) {
            if stack.pop() != Some(kind) {
                return false;
            }
        }
    }
    stack.is_empty()
}
