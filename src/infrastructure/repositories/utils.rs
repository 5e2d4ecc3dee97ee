/// Escapes `LIKE` metacharacters so user input matches literally under `ESCAPE '\'`.
pub fn escape_like_pattern(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
