/// Greedy word wrap bounded by a character-count budget.
///
/// Words are whitespace-separated. A word that alone exceeds `max_chars` is
/// placed on its own line without being split. Returns no lines for input
/// with no words.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut words = text.split_whitespace();
    let Some(first) = words.next() else {
        return Vec::new();
    };

    let mut lines = Vec::new();
    let mut current = first.to_string();
    let mut current_len = first.chars().count();

    for word in words {
        let word_len = word.chars().count();
        if current_len + 1 + word_len <= max_chars {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }
    lines.push(current);

    lines
}
