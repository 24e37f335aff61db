use invoicer_fonts::FontHandle;

/// Greedy word wrap of `text` to `max_width` points.
///
/// Explicit newlines always break; runs of spaces collapse; a word wider
/// than the line is broken between characters. Blank text yields no lines.
pub fn wrap_text(font: &FontHandle, text: &str, size: f32, max_width: f32) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let fits = |candidate: &str| font.measure(candidate, size) <= max_width;
    let mut lines = Vec::new();

    for raw_line in text.split('\n') {
        let mut line = String::new();
        for word in raw_line.split_whitespace() {
            if line.is_empty() {
                if fits(word) {
                    line.push_str(word);
                    continue;
                }
            } else {
                let candidate = format!("{line} {word}");
                if fits(&candidate) {
                    line = candidate;
                    continue;
                }
                lines.push(std::mem::take(&mut line));
                if fits(word) {
                    line.push_str(word);
                    continue;
                }
            }

            for ch in word.chars() {
                line.push(ch);
                if !fits(&line) && line.chars().count() > 1 {
                    line.pop();
                    lines.push(std::mem::take(&mut line));
                    line.push(ch);
                }
            }
        }
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    // Builtin metrics: every character is 0.55em, so at 10pt each is 5.5pt.
    fn wrap(text: &str, max_chars: usize) -> Vec<String> {
        wrap_text(&FontHandle::builtin(), text, 10.0, max_chars as f32 * 5.5 + 0.01)
    }

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(wrap("Consulting services", 40), vec!["Consulting services"]);
    }

    #[test]
    fn breaks_between_words() {
        assert_eq!(
            wrap("alpha beta gamma delta", 11),
            vec!["alpha beta", "gamma delta"]
        );
    }

    #[test]
    fn long_word_is_split_by_character() {
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap("ab abcdefgh", 4), vec!["ab", "abcd", "efgh"]);
    }

    #[test]
    fn newlines_and_blank_text() {
        assert_eq!(wrap("one\ntwo", 20), vec!["one", "two"]);
        assert_eq!(wrap("one\n\nthree", 20), vec!["one", "", "three"]);
        assert!(wrap("   ", 20).is_empty());
        assert!(wrap("", 20).is_empty());
    }
}
