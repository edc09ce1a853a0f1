use std::borrow::Cow;
use std::str::SplitWhitespace;

/// Lazy stream of lowercase terms over one line of text. Cheap to clone;
/// a clone resumes from the same position.
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    words: SplitWhitespace<'a>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Self::Item> {
        self.words.next().map(normalize)
    }
}

/// Tokenize text into lowercase terms split on whitespace runs.
/// No punctuation stripping, no stemming.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens { words: text.split_whitespace() }
}

fn normalize(word: &str) -> Cow<'_, str> {
    // titlecase letters (e.g. U+01C5) are not uppercase but still change
    if word.chars().any(|c| c.to_lowercase().ne(std::iter::once(c))) {
        Cow::Owned(word.to_lowercase())
    } else {
        Cow::Borrowed(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let t: Vec<_> = tokenize("London is  the\tcapital").collect();
        assert_eq!(t, ["london", "is", "the", "capital"]);
    }

    #[test]
    fn lowercase_words_are_borrowed() {
        let mut t = tokenize("milk Water");
        assert!(matches!(t.next(), Some(Cow::Borrowed("milk"))));
        assert!(matches!(t.next(), Some(Cow::Owned(ref w)) if w == "water"));
    }

    #[test]
    fn titlecase_letters_are_lowercased() {
        let t: Vec<_> = tokenize("\u{01C5}ungla \u{1F88}").collect();
        assert_eq!(t, ["\u{01C6}ungla", "\u{1F80}"]);
    }

    #[test]
    fn empty_and_blank_lines_yield_nothing() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize(" \t  ").count(), 0);
    }
}
