use docsearch_core::tokenizer::tokenize;

#[test]
fn it_lowercases_without_stemming() {
    let words: Vec<String> = tokenize("Running Runners RUN!").map(|w| w.into_owned()).collect();
    assert_eq!(words, ["running", "runners", "run!"]);
}

#[test]
fn it_keeps_punctuation_attached() {
    let words: Vec<String> = tokenize("the café's menu, please.").map(|w| w.into_owned()).collect();
    assert!(words.contains(&"café's".to_string()));
    assert!(words.contains(&"menu,".to_string()));
    assert!(!words.contains(&"menu".to_string()));
}

#[test]
fn it_is_restartable() {
    let toks = tokenize("tell me the meaning of being lonely");
    let first: Vec<_> = toks.clone().collect();
    let second: Vec<_> = toks.collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 7);
}

#[test]
fn it_lowercases_titlecase_letters() {
    let words: Vec<String> = tokenize("\u{01C5}ungla \u{01C8}ubljana \u{01F2}").map(|w| w.into_owned()).collect();
    assert_eq!(words, ["\u{01C6}ungla", "\u{01C9}ubljana", "\u{01F3}"]);
}
