//! Placeholder text.

use fake::Fake;
use fake::faker::lorem::raw::{Paragraph, Sentence, Word, Words};
use fake::locales::EN;

use super::{LocalFormatter, count_argument, from_table};
use crate::arguments::{Arguments, Value};
use crate::provider::{FnProvider, FormatterResult, FormatterRng};

const DEFAULT_WORDS: usize = 3;
const DEFAULT_SENTENCE_WORDS: usize = 6;
const DEFAULT_PARAGRAPH_SENTENCES: usize = 3;

const FORMATTERS: &[(&str, LocalFormatter)] = &[
    ("paragraph", paragraph),
    ("sentence", sentence),
    ("word", word),
    ("words", words),
];

/// Returns the `lorem` provider.
///
/// `words(nb)`, `sentence(nb_words)` and `paragraph(nb_sentences)` accept
/// their count positionally or by keyword.
#[must_use]
pub fn lorem() -> FnProvider {
    from_table("lorem", FORMATTERS)
}

fn word(rng: &mut FormatterRng, _args: &Arguments) -> FormatterResult {
    let word: String = Word(EN).fake_with_rng(rng);
    Ok(Value::String(word))
}

fn words(rng: &mut FormatterRng, args: &Arguments) -> FormatterResult {
    let nb = count_argument(args, 0, "nb", DEFAULT_WORDS)?;
    let words: Vec<String> = Words(EN, nb..nb + 1).fake_with_rng(rng);
    Ok(Value::from(words))
}

fn sentence(rng: &mut FormatterRng, args: &Arguments) -> FormatterResult {
    let nb = count_argument(args, 0, "nb_words", DEFAULT_SENTENCE_WORDS)?;
    let sentence: String = Sentence(EN, nb..nb + 1).fake_with_rng(rng);
    Ok(Value::String(sentence))
}

fn paragraph(rng: &mut FormatterRng, args: &Arguments) -> FormatterResult {
    let nb = count_argument(args, 0, "nb_sentences", DEFAULT_PARAGRAPH_SENTENCES)?;
    let paragraph: String = Paragraph(EN, nb..nb + 1).fake_with_rng(rng);
    Ok(Value::String(paragraph))
}
