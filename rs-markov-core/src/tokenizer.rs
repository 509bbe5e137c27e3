/// Characters separating two words in a corpus.
///
/// Only spaces and line breaks delimit words; tabs and punctuation are kept
/// inside the token they belong to.
const DELIMITERS: [char; 3] = [' ', '\r', '\n'];

/// Splits raw text into an ordered sequence of word tokens.
///
/// - Runs of delimiters count as a single separator
/// - Leading and trailing delimiters never produce empty tokens
/// - No normalization is applied: tokens are exact substrings of `text`
pub fn tokenize(text: &str) -> Vec<String> {
	text.split(DELIMITERS)
		.filter(|token| !token.is_empty())
		.map(str::to_owned)
		.collect()
}
