//! Idempotency rewrite for catalog definitions.
//!
//! The catalog stores each object definition exactly as it was typed, so
//! re-applying a schema template against a partially-initialized database
//! would fail on the first object that already exists. This pass inserts
//! `IF NOT EXISTS` into every recognized `CREATE` statement, making the
//! template safe to run any number of times.
//!
//! The scan is deliberately not a SQL parser. It matches the leading
//! clause keywords and checks the first character of the object name
//! against the four quoting styles SQLite accepts, and leaves anything
//! else untouched. Keyword matching is case-sensitive: the catalog holds
//! definitions as authored, and the schema this tool consumes is written
//! in uppercase.

/// Qualifiers that may appear between `CREATE` and the object keyword.
const QUALIFIERS: [&str; 3] = ["TEMPORARY", "VIRTUAL", "UNIQUE"];

/// Object keywords eligible for an `IF NOT EXISTS` guard.
const OBJECT_KEYWORDS: [&str; 4] = ["TABLE", "INDEX", "VIEW", "TRIGGER"];

/// Opening delimiters of a quoted or bracketed object name.
const NAME_DELIMITERS: [char; 4] = ['"', '\'', '`', '['];

/// Insert `IF NOT EXISTS` into a `CREATE` statement.
///
/// The statement must start with `CREATE`, optionally followed by one of
/// `TEMPORARY`, `VIRTUAL`, or `UNIQUE`, then one of `TABLE`, `INDEX`,
/// `VIEW`, or `TRIGGER`, with the object name opening in one of the four
/// delimiter styles. Returns `None` when the scan does not complete;
/// callers write such statements through unchanged.
pub fn make_idempotent(definition: &str) -> Option<String> {
    let mut pos = keyword(definition, 0, "CREATE")?;
    pos = whitespace(definition, pos)?;

    if let Some(after_qualifier) = QUALIFIERS.iter().find_map(|qualifier| {
        let end = keyword(definition, pos, qualifier)?;
        whitespace(definition, end)
    }) {
        pos = after_qualifier;
    }

    pos = OBJECT_KEYWORDS
        .iter()
        .find_map(|object| keyword(definition, pos, object))?;
    pos = whitespace(definition, pos).unwrap_or(pos);

    let next = definition[pos..].chars().next()?;
    if !NAME_DELIMITERS.contains(&next) {
        return None;
    }

    let guard = "IF NOT EXISTS ";
    let mut rewritten = String::with_capacity(definition.len() + guard.len());
    rewritten.push_str(&definition[..pos]);
    rewritten.push_str(guard);
    rewritten.push_str(&definition[pos..]);
    Some(rewritten)
}

/// Match `word` at `pos`, returning the position just past it.
fn keyword(text: &str, pos: usize, word: &str) -> Option<usize> {
    text[pos..].starts_with(word).then(|| pos + word.len())
}

/// Consume at least one whitespace character, returning the position
/// after the run.
fn whitespace(text: &str, pos: usize) -> Option<usize> {
    let rest = &text[pos..];
    let trimmed = rest.trim_start();
    if trimmed.len() == rest.len() {
        return None;
    }
    Some(pos + (rest.len() - trimmed.len()))
}
