//! Filename to display title conversion.
//!
//! Every image in the manifest gets a title derived from its filename alone:
//! the extension is dropped, `_` and `-` act as word separators, and each
//! word gets an uppercase first letter.
//!
//! - `my_icon-file.png` → "My Icon File"
//! - `already Title.svg` → "Already Title"
//! - `a.b.c.jpg` → "A.b.c" (only the final extension is stripped)
//! - `___.gif` → "" (nothing left after cleanup; still a valid title)

/// Strip the final extension from a filename.
///
/// Only a dot followed by at least one character counts as an extension
/// separator, so `name.` is returned unchanged while `.png` becomes empty.
pub fn strip_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(dot) if dot + 1 < filename.len() => &filename[..dot],
        _ => filename,
    }
}

/// Turn an image filename (basename with extension) into a display title.
pub fn prettify_title(filename: &str) -> String {
    let base = strip_extension(filename);

    // Runs of `_`/`-` become a single space
    let mut spaced = String::with_capacity(base.len());
    let mut in_separator = false;
    for c in base.chars() {
        if c == '_' || c == '-' {
            if !in_separator {
                spaced.push(' ');
            }
            in_separator = true;
        } else {
            spaced.push(c);
            in_separator = false;
        }
    }

    let collapsed = spaced.split_whitespace().collect::<Vec<_>>().join(" ");
    capitalize_words(&collapsed)
}

/// Uppercase every lowercase letter that starts a word.
///
/// A word starts at the beginning of the string or after any character that
/// is neither alphanumeric nor `.`: `icon(dark)` → `Icon(Dark)`, while
/// `a.b.c` → `A.b.c` and `2nd` stays `2nd`. Letters whose uppercase form is
/// more than one character (`ß`) are left as they are.
fn capitalize_words(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    for c in text.chars() {
        let word_start = prev.is_none_or(|p| !p.is_alphanumeric() && p != '.');
        if word_start && c.is_lowercase() {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => result.push(u),
                _ => result.push(c),
            }
        } else {
            result.push(c);
        }
        prev = Some(c);
    }
    result
}
