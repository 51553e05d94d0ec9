use thiserror::Error;

/// A template source cut at its `${ ... }` interpolations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SplitTemplate {
    pub fragments: Vec<String>,
    pub expressions: Vec<Interpolation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpolation {
    /// Expression text between `${` and `}`, trimmed.
    pub source: String,
    /// Byte offset of the `$` in the original source.
    pub offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    #[error("unterminated interpolation starting at byte {offset}")]
    Unterminated { offset: usize },
}

/// Split `source` into literal fragments and interpolated expressions.
///
/// There is always one more fragment than expressions. `\$` produces a
/// literal `$`. Braces inside string and char literals of an expression
/// do not count towards nesting.
pub fn split_template(source: &str) -> Result<SplitTemplate, SplitError> {
    let bytes = source.as_bytes();
    let mut out = SplitTemplate::default();
    let mut current = String::new();
    let mut run_start = 0usize;
    let mut i = 0usize;

    while i < bytes.len() {
        if bytes[i] == b'\\' && bytes.get(i + 1) == Some(&b'$') {
            current.push_str(&source[run_start..i]);
            current.push('$');
            i += 2;
            run_start = i;
        } else if bytes[i] == b'$' && bytes.get(i + 1) == Some(&b'{') {
            current.push_str(&source[run_start..i]);
            out.fragments.push(std::mem::take(&mut current));
            let close = find_close(bytes, i + 2).ok_or(SplitError::Unterminated { offset: i })?;
            out.expressions.push(Interpolation {
                source: source[i + 2..close].trim().to_string(),
                offset: i,
            });
            i = close + 1;
            run_start = i;
        } else {
            i += 1;
        }
    }
    current.push_str(&source[run_start..]);
    out.fragments.push(current);
    Ok(out)
}

/// Index of the `}` that closes an interpolation body starting at `start`.
fn find_close(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut i = start;
    while i < bytes.len() {
        let b = bytes[i];
        if in_string {
            match b {
                b'\\' => i += 1,
                b'"' => in_string = false,
                _ => {}
            }
        } else {
            match b {
                b'"' => in_string = true,
                // char literal such as '}' or '\''
                b'\'' if bytes.get(i + 2) == Some(&b'\'') => i += 2,
                b'\'' if bytes.get(i + 1) == Some(&b'\\') && bytes.get(i + 3) == Some(&b'\'') => {
                    i += 3
                }
                b'{' => depth += 1,
                b'}' if depth == 0 => return Some(i),
                b'}' => depth -= 1,
                _ => {}
            }
        }
        i += 1;
    }
    None
}
