//! Pure text and JSON edits applied to files of the generated project.

use serde_json::{Map, Value};

/// Literal placeholder replaced with the application name in copied templates.
pub const APP_NAME_PLACEHOLDER: &str = "APP_NAME";

/// Replace every occurrence of a literal token.
pub fn substitute_placeholder(content: &str, token: &str, value: &str) -> String {
    content.replace(token, value)
}

/// Outcome of an injection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Injection {
    Applied(String),
    AlreadyPresent,
    AnchorMissing,
}

fn significant_lines(text: &str) -> Vec<&str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty()).collect()
}

/// True when every non-blank line of `block` appears, in order and adjacent, in `content`.
fn already_contains(content: &str, block: &str) -> bool {
    let wanted = significant_lines(block);
    if wanted.is_empty() {
        return true;
    }
    significant_lines(content).windows(wanted.len()).any(|window| window == wanted.as_slice())
}

/// Insert `block` before the closing `end` line of a Ruby file.
pub fn inject_before_final_end(content: &str, block: &str) -> Injection {
    if already_contains(content, block) {
        return Injection::AlreadyPresent;
    }

    let trimmed = content.trim_end();
    let split = if trimmed == "end" {
        0
    } else if let Some(body) = trimmed.strip_suffix("\nend") {
        body.len() + 1
    } else {
        return Injection::AnchorMissing;
    };

    let mut out = String::with_capacity(content.len() + block.len());
    out.push_str(&content[..split]);
    out.push_str(block);
    out.push_str("end\n");
    Injection::Applied(out)
}

/// Insert `block` directly after the first occurrence of `anchor`.
pub fn inject_after(content: &str, anchor: &str, block: &str) -> Injection {
    if already_contains(content, block) {
        return Injection::AlreadyPresent;
    }

    match content.find(anchor) {
        Some(pos) => {
            let split = pos + anchor.len();
            let mut out = String::with_capacity(content.len() + block.len());
            out.push_str(&content[..split]);
            out.push_str(block);
            out.push_str(&content[split..]);
            Injection::Applied(out)
        }
        None => Injection::AnchorMissing,
    }
}

/// Replace the first line containing `opener` (through its newline) with `replacement`.
pub fn replace_line_containing(content: &str, opener: &str, replacement: &str) -> Option<String> {
    let start = content.find(opener)?;
    let end = content[start..].find('\n').map(|i| start + i + 1).unwrap_or(content.len());
    let mut out = String::with_capacity(content.len() + replacement.len());
    out.push_str(&content[..start]);
    out.push_str(replacement);
    out.push_str(&content[end..]);
    Some(out)
}

/// Path alias table: alias pattern to target list.
pub type PathAliases<'a> = &'a [(&'a str, &'a [&'a str])];

/// Reduce JSON-with-comments (as written to `tsconfig` files) to plain JSON.
///
/// Drops `//` and `/* */` comments and trailing commas; string literals are left untouched.
fn strip_jsonc(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '/' if chars.peek() == Some(&'/') => {
                while chars.peek().is_some_and(|next| *next != '\n') {
                    chars.next();
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut previous = '\0';
                for next in chars.by_ref() {
                    if previous == '*' && next == '/' {
                        break;
                    }
                    previous = next;
                }
                out.push(' ');
            }
            '}' | ']' => {
                let kept = out.trim_end().len();
                if out[..kept].ends_with(',') {
                    out.remove(kept - 1);
                }
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Set `compilerOptions.baseUrl` and `compilerOptions.paths`, keeping every other key.
///
/// Comments in the input are accepted but not carried over. Output is pretty-printed with a
/// trailing newline.
pub fn merge_compiler_paths(
    json: &str,
    base_url: &str,
    aliases: PathAliases<'_>,
) -> Result<String, serde_json::Error> {
    let mut document: Value = serde_json::from_str(&strip_jsonc(json))?;

    let root = match document.as_object_mut() {
        Some(root) => root,
        None => {
            return Err(serde::de::Error::custom("expected a JSON object at the document root"));
        }
    };

    let options = root.entry("compilerOptions").or_insert_with(|| Value::Object(Map::new()));
    if !options.is_object() {
        *options = Value::Object(Map::new());
    }
    if let Some(options) = options.as_object_mut() {
        options.insert("baseUrl".to_string(), Value::String(base_url.to_string()));
        let paths: Map<String, Value> = aliases
            .iter()
            .map(|(alias, targets)| {
                let targets = targets.iter().map(|t| Value::String((*t).to_string())).collect();
                ((*alias).to_string(), Value::Array(targets))
            })
            .collect();
        options.insert("paths".to_string(), Value::Object(paths));
    }

    let mut out = serde_json::to_string_pretty(&document)?;
    out.push('\n');
    Ok(out)
}
