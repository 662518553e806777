//! Line-level directive parser

/// A recognised directive with its raw argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `#l` / `#load`: another script to include
    Load(String),
    /// `#r` / `#reference`: an assembly path or package identifier
    Reference(String),
    /// `using Namespace;`
    Using(String),
    /// `#addin`: a package providing script aliases
    Addin(String),
    /// `#tool`: a package providing an executable
    Tool(String),
}

/// Classification of one source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Directive(Directive),
    /// A directive keyword whose argument could not be read
    Malformed(&'static str),
    /// Ordinary code, blank lines and comments
    Code,
}

/// Where a `#load` argument points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadTarget {
    /// A file path, relative to the loading script unless absolute
    File(String),
    /// A provider scheme other than `local:` (e.g. `nuget:`)
    Unsupported { scheme: String },
}

impl LoadTarget {
    /// Interpret a raw `#load` argument.
    ///
    /// `local:?path=<p>` and `local:<p>` load `<p>`. A Windows drive prefix
    /// (`C:`) is not a scheme.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let Some((scheme, rest)) = raw.split_once(':') else {
            return Self::File(raw.to_string());
        };

        let is_scheme = scheme.len() > 1 && scheme.chars().all(|c| c.is_ascii_alphabetic());
        if !is_scheme {
            return Self::File(raw.to_string());
        }

        if scheme.eq_ignore_ascii_case("local") {
            let path = rest.strip_prefix("?path=").unwrap_or(rest);
            return Self::File(path.to_string());
        }

        Self::Unsupported {
            scheme: scheme.to_ascii_lowercase(),
        }
    }
}

/// Classify a single line of script source
#[must_use]
pub fn parse_line(line: &str) -> LineKind {
    let line = line.trim();

    if let Some(rest) = line.strip_prefix('#') {
        let keyword_len = rest
            .find(|c: char| c.is_whitespace() || c == '"')
            .unwrap_or(rest.len());
        let (keyword, argument) = rest.split_at(keyword_len);

        let make: fn(String) -> Directive = match keyword {
            "l" | "load" => Directive::Load,
            "r" | "reference" => Directive::Reference,
            "addin" => Directive::Addin,
            "tool" => Directive::Tool,
            _ => return LineKind::Code,
        };

        return match parse_argument(argument) {
            Ok(value) => LineKind::Directive(make(value)),
            Err(reason) => LineKind::Malformed(reason),
        };
    }

    if let Some(rest) = line.strip_prefix("using") {
        if rest.starts_with(char::is_whitespace) {
            let code = rest.split_once("//").map_or(rest, |(code, _)| code);
            return parse_using(code.trim());
        }
    }

    LineKind::Code
}

fn parse_argument(argument: &str) -> Result<String, &'static str> {
    let argument = argument.trim();

    let value = if let Some(quoted) = argument.strip_prefix('"') {
        let end = quoted.find('"').ok_or("missing closing quote")?;
        &quoted[..end]
    } else {
        argument
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .trim_end_matches(';')
    };

    let value = value.trim();
    if value.is_empty() {
        return Err("missing argument");
    }
    Ok(value.to_string())
}

fn parse_using(rest: &str) -> LineKind {
    // `using (...)` blocks, `using var x = ...;`, aliases and `using static`
    // are code, not namespace imports.
    let Some(body) = rest.strip_suffix(';') else {
        return LineKind::Code;
    };
    let body = body.trim();
    if body.starts_with('(') || body.contains('=') || body.starts_with("static ") {
        return LineKind::Code;
    }

    let valid = !body.is_empty()
        && body
            .split('.')
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_alphanumeric() || c == '_'));
    if !valid {
        return LineKind::Malformed("invalid namespace");
    }

    LineKind::Directive(Directive::Using(body.to_string()))
}

/// Iterator over `(line_number, line)` pairs that skips comment-only lines.
///
/// Line numbers are 1-based. A leading byte-order mark is dropped.
pub struct ScriptLines<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    in_block_comment: bool,
}

impl<'a> ScriptLines<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        Self {
            lines: text.lines().enumerate(),
            in_block_comment: false,
        }
    }
}

impl<'a> ScriptLines<'a> {
    /// The code on `line` that sits outside comments.
    ///
    /// Starts at the first visible character. A block comment left open at the
    /// end of the line truncates it and carries over to the following lines.
    fn visible(&mut self, line: &'a str) -> Option<&'a str> {
        let bytes = line.as_bytes();
        let mut start = None;
        let mut end = line.len();
        let mut i = 0;

        while let Some(&byte) = bytes.get(i) {
            let pair = bytes.get(i..i + 2);
            if self.in_block_comment {
                if pair == Some(b"*/".as_slice()) {
                    self.in_block_comment = false;
                    end = line.len();
                    i += 2;
                } else {
                    i += 1;
                }
                continue;
            }

            match byte {
                b'/' if pair == Some(b"//".as_slice()) => break,
                b'/' if pair == Some(b"/*".as_slice()) => {
                    self.in_block_comment = true;
                    end = i;
                    i += 2;
                }
                b'"' | b'\'' => {
                    start.get_or_insert(i);
                    i = skip_literal(bytes, i);
                }
                _ => {
                    if !byte.is_ascii_whitespace() {
                        start.get_or_insert(i);
                    }
                    i += 1;
                }
            }
        }

        start
            .filter(|&start| start < end)
            .and_then(|start| line.get(start..end))
    }
}

/// Index just past the string or char literal opening at `open`.
///
/// Comment markers inside literals (`"src/**/*.cs"`) are not comments.
fn skip_literal(bytes: &[u8], open: usize) -> usize {
    let quote = bytes.get(open).copied();
    let verbatim = quote == Some(b'"') && open > 0 && bytes.get(open - 1) == Some(&b'@');
    let mut i = open + 1;

    while let Some(&byte) = bytes.get(i) {
        if byte == b'\\' && !verbatim {
            i += 2;
        } else if Some(byte) == quote {
            if verbatim && bytes.get(i + 1) == Some(&b'"') {
                i += 2;
            } else {
                return i + 1;
            }
        } else {
            i += 1;
        }
    }
    bytes.len()
}

impl<'a> Iterator for ScriptLines<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((index, line)) = self.lines.next() {
            if let Some(code) = self.visible(line) {
                return Some((index + 1, code));
            }
        }
        None
    }
}
