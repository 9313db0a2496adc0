//! Line scanner shared by the lint rules
//!
//! The scanner does not build a YAML tree. It classifies each physical line
//! and produces a masked copy of its code: characters inside quoted scalars
//! are replaced with `x`, brackets and commas that are not flow indicators
//! are masked the same way, and comments are cut off. Rules can then search
//! the masked code for indicators without tripping over string content.

use regex::Regex;
use std::sync::OnceLock;

/// Placeholder for masked characters
pub const MASK: char = 'x';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace only
    Blank,
    /// Nothing but a comment
    Comment,
    /// `%YAML` or `%TAG`
    Directive,
    /// `---`, optionally followed by content
    DocumentStart,
    /// `...`
    DocumentEnd,
    Content,
    /// Body of a literal or folded block scalar
    BlockScalar,
    /// Starts inside a quoted scalar or flow collection opened earlier
    Continuation,
}

/// A classified physical line
#[derive(Debug, Clone)]
pub struct Line {
    /// 1-based line number
    pub number: usize,

    /// Raw text without the line terminator
    pub text: String,

    /// Line was terminated by `\r\n`
    pub crlf: bool,

    pub kind: LineKind,

    /// Count of leading spaces
    pub indent: usize,

    /// Masked code, comment removed, trailing whitespace trimmed
    pub code: Vec<char>,

    /// Char index of the `#` opening a comment
    pub comment: Option<usize>,

    /// Flow nesting depth at the start of the line
    pub flow_depth: usize,
}

impl Line {
    /// Raw text as chars
    pub fn chars(&self) -> Vec<char> {
        self.text.chars().collect()
    }

    /// Length in chars
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether rules looking at block structure should inspect this line
    pub fn is_structural(&self) -> bool {
        matches!(self.kind, LineKind::Content) && self.flow_depth == 0
    }

    /// Whether the line has anything besides whitespace and comments
    pub fn has_code(&self) -> bool {
        !self.code.is_empty()
    }

    /// Columns of the block sequence hyphens that prefix the line
    pub fn hyphens(&self) -> Vec<usize> {
        let mut cols = Vec::new();
        let mut i = self.indent;
        while i < self.code.len() && self.code[i] == '-' {
            let next = self.code.get(i + 1).copied();
            if next.is_some() && next != Some(' ') {
                break;
            }
            cols.push(i);
            i += 1;
            while i < self.code.len() && self.code[i] == ' ' {
                i += 1;
            }
        }
        cols
    }

    /// Line opens with a block sequence entry
    pub fn is_sequence_item(&self) -> bool {
        !self.hyphens().is_empty()
    }

    /// Column of the node that follows any sequence hyphens
    pub fn node_indent(&self) -> usize {
        let mut i = self.indent;
        for col in self.hyphens() {
            i = col + 1;
            while i < self.code.len() && self.code[i] == ' ' {
                i += 1;
            }
        }
        i
    }

    /// Char index of the colon that makes this line a block mapping entry
    pub fn key_colon(&self) -> Option<usize> {
        if self.flow_depth > 0 {
            return None;
        }
        let start = self.node_indent();
        let mut depth = 0usize;
        for i in start..self.code.len() {
            match self.code[i] {
                '[' | '{' => depth += 1,
                ']' | '}' => depth = depth.saturating_sub(1),
                ':' if depth == 0 && is_value_boundary(self.code.get(i + 1).copied()) => {
                    return Some(i);
                }
                _ => {}
            }
        }
        None
    }

    /// Raw key text of a block mapping entry, quotes removed
    pub fn key(&self) -> Option<(usize, String)> {
        let colon = self.key_colon()?;
        let start = self.node_indent();
        let raw: String = self.chars()[start..colon].iter().collect();
        let trimmed = raw.trim_end();
        let key = if trimmed.len() >= 2
            && ((trimmed.starts_with('"') && trimmed.ends_with('"'))
                || (trimmed.starts_with('\'') && trimmed.ends_with('\'')))
        {
            trimmed[1..trimmed.len() - 1].to_string()
        } else {
            trimmed.to_string()
        };
        Some((start, key))
    }

    /// Masked code after the mapping colon, trimmed
    pub fn value_code(&self) -> Option<String> {
        let colon = self.key_colon()?;
        let value: String = self.code[colon + 1..].iter().collect();
        Some(value.trim().to_string())
    }

    /// The line ends a block mapping key or bare hyphen, so its value is
    /// the nested block that follows
    pub fn opens_block(&self) -> bool {
        if !self.is_structural() {
            return false;
        }
        match self.value_code() {
            Some(value) => value.is_empty() || is_node_property_only(&value),
            None => self.is_sequence_item() && self.node_indent() >= self.code.len(),
        }
    }
}

/// A colon is a mapping indicator when followed by whitespace, a flow
/// indicator or the end of the code
pub fn is_value_boundary(next: Option<char>) -> bool {
    matches!(next, None | Some(' ') | Some('\t') | Some(',') | Some(']') | Some('}'))
}

/// Value consists only of an anchor and/or tag
fn is_node_property_only(value: &str) -> bool {
    value
        .split_whitespace()
        .all(|token| token.starts_with('&') || token.starts_with('!'))
}

fn block_indicator_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(^|\s)[|>][0-9+-]{0,2}$").expect("block indicator pattern is valid")
    })
}

/// Scanned document
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub lines: Vec<Line>,

    /// Raw input ended with `\n`
    pub ends_with_newline: bool,
}

impl Document {
    /// Scan YAML text into classified lines
    pub fn parse(text: &str) -> Self {
        let mut pieces: Vec<&str> = text.split('\n').collect();
        let ends_with_newline = text.ends_with('\n');
        if ends_with_newline || text.is_empty() {
            pieces.pop();
        }

        let mut scanner = Scanner::default();
        let lines = pieces
            .into_iter()
            .enumerate()
            .map(|(idx, piece)| scanner.scan_line(idx + 1, piece))
            .collect();

        Self {
            lines,
            ends_with_newline,
        }
    }

    /// Index of the next line after `idx` carrying code, skipping
    /// comments and blanks
    pub fn next_code_line(&self, idx: usize) -> Option<&Line> {
        self.lines[idx + 1..]
            .iter()
            .find(|l| !matches!(l.kind, LineKind::Blank | LineKind::Comment))
    }

    /// Previous line before `idx` carrying code
    pub fn prev_code_line(&self, idx: usize) -> Option<&Line> {
        self.lines[..idx]
            .iter()
            .rev()
            .find(|l| !matches!(l.kind, LineKind::Blank | LineKind::Comment))
    }
}

#[derive(Debug, Default)]
struct Scanner {
    quote: Option<char>,
    flow_depth: usize,
    /// Lines indented deeper than this belong to an open block scalar
    block_parent: Option<isize>,
}

impl Scanner {
    fn scan_line(&mut self, number: usize, piece: &str) -> Line {
        let (text, crlf) = match piece.strip_suffix('\r') {
            Some(stripped) => (stripped.to_string(), true),
            None => (piece.to_string(), false),
        };
        let chars: Vec<char> = text.chars().collect();
        let indent = chars.iter().take_while(|c| **c == ' ').count();
        let blank = chars.iter().all(|c| c.is_whitespace());

        if let Some(parent) = self.block_parent {
            if blank || indent as isize > parent {
                let kind = if blank { LineKind::Blank } else { LineKind::BlockScalar };
                return Line {
                    number,
                    text,
                    crlf,
                    kind,
                    indent,
                    code: Vec::new(),
                    comment: None,
                    flow_depth: 0,
                };
            }
            self.block_parent = None;
        }

        let starts_inside = self.quote.is_some() || self.flow_depth > 0;
        let flow_depth = self.flow_depth;
        let (mut code, comment) = self.mask(&chars);
        while code.last().map_or(false, |c| c.is_whitespace()) {
            code.pop();
        }

        let kind = if starts_inside {
            LineKind::Continuation
        } else if blank {
            LineKind::Blank
        } else if code.is_empty() && comment.is_some() {
            LineKind::Comment
        } else if text.starts_with('%') {
            LineKind::Directive
        } else if is_marker(&text, "---") {
            LineKind::DocumentStart
        } else if is_marker(&text, "...") {
            LineKind::DocumentEnd
        } else {
            LineKind::Content
        };

        let line = Line {
            number,
            text,
            crlf,
            kind,
            indent,
            code,
            comment,
            flow_depth,
        };

        if matches!(kind, LineKind::Content | LineKind::DocumentStart)
            && self.quote.is_none()
            && self.flow_depth == 0
        {
            self.block_parent = block_scalar_parent(&line);
        }

        line
    }

    /// A quote starts a scalar only where a node may begin. Inside flow
    /// collections a quoted key may be followed directly by `:`, so the
    /// value after it may start without a separating space.
    fn opens_quote(&self, prev_sig: Option<char>, prev: Option<char>) -> bool {
        starts_node(prev_sig, prev)
            || (self.flow_depth > 0 && matches!(prev_sig, Some('[' | '{' | ',' | ':' | '?')))
    }

    /// Mask quoted content and non-indicator punctuation, locate the comment
    fn mask(&mut self, chars: &[char]) -> (Vec<char>, Option<usize>) {
        let mut code = Vec::with_capacity(chars.len());
        let mut comment = None;
        let mut prev_sig: Option<char> = None;
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            if let Some(q) = self.quote {
                if q == '\'' && c == '\'' {
                    if chars.get(i + 1) == Some(&'\'') {
                        code.push(MASK);
                        code.push(MASK);
                        i += 2;
                        continue;
                    }
                    self.quote = None;
                    code.push(c);
                    prev_sig = Some(c);
                } else if q == '"' && c == '\\' {
                    code.push(MASK);
                    if i + 1 < chars.len() {
                        code.push(MASK);
                    }
                    i += 2;
                    continue;
                } else if q == '"' && c == '"' {
                    self.quote = None;
                    code.push(c);
                    prev_sig = Some(c);
                } else {
                    code.push(MASK);
                }
                i += 1;
                continue;
            }

            let prev = if i == 0 { None } else { Some(chars[i - 1]) };
            match c {
                '#' if prev.map_or(true, |p| p == ' ' || p == '\t') => {
                    comment = Some(i);
                    break;
                }
                '"' | '\'' if self.opens_quote(prev_sig, prev) => {
                    self.quote = Some(c);
                    code.push(c);
                }
                '[' | '{' if self.flow_depth > 0 || starts_node(prev_sig, prev) => {
                    self.flow_depth += 1;
                    code.push(c);
                }
                ']' | '}' if self.flow_depth > 0 => {
                    self.flow_depth -= 1;
                    code.push(c);
                }
                ',' if self.flow_depth > 0 => code.push(c),
                '[' | ']' | '{' | '}' | ',' => code.push(MASK),
                _ => code.push(c),
            }
            if !c.is_whitespace() {
                prev_sig = Some(c);
            }
            i += 1;
        }

        (code, comment)
    }
}

/// A node may start here: at the line start, after a flow indicator, or
/// after `:`, `-` or `?` followed by whitespace
pub(crate) fn starts_node(prev_sig: Option<char>, prev: Option<char>) -> bool {
    match prev_sig {
        None => true,
        Some('[') | Some('{') | Some(',') => true,
        Some(':') | Some('-') | Some('?') => prev.map_or(false, |p| p == ' ' || p == '\t'),
        _ => false,
    }
}

fn is_marker(text: &str, marker: &str) -> bool {
    text.strip_prefix(marker)
        .map_or(false, |rest| rest.is_empty() || rest.starts_with([' ', '\t']))
}

/// Indentation a block scalar body must exceed, when the line ends with a
/// `|` or `>` header
fn block_scalar_parent(line: &Line) -> Option<isize> {
    let code: String = line.code.iter().collect();
    let m = block_indicator_regex().find(&code)?;
    let head = code[..m.start()].trim_end();

    // Drop node properties between the indicator and what owns it.
    let mut tokens: Vec<&str> = head.split_whitespace().collect();
    while tokens
        .last()
        .map_or(false, |t| t.starts_with('!') || t.starts_with('&'))
    {
        tokens.pop();
    }
    let owner = tokens.last().copied().unwrap_or("");

    if line.kind == LineKind::DocumentStart {
        return (owner == "---").then_some(-1);
    }
    if owner.ends_with(':') {
        return Some(line.node_indent() as isize);
    }
    if owner == "-" {
        return line.hyphens().last().map(|col| *col as isize);
    }
    None
}
