//! # AST node shapes
//!
//! The AST front-end itself — parsing PEG surface syntax into these nodes —
//! is explicitly out of scope (§1); this module defines only the node shapes
//! the translator (`translator` module, component G) dispatches on, so the
//! core is self-contained and testable without a real parser. Each node
//! shape corresponds to a case enumerated in §4.G.

/// An element of a character-class literal: a single byte or an inclusive
/// range of bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassItem {
    Char(u8),
    Range(u8, u8),
}

/// The seven prefix operators of §4.D.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOp {
    /// `?p`
    Optional,
    /// `*p`
    Star,
    /// `+p`
    Plus,
    /// `!p`
    Not,
    /// `&p`
    And,
    /// `>p`
    CaptureSubstring,
    /// `@p`
    Search,
}

impl PrefixOp {
    pub fn symbol(self) -> &'static str {
        match self {
            PrefixOp::Optional => "?",
            PrefixOp::Star => "*",
            PrefixOp::Plus => "+",
            PrefixOp::Not => "!",
            PrefixOp::And => "&",
            PrefixOp::CaptureSubstring => ">",
            PrefixOp::Search => "@",
        }
    }
}

/// The infix operators of §4.E plus the `%` action-capture sugar of §4.G.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOp {
    /// `p1 * p2` (sequence)
    Seq,
    /// `p1 | p2` (ordered choice)
    Choice,
    /// `p1 - p2` (set difference / negated-match-then-match)
    Diff,
    /// `p1 % p2`: `capture(translate(p1), Action)` with `p2` as the action payload.
    Action,
}

impl InfixOp {
    pub fn symbol(self) -> &'static str {
        match self {
            InfixOp::Seq => "*",
            InfixOp::Choice => "|",
            InfixOp::Diff => "-",
            InfixOp::Action => "%",
        }
    }
}

/// `p{n}` or `p{a..b}` (§4.F).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatCount {
    Exact(u32),
    Range(u32, u32),
}

/// A PEG expression node, dispatched on by `translator::translate` (§4.G).
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal string or single character.
    Literal(Vec<u8>),
    /// A `i"..."` prefixed, ASCII-case-insensitive literal string.
    ILiteral(Vec<u8>),
    /// A non-negative integer literal, meaning "match exactly n characters".
    Int(u32),
    /// An identifier: a rule reference (inlined if known, else a `Call`).
    Ident(String),
    /// A character-class literal.
    CharClass(Vec<ClassItem>),
    /// A prefix-operator node.
    Prefix(PrefixOp, Box<Expr>),
    /// An infix-operator node.
    Infix(InfixOp, Box<Expr>, Box<Expr>),
    /// A parenthesized/braced group: one child means "just recurse", two
    /// children mean "wrap the first as an action capture carrying the
    /// second as the action" (§4.G).
    Block(Vec<Expr>),
    /// `p{n}` or `p{a..b}`.
    Repeat(Box<Expr>, RepeatCount),
    /// A call-shaped node, e.g. `Js(p)`, `Jf(p)`, `Jf("field", p)`. Covers
    /// every JSON-capture form; the translator dispatches on `name` and
    /// `args.len()`.
    Call { name: String, args: Vec<Expr> },
}

impl Expr {
    /// Short description of this node's shape, used in error messages (§7)
    /// to name the offending construct without a full pretty-printer.
    pub fn describe(&self) -> String {
        match self {
            Expr::Literal(s) => format!("literal {:?}", String::from_utf8_lossy(s)),
            Expr::ILiteral(s) => format!("i-literal {:?}", String::from_utf8_lossy(s)),
            Expr::Int(n) => format!("integer {n}"),
            Expr::Ident(id) => format!("identifier `{id}`"),
            Expr::CharClass(_) => "character class".to_string(),
            Expr::Prefix(op, _) => format!("prefix `{}`", op.symbol()),
            Expr::Infix(op, _, _) => format!("infix `{}`", op.symbol()),
            Expr::Block(children) => format!("block with {} child(ren)", children.len()),
            Expr::Repeat(_, RepeatCount::Exact(n)) => format!("repeat {{{n}}}"),
            Expr::Repeat(_, RepeatCount::Range(a, b)) => format!("repeat {{{a}..{b}}}"),
            Expr::Call { name, args } => format!("call `{name}`/{}", args.len()),
        }
    }
}
