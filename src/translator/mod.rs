//! # AST → pattern translation (component G, §4.G)
//!
//! `Translator` walks an [`Expr`] tree (§4.G's node-shape cases) and emits a
//! single [`Pattern`]. It owns one piece of state — a capture-id counter —
//! scoped to a single `translate` call; nothing here is global or shared
//! across translations (§5, §15).

use crate::ast::{ClassItem, Expr, InfixOp, PrefixOp, RepeatCount};
use crate::atoms;
use crate::capture;
use crate::charset::CharSet;
use crate::error::TranslateError;
use crate::infix;
use crate::instruction::{CaptureKind, Pattern};
use crate::options::CompilerOptions;
use crate::prefix;
use crate::repeat;

/// Read-only mapping from rule name to its already-compiled pattern.
///
/// Kept as an insertion-ordered `Vec` rather than a `HashMap`: grammars are
/// typically dozens of rules, not thousands, and a linear scan over a small
/// `Vec` avoids hashing overhead and gives deterministic iteration order for
/// diagnostics, the same tradeoff the symbol table this crate's pipeline
/// shape is modeled on makes for the same reason.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    rules: Vec<(String, Pattern)>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn insert(&mut self, name: impl Into<String>, pattern: Pattern) {
        self.rules.push((name.into(), pattern));
    }

    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.rules.iter().find(|(n, _)| n == name).map(|(_, p)| p)
    }
}

/// Walks one AST and emits one [`Pattern`] against a fixed [`SymbolTable`]
/// and [`CompilerOptions`] (§4.G).
pub struct Translator<'a> {
    symbols: &'a SymbolTable,
    opts: CompilerOptions,
    next_capture_id: u32,
}

impl<'a> Translator<'a> {
    pub fn new(symbols: &'a SymbolTable, opts: CompilerOptions) -> Self {
        Self {
            symbols,
            opts,
            next_capture_id: 0,
        }
    }

    fn fresh_capture_id(&mut self) -> u32 {
        let id = self.next_capture_id;
        self.next_capture_id += 1;
        id
    }

    pub fn translate(&mut self, expr: &Expr) -> Result<Pattern, TranslateError> {
        tracing::trace!(node = %expr.describe(), "translating node");
        match expr {
            Expr::Literal(s) => Ok(atoms::str_(s)),
            Expr::ILiteral(s) => Ok(atoms::istr(s)),
            Expr::Int(n) => Ok(atoms::any(*n as i64)),
            Expr::Ident(name) => Ok(self.translate_ident(name)),
            Expr::CharClass(items) => self.translate_char_class(items),
            Expr::Prefix(op, inner) => self.translate_prefix(*op, inner),
            Expr::Infix(op, lhs, rhs) => self.translate_infix(*op, lhs, rhs),
            Expr::Block(children) => self.translate_block(children),
            Expr::Repeat(inner, count) => self.translate_repeat(inner, *count),
            Expr::Call { name, args } => self.translate_call(name, args),
        }
    }

    fn translate_ident(&mut self, name: &str) -> Pattern {
        match self.symbols.get(name) {
            Some(p) => {
                tracing::trace!(rule = name, "inlining known rule");
                p.clone()
            }
            None => {
                tracing::trace!(rule = name, "emitting unresolved Call");
                atoms::call(name.to_string())
            }
        }
    }

    fn translate_char_class(&mut self, items: &[ClassItem]) -> Result<Pattern, TranslateError> {
        let mut cs = CharSet::new();
        for item in items {
            match *item {
                ClassItem::Char(c) => cs.insert(c),
                ClassItem::Range(lo, hi) => {
                    if lo > hi {
                        return Err(TranslateError::MalformedCharClass {
                            detail: format!("range {lo:#04x}..{hi:#04x} has lo > hi"),
                        });
                    }
                    cs.insert_range(lo, hi);
                }
            }
        }
        // An empty character class (`[]`) degenerates to "match any one
        // byte" rather than an unsatisfiable `Set({})` (§4.G).
        if cs.is_empty() {
            return Ok(atoms::any(1));
        }
        Ok(atoms::set(cs))
    }

    fn translate_prefix(&mut self, op: PrefixOp, inner: &Expr) -> Result<Pattern, TranslateError> {
        let p = self.translate(inner)?;
        Ok(match op {
            PrefixOp::Optional => prefix::optional(p),
            PrefixOp::Star => prefix::star(p),
            PrefixOp::Plus => prefix::plus(p),
            PrefixOp::Not => prefix::not_(p),
            PrefixOp::And => prefix::and_(p),
            PrefixOp::CaptureSubstring => {
                let id = self.fresh_capture_id();
                prefix::capture_substring(p, id)
            }
            PrefixOp::Search => prefix::search(p),
        })
    }

    fn translate_infix(
        &mut self,
        op: InfixOp,
        lhs: &Expr,
        rhs: &Expr,
    ) -> Result<Pattern, TranslateError> {
        match op {
            InfixOp::Seq => {
                let p1 = self.translate(lhs)?;
                let p2 = self.translate(rhs)?;
                infix::sequence(p1, p2, &self.opts)
            }
            InfixOp::Choice => {
                let p1 = self.translate(lhs)?;
                let p2 = self.translate(rhs)?;
                infix::choice(p1, p2, &self.opts)
            }
            InfixOp::Diff => {
                let p1 = self.translate(lhs)?;
                let p2 = self.translate(rhs)?;
                infix::difference(p1, p2, &self.opts)
            }
            InfixOp::Action => {
                // `lhs % rhs`: capture lhs's match, carrying rhs as the
                // unexamined action payload (§4.G).
                let p = self.translate(lhs)?;
                let id = self.fresh_capture_id();
                Ok(capture::capture_action(p, Box::new(rhs.clone()), id))
            }
        }
    }

    fn translate_block(&mut self, children: &[Expr]) -> Result<Pattern, TranslateError> {
        match children {
            [] => Err(TranslateError::UnknownConstruct {
                text: "empty block".to_string(),
            }),
            [only] => self.translate(only),
            [body, action] => {
                let p = self.translate(body)?;
                let id = self.fresh_capture_id();
                Ok(capture::capture_action(p, Box::new(action.clone()), id))
            }
            _ => Err(TranslateError::UnknownConstruct {
                text: format!("block with {} children", children.len()),
            }),
        }
    }

    fn translate_repeat(
        &mut self,
        inner: &Expr,
        count: RepeatCount,
    ) -> Result<Pattern, TranslateError> {
        let p = self.translate(inner)?;
        match count {
            RepeatCount::Exact(n) => repeat::exact(p, n, &self.opts),
            RepeatCount::Range(a, b) => {
                if a > b {
                    return Err(TranslateError::UnknownConstruct {
                        text: format!("repeat {{{a}..{b}}} has lower bound above upper bound"),
                    });
                }
                repeat::range(p, a, b, &self.opts)
            }
        }
    }

    fn translate_call(&mut self, name: &str, args: &[Expr]) -> Result<Pattern, TranslateError> {
        // `Jx(p)` for x in {s, i, f, a, o, t} maps to the corresponding JSON
        // capture kind (§4.G); `Jf` is additionally overloaded by arity for
        // the named fixed-field form, `Jf("field", p)`.
        match (name, args) {
            ("Js", [inner]) => self.translate_json_capture(inner, CaptureKind::JString, None),
            ("Ji", [inner]) => self.translate_json_capture(inner, CaptureKind::JInt, None),
            ("Jf", [inner]) => self.translate_json_capture(inner, CaptureKind::JFloat, None),
            ("Ja", [inner]) => self.translate_json_capture(inner, CaptureKind::JArray, None),
            ("Jo", [inner]) => self.translate_json_capture(inner, CaptureKind::JObject, None),
            ("Jt", [inner]) => self.translate_json_capture(inner, CaptureKind::JFieldDynamic, None),
            ("Jf", [name_lit, inner]) => {
                let field_name = match name_lit {
                    Expr::Literal(bytes) => String::from_utf8_lossy(bytes).into_owned(),
                    other => {
                        return Err(TranslateError::MalformedCapture {
                            detail: format!(
                                "Jf's field-name argument must be a string literal, found {}",
                                other.describe()
                            ),
                        })
                    }
                };
                self.translate_json_capture(inner, CaptureKind::JFieldFixed, Some(field_name))
            }
            (other, args) => Err(TranslateError::MalformedCapture {
                detail: format!("unrecognized capture call `{other}`/{}", args.len()),
            }),
        }
    }

    fn translate_json_capture(
        &mut self,
        inner: &Expr,
        kind: CaptureKind,
        name: Option<String>,
    ) -> Result<Pattern, TranslateError> {
        let p = self.translate(inner)?;
        let id = self.fresh_capture_id();
        Ok(capture::capture(p, kind, name, id))
    }
}
