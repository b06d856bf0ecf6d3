use crate::error::{ErrorKind, PResult};

use super::{
    lexer::Lexer,
    token::{Operator, Token},
};

/// How the converter treats malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Skip unknown characters and unwind unbalanced parentheses silently.
    #[default]
    Lenient,
    /// Reject unbalanced parentheses, still skip unknown characters.
    Balanced,
    /// Reject both.
    Strict,
}

impl Strictness {
    fn checks_parens(self) -> bool {
        self != Self::Lenient
    }

    fn checks_chars(self) -> bool {
        self == Self::Strict
    }
}

/// Entries of the work stack. Left parentheses remember where they were opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Symbol {
    Op(Operator),
    LParen(usize),
}

/// Shunting-yard conversion from infix to postfix.
///
/// One left-to-right pass over the tokens: operands go straight to the
/// output, operators and `(` wait on the stack until precedence or a `)`
/// releases them.
pub struct Converter<'src> {
    lexer: Lexer<'src>,
    stack: Vec<Symbol>,
    output: String,
    strictness: Strictness,
}

impl<'src> Converter<'src> {
    pub fn new(src: &'src str) -> Self {
        Self::with_strictness(src, Strictness::default())
    }

    pub fn with_strictness(src: &'src str, strictness: Strictness) -> Self {
        Self {
            lexer: Lexer::new(src),
            stack: Vec::new(),
            output: String::with_capacity(src.len()),
            strictness,
        }
    }

    /// Runs the conversion over the whole input.
    ///
    /// The lexer is drained, so a second call yields an empty string.
    pub fn convert(&mut self) -> PResult<String> {
        while let Some((off, token)) = self.lexer.next() {
            match token {
                Token::Operand(c) => self.output.push(c),
                Token::Op(op) => self.push_operator(op),
                Token::LParen => {
                    log::trace!("push `(` from offset {off}");
                    self.stack.push(Symbol::LParen(off));
                }
                Token::RParen => self.close_group(off)?,
                Token::Invalid(ch) => {
                    if self.strictness.checks_chars() {
                        return Err(ErrorKind::InvalidCharacter { ch, offset: off });
                    }
                    log::debug!("skipping {ch:?} at offset {off}");
                }
            }
        }

        self.flush()?;

        let postfix = std::mem::take(&mut self.output);
        log::debug!("converted to `{postfix}`");
        Ok(postfix)
    }

    fn push_operator(&mut self, op: Operator) {
        while let Some(&Symbol::Op(top)) = self.stack.last() {
            if !top.binds_before(op) {
                break;
            }
            self.stack.pop();
            log::trace!("pop {top:?} before {op:?}");
            self.output.push(top.symbol());
        }
        log::trace!("push {op:?}");
        self.stack.push(Symbol::Op(op));
    }

    fn close_group(&mut self, offset: usize) -> PResult<()> {
        while let Some(symbol) = self.stack.pop() {
            match symbol {
                Symbol::LParen(open) => {
                    log::trace!("`)` at {offset} closes `(` from {open}");
                    return Ok(());
                }
                Symbol::Op(op) => self.output.push(op.symbol()),
            }
        }

        if self.strictness.checks_parens() {
            return Err(ErrorKind::UnbalancedParentheses { offset });
        }
        log::warn!("unmatched `)` at offset {offset}, stack emptied");
        Ok(())
    }

    fn flush(&mut self) -> PResult<()> {
        while let Some(symbol) = self.stack.pop() {
            match symbol {
                Symbol::Op(op) => self.output.push(op.symbol()),
                Symbol::LParen(offset) => {
                    if self.strictness.checks_parens() {
                        return Err(ErrorKind::UnbalancedParentheses { offset });
                    }
                    log::warn!("unclosed `(` from offset {offset}");
                    self.output.push('(');
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{Converter, Strictness};
    use crate::error::ErrorKind;

    fn lenient(src: &str) -> String {
        Converter::new(src).convert().unwrap()
    }

    #[test]
    fn convert_golden() {
        assert_eq!(lenient("a+b*(c^d-e)^(f+g*h)-i"), "abcd^e-fgh*+^*+i-");
    }

    #[test]
    fn convert_precedence() {
        assert_eq!(lenient("a+b*c"), "abc*+");
        assert_eq!(lenient("(a+b)*c"), "ab+c*");
        assert_eq!(lenient("a*b+c/d"), "ab*cd/+");
    }

    #[test]
    fn convert_associativity() {
        assert_eq!(lenient("a^b^c"), "abc^^");
        assert_eq!(lenient("a-b-c"), "ab-c-");
        assert_eq!(lenient("a/b*c"), "ab/c*");
        assert_eq!(lenient("(a^b)^c"), "ab^c^");
    }

    #[test]
    fn stack_empty_after_balanced_input() {
        let mut converter = Converter::new("((a+b)*(c-d))^e");
        assert!(converter.stack.is_empty());

        let postfix = converter.convert().unwrap();
        assert_eq!(postfix, "ab+cd-*e^");
        assert!(converter.stack.is_empty());
        assert!(converter.output.is_empty());
    }

    #[test]
    fn skip_invalid_characters() {
        assert_eq!(lenient("a + b"), "ab+");
        assert_eq!(lenient(" x $ y # 1 "), "xy1");
    }

    #[test]
    fn lenient_unbalanced() {
        assert_eq!(lenient("a+b)"), "ab+");
        assert_eq!(lenient("a)*b"), "ab*");
        assert_eq!(lenient("(a+b"), "ab+(");
    }

    #[test]
    fn balanced_mode() {
        let err = Converter::with_strictness("a+b)", Strictness::Balanced)
            .convert()
            .unwrap_err();
        assert_eq!(err, ErrorKind::UnbalancedParentheses { offset: 3 });

        let err = Converter::with_strictness("x*(a+b", Strictness::Balanced)
            .convert()
            .unwrap_err();
        assert_eq!(err, ErrorKind::UnbalancedParentheses { offset: 2 });

        let postfix = Converter::with_strictness("a + b", Strictness::Balanced)
            .convert()
            .unwrap();
        assert_eq!(postfix, "ab+");
    }

    #[test]
    fn strict_mode() {
        let err = Converter::with_strictness("a + b", Strictness::Strict)
            .convert()
            .unwrap_err();
        assert_eq!(err, ErrorKind::InvalidCharacter { ch: ' ', offset: 1 });

        let err = Converter::with_strictness("(a", Strictness::Strict)
            .convert()
            .unwrap_err();
        assert_eq!(err, ErrorKind::UnbalancedParentheses { offset: 0 });

        let postfix = Converter::with_strictness("a+b*(c^d-e)^(f+g*h)-i", Strictness::Strict)
            .convert()
            .unwrap();
        assert_eq!(postfix, "abcd^e-fgh*+^*+i-");
    }

    #[test]
    fn empty_input() {
        assert_eq!(lenient(""), "");
        assert_eq!(lenient("()"), "");
    }
}
