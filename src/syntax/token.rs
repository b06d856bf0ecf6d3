#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Plus,
    Minus,
    Mul,
    Div,
    Pow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

pub type Precedence = u8;

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    pub fn precedence(self) -> Precedence {
        match self {
            Self::Plus | Self::Minus => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
        }
    }

    pub fn assoc(self) -> Assoc {
        match self {
            Self::Plus | Self::Minus | Self::Mul | Self::Div => Assoc::Left,
            Self::Pow => Assoc::Right,
        }
    }

    pub fn get(self) -> (Precedence, Assoc) {
        (self.precedence(), self.assoc())
    }

    /// Whether `self`, sitting on the stack, has to be emitted before `next` is pushed.
    pub fn binds_before(self, next: Operator) -> bool {
        let (prec, assoc) = self.get();
        if prec == next.precedence() {
            return assoc == Assoc::Left;
        }
        prec > next.precedence()
    }
}

/// Precedence of an operator symbol, `0` for anything else.
pub fn precedence_of(c: char) -> Precedence {
    Operator::from_char(c).map_or(0, Operator::precedence)
}

pub fn is_right_associative(c: char) -> bool {
    Operator::from_char(c).map_or(false, |op| op.assoc() == Assoc::Right)
}

/// Symbol-level form of [`Operator::binds_before`].
///
/// Unknown symbols have precedence `0` and are left-associative.
pub fn has_higher_precedence(a: char, b: char) -> bool {
    let (p1, p2) = (precedence_of(a), precedence_of(b));
    if p1 == p2 {
        return !is_right_associative(a);
    }
    p1 > p2
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Invalid(char),
    Operand(char),
    Op(Operator),

    LParen,
    RParen,
}
