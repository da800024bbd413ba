//! Operators and their token vocabulary

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
    And,
    Or,
}

impl BinOp {
    /// Parse an operator token, accepting the ASCII spellings as aliases
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let op = match symbol {
            "==" => BinOp::Eq,
            "≠" | "!=" => BinOp::Ne,
            "<" => BinOp::Lt,
            "≤" | "<=" => BinOp::Le,
            ">" => BinOp::Gt,
            "≥" | ">=" => BinOp::Ge,
            "+" => BinOp::Add,
            "-" => BinOp::Sub,
            "*" => BinOp::Mul,
            "÷" | "/" => BinOp::Div,
            "%" => BinOp::Rem,
            "**" => BinOp::Pow,
            "且" | "and" | "&&" => BinOp::And,
            "或" | "or" | "||" => BinOp::Or,
            _ => return None,
        };
        Some(op)
    }

    /// Canonical source spelling
    pub fn symbol(&self) -> &'static str {
        match self {
            BinOp::Eq => "==",
            BinOp::Ne => "≠",
            BinOp::Lt => "<",
            BinOp::Le => "≤",
            BinOp::Gt => ">",
            BinOp::Ge => "≥",
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "÷",
            BinOp::Rem => "%",
            BinOp::Pow => "**",
            BinOp::And => "且",
            BinOp::Or => "或",
        }
    }

    /// `==` and `≠`
    pub fn is_equality(&self) -> bool {
        matches!(self, BinOp::Eq | BinOp::Ne)
    }

    /// `<`, `≤`, `>`, `≥`
    pub fn is_ordering(&self) -> bool {
        matches!(self, BinOp::Lt | BinOp::Le | BinOp::Gt | BinOp::Ge)
    }

    pub fn is_comparison(&self) -> bool {
        self.is_equality() || self.is_ordering()
    }

    pub fn is_logical(&self) -> bool {
        matches!(self, BinOp::And | BinOp::Or)
    }
}

impl std::fmt::Display for BinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Arithmetic negation `-`
    Neg,
    /// Logical negation `非`
    Not,
}

impl UnaryOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "-" => Some(UnaryOp::Neg),
            "非" | "not" | "!" => Some(UnaryOp::Not),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "非",
        }
    }
}

impl std::fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_aliases() {
        assert_eq!(BinOp::from_symbol("≠"), Some(BinOp::Ne));
        assert_eq!(BinOp::from_symbol("!="), Some(BinOp::Ne));
        assert_eq!(BinOp::from_symbol("/"), Some(BinOp::Div));
        assert_eq!(BinOp::from_symbol("且"), Some(BinOp::And));
        assert_eq!(BinOp::from_symbol("||"), Some(BinOp::Or));
        assert_eq!(BinOp::from_symbol("<>"), None);
        assert_eq!(UnaryOp::from_symbol("非"), Some(UnaryOp::Not));
    }

    #[test]
    fn test_canonical_symbol_parses_back() {
        let all = [
            BinOp::Eq, BinOp::Ne, BinOp::Lt, BinOp::Le, BinOp::Gt, BinOp::Ge, BinOp::Add,
            BinOp::Sub, BinOp::Mul, BinOp::Div, BinOp::Rem, BinOp::Pow, BinOp::And, BinOp::Or,
        ];
        for op in all {
            assert_eq!(BinOp::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn test_operator_classes() {
        assert!(BinOp::Le.is_ordering() && BinOp::Le.is_comparison());
        assert!(BinOp::Ne.is_equality() && !BinOp::Ne.is_ordering());
        assert!(BinOp::Or.is_logical() && !BinOp::Or.is_comparison());
    }
}
