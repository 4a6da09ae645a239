/// Relational operator of a comparison expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    GreaterThan,
    LessThan,
    EqualTo,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(i64),
    /// String literal with the surrounding quotes already stripped.
    String(String),
    /// Resolved against the environment at evaluation time.
    Identifier(String),
    /// Infix comparison. Operands are always primaries, never nested
    /// comparisons, so no chaining ambiguity exists.
    Comparison {
        op: CompareOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `say <string>`. Holds the raw string lexeme, quotes included; the
    /// interpreter strips them when writing the line.
    Print(String),
    /// `let <name> be <expr>`.
    Assign { name: String, value: Expr },
    /// `if <expr> then <stmt>`. Single-statement body, no else branch.
    If { condition: Expr, body: Box<Stmt> },
    /// `repeat <n> times <stmt>`. Single-statement body.
    Repeat { count: u64, body: Box<Stmt> },
    /// `while <expr> do <stmt>* end`. Block body, the only block form in
    /// the grammar.
    While { condition: Expr, body: Vec<Stmt> },
}
