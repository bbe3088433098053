use crate::error_handling::*;
use crate::scanning::*;

/// Syntax tree of a single expression. Leaves are always literals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    literal(Token),
    binary_op {
        left: Box<Node>,
        operator: TokenKind,
        right: Box<Node>,
    },
}

/// An operation over the tree, one method per node variant.
pub trait Visitor {
    type Output;

    fn visit_binary_op(&mut self, left: &Node, operator: TokenKind, right: &Node) -> Self::Output;
    fn visit_literal(&mut self, value: &Token) -> Self::Output;
}

impl Node {
    pub fn binary(left: Node, operator: TokenKind, right: Node) -> Self {
        Node::binary_op{left: Box::new(left), operator, right: Box::new(right)}
    }

    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Node::literal(value) => visitor.visit_literal(value),
            Node::binary_op{left, operator, right} => visitor.visit_binary_op(left, *operator, right),
        }
    }
}

/// Longest operator chain accepted on one line. Trees are left-nested, so
/// this bounds the recursion depth of every visitor and of dropping the tree.
pub const MAX_OPERATORS: usize = 1024;

struct Parser<'a> {
    tokens: &'a [Token],
    index: usize,
    operators: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self{tokens, index: 0, operators: 0}
    }

    fn get_current(&self) -> Option<&'a Token> {
        self.tokens.get(self.index)
    }

    fn advance(&mut self) {
        if self.is_valid() {
            self.index += 1;
        }
    }

    fn is_valid(&self) -> bool {
        self.index < self.tokens.len()
    }

    // Consumes the current token if it is one of `kinds`.
    fn match_kind(&mut self, kinds: &[TokenKind]) -> Option<TokenKind> {
        let kind = self.get_current()
            .map(Token::kind)
            .filter(|kind| kinds.contains(kind))?;
        self.advance();
        Some(kind)
    }

    fn fold(&mut self, left: Node, operator: TokenKind, right: Node) -> Result<Node> {
        self.operators += 1;
        if self.operators > MAX_OPERATORS {
            return Err(CalcError::parse_error(format!("an expression of at most {} operators", MAX_OPERATORS)));
        }
        Ok(Node::binary(left, operator, right))
    }

    fn term(&mut self) -> Result<Node> {
        use TokenKind::*;
        let mut term = self.factor()?;
        while let Some(operator) = self.match_kind(&[plus, minus]) {
            let right = self.factor()?;
            term = self.fold(term, operator, right)?;
        }
        Ok(term)
    }

    fn factor(&mut self) -> Result<Node> {
        let mut factor = self.literal()?;
        while let Some(operator) = self.match_kind(&[TokenKind::mul]) {
            let right = self.literal()?;
            factor = self.fold(factor, operator, right)?;
        }
        Ok(factor)
    }

    fn literal(&mut self) -> Result<Node> {
        match self.get_current() {
            Some(token) if token.kind() == TokenKind::num => {
                self.advance();
                Ok(Node::literal(token.clone()))
            },
            Some(token) => Err(CalcError::parse_error(format!("a number, found '{}'", token.lexeme()))),
            None => Err(CalcError::parse_error("a number, found end of input".into())),
        }
    }
}

/// Builds a tree from `tokens` with `*` binding tighter than `+` and `-`,
/// all left-associative. Every token must be consumed.
pub fn parse(tokens: &[Token]) -> Result<Node> {
    let mut parser = Parser::new(tokens);
    let tree = parser.term()?;
    match parser.get_current() {
        None => Ok(tree),
        Some(token) => Err(CalcError::parse_error(format!("end of expression, found '{}'", token.lexeme()))),
    }
}
