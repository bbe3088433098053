use crate::parsing::*;
use crate::scanning::*;

/// Renders a tree as a fully parenthesised prefix expression, `(PLUS 2 3)`.
pub struct Formatter;

impl Visitor for Formatter {
    type Output = String;

    fn visit_binary_op(&mut self, left: &Node, operator: TokenKind, right: &Node) -> String {
        format!("({} {} {})", operator, left.accept(self), right.accept(self))
    }

    fn visit_literal(&mut self, value: &Token) -> String {
        value.lexeme().to_string()
    }
}

pub fn format(node: &Node) -> String {
    node.accept(&mut Formatter)
}
