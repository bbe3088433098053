use crate::error_handling::*;
use crate::parsing::*;
use crate::scanning::*;

/// Computes the value of a tree in `i64`. Literals and arithmetic wrap on
/// overflow, so any digit run converts.
pub struct Evaluator;

fn to_integer(lexeme: &str) -> Result<i64> {
    if lexeme.is_empty() {
        return Err(CalcError::evaluation_error("empty literal".into()));
    }
    lexeme.chars().try_fold(0i64, |value, character| -> Result<i64> {
        let digit = character.to_digit(10).ok_or_else(|| {
            CalcError::evaluation_error(format!("'{}' is not a valid number", lexeme))
        })?;
        Ok(value.wrapping_mul(10).wrapping_add(digit as i64))
    })
}

impl Visitor for Evaluator {
    type Output = Result<i64>;

    fn visit_binary_op(&mut self, left: &Node, operator: TokenKind, right: &Node) -> Result<i64> {
        use TokenKind::*;
        let left = left.accept(self)?;
        let right = right.accept(self)?;
        match operator {
            plus => Ok(left.wrapping_add(right)),
            minus => Ok(left.wrapping_sub(right)),
            mul => Ok(left.wrapping_mul(right)),
            num => Err(CalcError::evaluation_error(format!("unknown operator {}", operator))),
        }
    }

    fn visit_literal(&mut self, value: &Token) -> Result<i64> {
        match value.kind() {
            TokenKind::num => to_integer(value.lexeme()),
            kind => Err(CalcError::evaluation_error(format!("{} is not a literal", kind))),
        }
    }
}

pub fn evaluate(node: &Node) -> Result<i64> {
    node.accept(&mut Evaluator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate_str(source: &str) -> Result<i64> {
        evaluate(&parse(&scan(source).unwrap()).unwrap())
    }

    fn literal(lexeme: &str) -> Node {
        Node::literal(Token::new(TokenKind::num, lexeme.into()))
    }

    #[test]
    fn precedence_is_respected() {
        assert_eq!(evaluate_str("2 + 3 * 4"), Ok(14));
        assert_eq!(evaluate_str("2 * 3 + 4"), Ok(10));
    }

    #[test]
    fn subtraction_is_left_associative() {
        assert_eq!(evaluate_str("10 - 2 - 3"), Ok(5));
        assert_eq!(evaluate_str("2 * 3 * 4"), Ok(24));
    }

    #[test]
    fn results_may_be_negative() {
        assert_eq!(evaluate_str("3 - 10"), Ok(-7));
    }

    #[test]
    fn leading_zeros_are_decimal() {
        assert_eq!(evaluate_str("010 + 1"), Ok(11));
    }

    #[test]
    fn overflow_wraps() {
        assert_eq!(evaluate_str("9223372036854775807 + 1"), Ok(i64::MIN));
        assert_eq!(evaluate_str("18446744073709551616"), Ok(0));
    }

    #[test]
    fn non_digit_literal_is_an_evaluation_error() {
        assert!(matches!(evaluate(&literal("4x")), Err(CalcError::evaluation_error(_))));
        assert!(matches!(evaluate(&literal("")), Err(CalcError::evaluation_error(_))));
    }

    #[test]
    fn operator_token_as_literal_is_an_evaluation_error() {
        let node = Node::literal(Token::new(TokenKind::plus, "+".into()));
        assert!(matches!(evaluate(&node), Err(CalcError::evaluation_error(_))));
    }

    #[test]
    fn unknown_operator_is_an_evaluation_error() {
        let node = Node::binary(literal("1"), TokenKind::num, literal("2"));
        assert_eq!(
            evaluate(&node),
            Err(CalcError::evaluation_error("unknown operator NUM".into())),
        );
    }

    #[test]
    fn evaluation_is_repeatable() {
        let tree = parse(&scan("7 * 6 - 2").unwrap()).unwrap();
        assert_eq!(evaluate(&tree), evaluate(&tree));
        assert_eq!(evaluate(&tree), Ok(40));
    }
}
