//! Binary expression trees for fully parenthesized arithmetic.
//!
//! Leaves of an expression tree hold integer literals, inner nodes hold one of the four binary operators `+ - * /`. Trees are either composed by hand or [`build`] from an infix string in which every operation is wrapped in its own pair of parentheses, such as `"((2+3)*4)"`.
//!
//! # Example
//! ```rust
//! use positree::expression::ExpressionTree;
//!
//! let expr = ExpressionTree::build("(((3+1)*4)/((9-5)+2))")?;
//! assert_eq!(expr.tree().len(), 11);
//! assert_eq!(expr.to_string(), "(((3+1)*4)/((9-5)+2))");
//! assert_eq!(expr.evaluate()?, 16.0 / 6.0);
//! # Ok::<(), positree::expression::ExpressionError>(())
//! ```
//!
//! [`build`]: struct.ExpressionTree.html#method.build " "

use core::{
    fmt::{self, Debug, Display, Formatter},
    str::FromStr,
};
use crate::{
    algorithms::is_matched,
    binary_tree::LinkedBinaryTree,
    tree::{BinaryTree, Tree},
    util::own_position,
    Position,
};

/// The error type for building and evaluating expression trees.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ExpressionError {
    /// The brackets of the expression do not match.
    #[error("unbalanced brackets")]
    Unbalanced,
    /// The expression contains a character which is neither a digit, an operator, a parenthesis nor whitespace.
    #[error("unexpected character {0:?} at byte {1}")]
    UnexpectedChar(char, usize),
    /// The tokens do not form a fully parenthesized binary expression.
    #[error("malformed expression")]
    Malformed,
    /// The token is not one of `+ - * /`.
    #[error("{0:?} is not a valid operator, expected one of + - * /")]
    InvalidOperator(String),
    /// A division by zero was attempted during evaluation.
    #[error("division by zero")]
    DivisionByZero,
}

/// A binary arithmetic operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}
impl Operator {
    /// Returns the operator denoted by `symbol`, if any.
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }
    /// Returns the symbol of the operator.
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
    /// Applies the operator to two operands.
    ///
    /// # Errors
    /// Fails with [`ExpressionError::DivisionByZero`] if `self` is `Div` and `right` is zero.
    ///
    /// [`ExpressionError::DivisionByZero`]: enum.ExpressionError.html#variant.DivisionByZero " "
    pub fn apply(self, left: f64, right: f64) -> Result<f64, ExpressionError> {
        Ok(match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div if right == 0.0 => return Err(ExpressionError::DivisionByZero),
            Self::Div => left / right,
        })
    }
}
impl FromStr for Operator {
    type Err = ExpressionError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next().and_then(Self::from_symbol), chars.next()) {
            (Some(op), None) => Ok(op),
            _ => Err(ExpressionError::InvalidOperator(s.to_owned())),
        }
    }
}
impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The payload of an expression tree node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    /// An operator, stored in inner nodes.
    Operator(Operator),
    /// An integer literal, stored in leaves.
    Operand(i64),
}
impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operator(op) => Display::fmt(op, f),
            Self::Operand(value) => Display::fmt(value, f),
        }
    }
}

/// An arithmetic expression stored as a binary tree.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Clone)]
pub struct ExpressionTree {
    tree: LinkedBinaryTree<Token>,
}
impl ExpressionTree {
    /// Creates a single-leaf expression holding `value`.
    pub fn leaf(value: i64) -> Self {
        let mut tree = LinkedBinaryTree::new();
        own_position(tree.add_root(Token::Operand(value)));
        Self { tree }
    }
    /// Creates the expression `(left op right)`, moving both operands into it.
    pub fn compose(op: Operator, left: Self, right: Self) -> Self {
        let mut tree = LinkedBinaryTree::new();
        let root = own_position(tree.add_root(Token::Operator(op)));
        let (mut left, mut right) = (left.tree, right.tree);
        // A fresh root is always a leaf
        own_position(tree.attach(root, &mut left, &mut right));
        Self { tree }
    }
    /// Parses a fully parenthesized infix expression such as `"((2+3)*4)"`.
    ///
    /// Literals are unsigned multi-digit integers; whitespace is ignored.
    ///
    /// # Errors
    /// Fails with [`ExpressionError::Unbalanced`] if the brackets do not match, [`ExpressionError::UnexpectedChar`] on stray characters and [`ExpressionError::Malformed`] if the tokens do not form a fully parenthesized binary expression.
    ///
    /// [`ExpressionError::Unbalanced`]: enum.ExpressionError.html#variant.Unbalanced " "
    /// [`ExpressionError::UnexpectedChar`]: enum.ExpressionError.html#variant.UnexpectedChar " "
    /// [`ExpressionError::Malformed`]: enum.ExpressionError.html#variant.Malformed " "
    pub fn build(expr: &str) -> Result<Self, ExpressionError> {
        if !is_matched(expr) {
            return Err(ExpressionError::Unbalanced);
        }
        let mut stack = Vec::new();
        let mut literal: Option<i64> = None;
        for (index, c) in expr.char_indices() {
            if let Some(digit) = c.to_digit(10) {
                let value = literal
                    .unwrap_or(0)
                    .checked_mul(10)
                    .and_then(|value| value.checked_add(i64::from(digit)))
                    .ok_or(ExpressionError::Malformed)?;
                literal = Some(value);
                continue;
            }
            if let Some(value) = literal.take() {
                stack.push(Pending::Tree(Self::leaf(value)));
            }
            match c {
                '(' => {}
                ')' => {
                    let right = stack.pop().and_then(Pending::into_tree);
                    let op = stack.pop().and_then(Pending::into_operator);
                    let left = stack.pop().and_then(Pending::into_tree);
                    match (left, op, right) {
                        (Some(left), Some(op), Some(right)) => {
                            stack.push(Pending::Tree(Self::compose(op, left, right)));
                        }
                        _ => return Err(ExpressionError::Malformed),
                    }
                }
                c if c.is_whitespace() => {}
                c => match Operator::from_symbol(c) {
                    Some(op) => stack.push(Pending::Operator(op)),
                    None => return Err(ExpressionError::UnexpectedChar(c, index)),
                },
            }
        }
        if let Some(value) = literal {
            stack.push(Pending::Tree(Self::leaf(value)));
        }
        match (stack.pop().and_then(Pending::into_tree), stack.is_empty()) {
            (Some(tree), true) => Ok(tree),
            _ => Err(ExpressionError::Malformed),
        }
    }
    /// Returns the underlying binary tree.
    #[inline]
    pub fn tree(&self) -> &LinkedBinaryTree<Token> {
        &self.tree
    }
    /// Computes the value of the expression with floating-point arithmetic.
    ///
    /// # Errors
    /// Fails with [`ExpressionError::DivisionByZero`] if a divisor evaluates to zero.
    ///
    /// [`ExpressionError::DivisionByZero`]: enum.ExpressionError.html#variant.DivisionByZero " "
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        let root = self.tree.root().ok_or(ExpressionError::Malformed)?;
        self.evaluate_at(root)
    }

    fn evaluate_at(&self, p: Position) -> Result<f64, ExpressionError> {
        match own_position(self.tree.element(p)) {
            // The precision loss only affects literals beyond 2^53
            #[allow(clippy::cast_precision_loss)]
            Token::Operand(value) => Ok(*value as f64),
            Token::Operator(op) => {
                let (left, right) = self.operands(p)?;
                op.apply(self.evaluate_at(left)?, self.evaluate_at(right)?)
            }
        }
    }
    fn operands(&self, p: Position) -> Result<(Position, Position), ExpressionError> {
        match (own_position(self.tree.left(p)), own_position(self.tree.right(p))) {
            (Some(left), Some(right)) => Ok((left, right)),
            _ => Err(ExpressionError::Malformed),
        }
    }
    fn fmt_at(&self, p: Position, f: &mut Formatter<'_>) -> fmt::Result {
        let token = own_position(self.tree.element(p));
        match self.operands(p) {
            Ok((left, right)) => {
                f.write_str("(")?;
                self.fmt_at(left, f)?;
                write!(f, "{}", token)?;
                self.fmt_at(right, f)?;
                f.write_str(")")
            }
            Err(_) => write!(f, "{}", token),
        }
    }
}
impl Display for ExpressionTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.tree.root() {
            Some(root) => self.fmt_at(root, f),
            None => Ok(()),
        }
    }
}
impl Debug for ExpressionTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ExpressionTree")
            .field(&format_args!("{}", self))
            .finish()
    }
}
impl FromStr for ExpressionTree {
    type Err = ExpressionError;
    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::build(s)
    }
}

/// An entry of the parsing stack.
enum Pending {
    Tree(ExpressionTree),
    Operator(Operator),
}
impl Pending {
    #[allow(clippy::missing_const_for_fn)] // const fn cannot evaluate drop
    fn into_tree(self) -> Option<ExpressionTree> {
        match self {
            Self::Tree(tree) => Some(tree),
            Self::Operator(_) => None,
        }
    }
    #[allow(clippy::missing_const_for_fn)] // const fn cannot evaluate drop
    fn into_operator(self) -> Option<Operator> {
        match self {
            Self::Operator(op) => Some(op),
            Self::Tree(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn builds_and_evaluates() {
        let expr = ExpressionTree::build("(((3+1)*4)/((9-5)+2))").unwrap();
        let tree = expr.tree();
        assert_eq!(tree.len(), 11);
        let root = tree.root().unwrap();
        assert_eq!(tree.element(root), Ok(&Token::Operator(Operator::Div)));
        assert_eq!(tree.height(root), Ok(3));
        assert_eq!(
            tree.inorder(root).unwrap().iter().map(ToString::to_string).collect::<String>(),
            "3+1*4/9-5+2",
        );
        let value = expr.evaluate().unwrap();
        assert!((value - 16.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn multi_digit_literals_and_whitespace() {
        let expr: ExpressionTree = "( ((32 + 10) * 41) / ((99 - 35) + 82) )".parse().unwrap();
        assert_eq!(expr.to_string(), "(((32+10)*41)/((99-35)+82))");
        let value = expr.evaluate().unwrap();
        assert!((value - 1722.0 / 146.0).abs() < 1e-12);
        assert_eq!(ExpressionTree::build("7").unwrap().evaluate(), Ok(7.0));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(ExpressionTree::build("((1+2)").err(), Some(ExpressionError::Unbalanced));
        assert_eq!(ExpressionTree::build("(1+2]").err(), Some(ExpressionError::Unbalanced));
        assert_eq!(
            ExpressionTree::build("(1+x)").err(),
            Some(ExpressionError::UnexpectedChar('x', 3)),
        );
        assert_eq!(ExpressionTree::build("1+2").err(), Some(ExpressionError::Malformed));
        assert_eq!(ExpressionTree::build("(+2)").err(), Some(ExpressionError::Malformed));
        assert_eq!(ExpressionTree::build("").err(), Some(ExpressionError::Malformed));
        assert_eq!(
            "%".parse::<Operator>(),
            Err(ExpressionError::InvalidOperator("%".to_owned())),
        );
        assert_eq!("*".parse::<Operator>(), Ok(Operator::Mul));
    }

    #[test]
    fn division_by_zero_is_an_error() {
        let expr = ExpressionTree::build("(1/(2-2))").unwrap();
        assert_eq!(expr.evaluate(), Err(ExpressionError::DivisionByZero));
    }

    #[test]
    fn compose_by_hand() {
        let sum = ExpressionTree::compose(
            Operator::Add,
            ExpressionTree::leaf(2),
            ExpressionTree::leaf(3),
        );
        let product = ExpressionTree::compose(Operator::Mul, sum, ExpressionTree::leaf(4));
        assert_eq!(product.to_string(), "((2+3)*4)");
        assert_eq!(product.evaluate(), Ok(20.0));
        assert_eq!(product.tree().len(), 5);
    }
}
