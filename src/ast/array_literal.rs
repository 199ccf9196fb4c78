use crate::lexer::Token;

use super::{Expression, NodeString};

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayLiteral {
    pub token: Token,
    pub elements: Vec<Expression>,
}

impl NodeString for ArrayLiteral {
    fn node_string(&self) -> String {
        let elements = self
            .elements
            .iter()
            .map(|e| e.node_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("[{elements}]")
    }
}
