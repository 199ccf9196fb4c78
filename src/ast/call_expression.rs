use crate::lexer::Token;

use super::{Expression, NodeString};

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub token: Token,
    pub function: Box<Expression>,
    pub arguments: Vec<Expression>,
}

impl NodeString for CallExpression {
    fn node_string(&self) -> String {
        let args = self
            .arguments
            .iter()
            .map(|a| a.node_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({})", self.function.node_string(), args)
    }
}
