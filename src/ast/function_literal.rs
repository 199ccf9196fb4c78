use crate::lexer::Token;

use super::{BlockStatement, Identifier, NodeString};

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

impl NodeString for FunctionLiteral {
    fn node_string(&self) -> String {
        let params = self
            .parameters
            .iter()
            .map(|p| p.node_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({}) {}", self.token.literal, params, self.body.node_string())
    }
}
