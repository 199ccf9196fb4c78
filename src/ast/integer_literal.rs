use crate::lexer::Token;

use super::NodeString;

#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

impl NodeString for IntegerLiteral {
    fn node_string(&self) -> String {
        self.value.to_string()
    }
}
