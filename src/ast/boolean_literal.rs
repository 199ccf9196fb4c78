use crate::lexer::Token;

use super::NodeString;

#[derive(Debug, Clone, PartialEq)]
pub struct BooleanLiteral {
    pub token: Token,
    pub value: bool,
}

impl NodeString for BooleanLiteral {
    fn node_string(&self) -> String {
        // Lower-cased, matching the `true`/`false` keyword literal rather
        // than the capitalized `inspect()` form of the runtime Boolean
        // object (spec.md §9, Open Question).
        self.token.literal.clone()
    }
}
