//! Property tests: the parser must accept anything without panicking and
//! never lose a byte, no matter how broken the input.

use crate::parse;
use jive_syntax::SyntaxKind;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_arbitrary_input_round_trips(source in "\\PC*") {
        let result = parse(&source);
        prop_assert_eq!(result.tree.reconstruct_text(), source);
        prop_assert_eq!(result.tree.kind(result.tree.root()), SyntaxKind::Program);
    }

    #[test]
    fn prop_token_soup_round_trips(
        source in "[a-zA-Z0-9_ \\t\\n{}()\\[\\];:,.<>+\\-*/=!&|?@\"'\\\\]{0,160}"
    ) {
        let result = parse(&source);
        prop_assert_eq!(result.tree.reconstruct_text(), source);
    }

    #[test]
    fn prop_wrapped_expression_soup_parses(
        body in "[a-z0-9_ +\\-*/%<>=&|^!~?:.,()\\[\\]]{0,80}"
    ) {
        let source = format!("class T {{ void f() {{ g({body}); }} }}");
        let result = parse(&source);
        prop_assert_eq!(result.tree.reconstruct_text(), source);
    }
}
