//! Field labels for node children.
//!
//! Fields name the semantically distinct children of a node (`left`,
//! `operator`, `right`, ...). Anonymous children (punctuation, trivia) are
//! present in the tree but unlabeled. The label set is closed: every
//! producing alternative picks labels from this enum, which keeps label
//! meaning consistent across productions.

use std::fmt;

/// A child label. The snake_case string form is what tree consumers match on.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum Field {
    Alternative,
    Arguments,
    Array,
    Body,
    Bound,
    Condition,
    Consequence,
    Constructor,
    Declarator,
    Dimensions,
    Element,
    Field,
    Guard,
    Index,
    Init,
    Interfaces,
    Key,
    Label,
    Left,
    Modifiers,
    Module,
    Name,
    Object,
    Operand,
    Operator,
    Parameters,
    Pattern,
    Permits,
    Qualifier,
    Resources,
    Right,
    Scope,
    Superclass,
    Type,
    TypeArguments,
    TypeParameters,
    Update,
    Value,
}

impl Field {
    pub const fn name(self) -> &'static str {
        match self {
            Field::Alternative => "alternative",
            Field::Arguments => "arguments",
            Field::Array => "array",
            Field::Body => "body",
            Field::Bound => "bound",
            Field::Condition => "condition",
            Field::Consequence => "consequence",
            Field::Constructor => "constructor",
            Field::Declarator => "declarator",
            Field::Dimensions => "dimensions",
            Field::Element => "element",
            Field::Field => "field",
            Field::Guard => "guard",
            Field::Index => "index",
            Field::Init => "init",
            Field::Interfaces => "interfaces",
            Field::Key => "key",
            Field::Label => "label",
            Field::Left => "left",
            Field::Modifiers => "modifiers",
            Field::Module => "module",
            Field::Name => "name",
            Field::Object => "object",
            Field::Operand => "operand",
            Field::Operator => "operator",
            Field::Parameters => "parameters",
            Field::Pattern => "pattern",
            Field::Permits => "permits",
            Field::Qualifier => "qualifier",
            Field::Resources => "resources",
            Field::Right => "right",
            Field::Scope => "scope",
            Field::Superclass => "superclass",
            Field::Type => "type",
            Field::TypeArguments => "type_arguments",
            Field::TypeParameters => "type_parameters",
            Field::Update => "update",
            Field::Value => "value",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_snake_case() {
        assert_eq!(Field::TypeArguments.name(), "type_arguments");
        assert_eq!(Field::Left.to_string(), "left");
    }
}
