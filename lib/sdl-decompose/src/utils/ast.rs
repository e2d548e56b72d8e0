use graphql_parser::query::{Directive, Text, Type};

pub static DEPRECATED_DIRECTIVE: &str = "deprecated";

pub static BUILTIN_SCALARS: [&str; 5] = ["String", "Int", "Float", "Boolean", "ID"];

pub fn is_builtin_scalar(type_name: &str) -> bool {
    BUILTIN_SCALARS.contains(&type_name)
}

pub trait TypeHelpers {
    /// [[String!]]! -> String
    fn inner_type(&self) -> &str;
    /// Renders the reference with its list and non-null modifiers, e.g. `[Post!]!`.
    fn to_sdl(&self) -> String;
}

impl<'a, T: Text<'a>> TypeHelpers for Type<'a, T> {
    fn inner_type(&self) -> &str {
        match self {
            Type::NamedType(name) => name.as_ref(),
            Type::ListType(child) => child.inner_type(),
            Type::NonNullType(child) => child.inner_type(),
        }
    }

    fn to_sdl(&self) -> String {
        match self {
            Type::NamedType(name) => name.as_ref().to_string(),
            Type::ListType(child) => format!("[{}]", child.to_sdl()),
            Type::NonNullType(child) => format!("{}!", child.to_sdl()),
        }
    }
}

pub fn has_directive<'a, T: Text<'a>>(directives: &[Directive<'a, T>], name: &str) -> bool {
    directives.iter().any(|d| d.name.as_ref() == name)
}

pub fn is_deprecated<'a, T: Text<'a>>(directives: &[Directive<'a, T>]) -> bool {
    has_directive(directives, DEPRECATED_DIRECTIVE)
}

#[cfg(test)]
mod tests {
    use graphql_parser::schema::{Definition, TypeDefinition};

    use super::*;

    fn field_types(sdl: &str) -> Vec<(String, String)> {
        let document = graphql_parser::parse_schema::<String>(sdl).unwrap();
        let mut result = vec![];

        for definition in &document.definitions {
            if let Definition::TypeDefinition(TypeDefinition::Object(object)) = definition {
                for field in &object.fields {
                    result.push((
                        field.field_type.inner_type().to_string(),
                        field.field_type.to_sdl(),
                    ));
                }
            }
        }

        result
    }

    #[test]
    fn strip_and_render_modifiers() {
        let types = field_types(
            r#"
            type T {
              a: String
              b: String!
              c: [String]
              d: [[String]]
              e: [[String!]]!
            }
            "#,
        );

        assert_eq!(
            types,
            vec![
                ("String".to_string(), "String".to_string()),
                ("String".to_string(), "String!".to_string()),
                ("String".to_string(), "[String]".to_string()),
                ("String".to_string(), "[[String]]".to_string()),
                ("String".to_string(), "[[String!]]!".to_string()),
            ]
        );
    }

    #[test]
    fn builtin_scalars() {
        assert!(is_builtin_scalar("ID"));
        assert!(is_builtin_scalar("Boolean"));
        assert!(!is_builtin_scalar("DateTime"));
        assert!(!is_builtin_scalar("string"));
    }
}
