use std::error::Error;

use pretty_assertions::assert_eq;

use crate::{
    decompose,
    tests::testkit::{init_logger, read_fixture, structure},
    DecompositionOptions, OperationKind,
};

fn with_comments(exclude_comments: bool) -> DecompositionOptions {
    DecompositionOptions {
        exclude_comments,
        ..Default::default()
    }
}

#[test]
fn descriptions_kept_by_default() -> Result<(), Box<dyn Error>> {
    init_logger();
    let sdl = read_fixture("blog.graphql");

    let result = decompose(&sdl, "getUser", OperationKind::Query, &with_comments(false))?;

    assert!(result.operation_found);
    assert!(result.sdl.contains("User type represents a user in the system"));
    assert!(result.sdl.contains("The title shown in listings"));
    // `#` comments never survive parsing
    assert!(!result.sdl.contains("inline comment"));

    Ok(())
}

#[test]
fn exclude_comments_strips_descriptions() -> Result<(), Box<dyn Error>> {
    init_logger();
    let sdl = read_fixture("blog.graphql");

    let result = decompose(&sdl, "getUser", OperationKind::Query, &with_comments(true))?;

    assert!(result.operation_found);
    assert!(!result.sdl.contains('#'));
    assert!(!result.sdl.contains("\"\"\""));
    assert!(!result.sdl.contains("User type represents"));
    assert!(!result.sdl.contains("The title shown in listings"));
    assert!(!result.sdl.contains("\n\n\n"));
    insta::assert_snapshot!(result.sdl, @r"
    type Query {
      getUser(id: ID!): User
    }

    type User {
      id: ID!
      name: String!
      posts: [Post!]!
    }

    type Post {
      title: String!
      id: ID!
      author: User!
    }
    ");

    Ok(())
}

#[test]
fn exclude_comments_does_not_change_the_closure() -> Result<(), Box<dyn Error>> {
    init_logger();

    for fixture in ["blog.graphql", "shop.graphql", "deprecated.graphql"] {
        let sdl = read_fixture(fixture);

        for (kind, operation) in [
            (OperationKind::Query, "getUser"),
            (OperationKind::Query, "getPost"),
            (OperationKind::Query, "customer"),
            (OperationKind::Query, "search"),
            (OperationKind::Mutation, "placeOrder"),
        ] {
            let commented = decompose(&sdl, operation, kind, &with_comments(false))?;
            let stripped = decompose(&sdl, operation, kind, &with_comments(true))?;

            assert_eq!(commented.operation_found, stripped.operation_found);
            assert_eq!(commented.collected_types, stripped.collected_types);
            if commented.operation_found {
                assert_eq!(structure(&commented.sdl), structure(&stripped.sdl));
            }
        }
    }

    Ok(())
}

#[test]
fn descriptions_on_values_and_arguments_are_stripped() -> Result<(), Box<dyn Error>> {
    init_logger();
    let sdl = r#"
        type Query {
          "Looks up a color"
          color(
            "Hex code"
            hex: String
          ): Color
        }

        "A color"
        enum Color {
          "Warm"
          RED
          BLUE
        }
    "#;

    let stripped = decompose(sdl, "color", OperationKind::Query, &with_comments(true))?;
    assert_eq!(
        stripped.sdl,
        "type Query {\n  color(hex: String): Color\n}\n\nenum Color {\n  RED\n  BLUE\n}"
    );

    let kept = decompose(sdl, "color", OperationKind::Query, &with_comments(false))?;
    assert!(kept.sdl.contains("\"A color\""));
    assert!(kept.sdl.contains("\"Warm\""));

    Ok(())
}

#[test]
fn combined_with_builtin_scalars() -> Result<(), Box<dyn Error>> {
    init_logger();
    let sdl = read_fixture("blog.graphql");

    let result = decompose(
        &sdl,
        "getUser",
        OperationKind::Query,
        &DecompositionOptions {
            include_builtin_scalars: true,
            exclude_comments: true,
            ..Default::default()
        },
    )?;

    assert!(result.operation_found);
    assert!(result.collected_types.contains("String"));
    assert!(result.collected_types.contains("ID"));
    assert!(!result.sdl.contains("User type represents"));

    Ok(())
}
