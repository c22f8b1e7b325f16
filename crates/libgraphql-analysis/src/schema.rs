//! A read-only index over type-system definitions, used to resolve the input
//! type expected at each position of an executable document.
//!
//! This is not a validated schema: definitions are indexed as written, later
//! definitions of the same member replace earlier ones, and anything that
//! cannot be resolved is simply absent from the index.

use crate::ast;
use crate::compat_graphql_parser_v0_4::gp_type_to_ast;
use crate::compat_graphql_parser_v0_4::gp_value_to_ast;
use indexmap::IndexMap;

type GpSchemaDefinition = graphql_parser::schema::Definition<'static, String>;
type GpInputValue = graphql_parser::schema::InputValue<'static, String>;
type GpField = graphql_parser::schema::Field<'static, String>;

/// Output field of an object or interface type.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition {
    pub arguments: IndexMap<String, InputValueDefinition>,
    pub field_type: ast::Type,
}

/// An argument, or a field of an input object type.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition {
    pub default_value: Option<ast::Value>,
    pub value_type: ast::Type,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    directives: IndexMap<String, IndexMap<String, InputValueDefinition>>,
    input_objects: IndexMap<String, IndexMap<String, InputValueDefinition>>,
    mutation_type: Option<String>,
    query_type: Option<String>,
    subscription_type: Option<String>,
    types: IndexMap<String, IndexMap<String, FieldDefinition>>,
}

impl Schema {
    /// Index the [`Definition::TypeSystem`](ast::Definition::TypeSystem)
    /// entries of `document`. Executable definitions are ignored.
    pub fn from_document(document: &ast::Document) -> Self {
        Self::from_type_system_definitions(document.type_system_definitions())
    }

    pub fn from_type_system_definitions<'d>(
        definitions: impl IntoIterator<Item = &'d ast::TypeSystemDefinition>,
    ) -> Self {
        let mut schema = Self {
            directives: builtin_directives(),
            input_objects: IndexMap::new(),
            mutation_type: None,
            query_type: None,
            subscription_type: None,
            types: IndexMap::new(),
        };

        let mut has_schema_definition = false;
        for def in definitions {
            has_schema_definition |= schema.add_definition(def);
        }

        if !has_schema_definition {
            let default_root = |name: &str| {
                schema.types.contains_key(name).then(|| name.to_string())
            };
            schema.query_type = default_root("Query");
            schema.mutation_type = default_root("Mutation");
            schema.subscription_type = default_root("Subscription");
        }

        log::debug!(
            "Indexed {} output type(s), {} input object type(s), and {} directive(s).",
            schema.types.len(),
            schema.input_objects.len(),
            schema.directives.len(),
        );
        schema
    }

    /// Returns true when `def` was a `schema { ... }` definition.
    fn add_definition(&mut self, def: &GpSchemaDefinition) -> bool {
        use graphql_parser::schema::Definition as GpDef;
        use graphql_parser::schema::TypeDefinition as GpTypeDef;
        use graphql_parser::schema::TypeExtension as GpTypeExt;

        match def {
            GpDef::SchemaDefinition(schema_def) => {
                self.query_type = schema_def.query.clone();
                self.mutation_type = schema_def.mutation.clone();
                self.subscription_type = schema_def.subscription.clone();
                return true;
            },

            GpDef::TypeDefinition(GpTypeDef::Object(obj)) => {
                self.add_fields(&obj.name, &obj.fields)
            },
            GpDef::TypeDefinition(GpTypeDef::Interface(iface)) => {
                self.add_fields(&iface.name, &iface.fields)
            },
            GpDef::TypeDefinition(GpTypeDef::InputObject(input)) => {
                self.add_input_fields(&input.name, &input.fields)
            },
            GpDef::TypeExtension(GpTypeExt::Object(obj)) => {
                self.add_fields(&obj.name, &obj.fields)
            },
            GpDef::TypeExtension(GpTypeExt::Interface(iface)) => {
                self.add_fields(&iface.name, &iface.fields)
            },
            GpDef::TypeExtension(GpTypeExt::InputObject(input)) => {
                self.add_input_fields(&input.name, &input.fields)
            },

            GpDef::DirectiveDefinition(directive) => {
                self.directives.insert(
                    directive.name.to_owned(),
                    input_values_to_index(&directive.arguments),
                );
            },

            // Scalars, enums, and unions have no input positions.
            GpDef::TypeDefinition(_) | GpDef::TypeExtension(_) => (),
        }
        false
    }

    fn add_fields(&mut self, type_name: &str, fields: &[GpField]) {
        let type_fields = self.types.entry(type_name.to_owned()).or_default();
        for field in fields {
            type_fields.insert(field.name.to_owned(), FieldDefinition {
                arguments: input_values_to_index(&field.arguments),
                field_type: gp_type_to_ast(&field.field_type),
            });
        }
    }

    fn add_input_fields(&mut self, type_name: &str, fields: &[GpInputValue]) {
        self.input_objects
            .entry(type_name.to_owned())
            .or_default()
            .extend(input_values_to_index(fields));
    }

    /// The type at the root of operations of the given kind, if any.
    pub fn root_type(&self, kind: ast::OperationKind) -> Option<&str> {
        match kind {
            ast::OperationKind::Mutation => self.mutation_type.as_deref(),
            ast::OperationKind::Query => self.query_type.as_deref(),
            ast::OperationKind::Subscription => self.subscription_type.as_deref(),
        }
    }

    /// An output field of the named object or interface type.
    pub fn field(&self, type_name: &str, field_name: &str) -> Option<&FieldDefinition> {
        self.types.get(type_name)?.get(field_name)
    }

    /// A field of the named input object type.
    pub fn input_field(&self, type_name: &str, field_name: &str) -> Option<&InputValueDefinition> {
        self.input_objects.get(type_name)?.get(field_name)
    }

    pub fn directive_argument(
        &self,
        directive_name: &str,
        argument_name: &str,
    ) -> Option<&InputValueDefinition> {
        self.directives.get(directive_name)?.get(argument_name)
    }
}

fn input_values_to_index(values: &[GpInputValue]) -> IndexMap<String, InputValueDefinition> {
    values
        .iter()
        .map(|value| {
            (value.name.to_owned(), InputValueDefinition {
                default_value: value
                    .default_value
                    .as_ref()
                    .map(|default| gp_value_to_ast(default, value.position)),
                value_type: gp_type_to_ast(&value.value_type),
            })
        })
        .collect()
}

fn builtin_directives() -> IndexMap<String, IndexMap<String, InputValueDefinition>> {
    let named = |name: &str| ast::Type::NamedType(name.to_string());
    let non_null = |name: &str| ast::Type::NonNullType(Box::new(named(name)));
    let argument = |arg_name: &str, value_type: ast::Type, default_value: Option<ast::Value>| {
        (arg_name.to_string(), InputValueDefinition {
            default_value,
            value_type,
        })
    };

    IndexMap::from([
        (
            "deprecated".to_string(),
            IndexMap::from([argument(
                "reason",
                named("String"),
                Some(ast::Value::String("No longer supported".to_string())),
            )]),
        ),
        (
            "include".to_string(),
            IndexMap::from([argument("if", non_null("Boolean"), None)]),
        ),
        (
            "skip".to_string(),
            IndexMap::from([argument("if", non_null("Boolean"), None)]),
        ),
        (
            "specifiedBy".to_string(),
            IndexMap::from([argument("url", non_null("String"), None)]),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::Schema;
    use crate::ast;
    use crate::compat_graphql_parser_v0_4::parse_schema_document;

    fn schema(source: &str) -> Schema {
        Schema::from_document(&parse_schema_document(source).unwrap())
    }

    #[test]
    fn test_default_root_types_follow_conventional_names() {
        let schema = schema("type Query { a: Int } type Mutation { b: Int }");

        assert_eq!(schema.root_type(ast::OperationKind::Query), Some("Query"));
        assert_eq!(schema.root_type(ast::OperationKind::Mutation), Some("Mutation"));
        assert_eq!(schema.root_type(ast::OperationKind::Subscription), None);
    }

    #[test]
    fn test_explicit_schema_definition_overrides_defaults() {
        let schema = schema(r#"
            schema { query: Root }
            type Root { a: Int }
            type Query { b: Int }
        "#);

        assert_eq!(schema.root_type(ast::OperationKind::Query), Some("Root"));
        assert_eq!(schema.root_type(ast::OperationKind::Mutation), None);
    }

    #[test]
    fn test_field_arguments_and_extensions_are_indexed() {
        let schema = schema(r#"
            type Query { user(id: ID!, limit: Int = 10): User }
            interface Node { id: ID! }
            extend type Query { node(id: ID!): Node }
        "#);

        let user = schema.field("Query", "user").unwrap();
        assert_eq!(user.field_type.to_string(), "User");
        assert_eq!(user.arguments["id"].value_type.to_string(), "ID!");
        assert_eq!(user.arguments["limit"].default_value, Some(ast::Value::Int(10)));
        assert!(schema.field("Query", "node").is_some());
        assert!(schema.field("Node", "id").is_some());
        assert!(schema.field("Query", "missing").is_none());
    }

    #[test]
    fn test_input_object_fields_and_directives_are_indexed() {
        let schema = schema(r#"
            input Filter { name: String, tags: [String!] }
            extend input Filter { limit: Int }
            directive @cached(ttl: Int = 60) on FIELD
        "#);

        assert_eq!(schema.input_field("Filter", "tags").unwrap().value_type.to_string(), "[String!]");
        assert!(schema.input_field("Filter", "limit").is_some());
        assert_eq!(
            schema.directive_argument("cached", "ttl").unwrap().default_value,
            Some(ast::Value::Int(60)),
        );
    }

    #[test]
    fn test_builtin_directives_are_always_present() {
        let schema = schema("scalar Date");

        assert_eq!(schema.directive_argument("skip", "if").unwrap().value_type.to_string(), "Boolean!");
        assert_eq!(schema.directive_argument("include", "if").unwrap().value_type.to_string(), "Boolean!");
        assert!(schema.directive_argument("deprecated", "reason").unwrap().default_value.is_some());
        assert!(schema.directive_argument("specifiedBy", "url").is_some());
    }
}
