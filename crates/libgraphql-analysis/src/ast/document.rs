use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::ast::TypeSystemDefinition;

/// Root AST node for a GraphQL document.
///
/// A document may mix executable definitions (operations and fragments) with
/// type-system definitions. Only the former participate in analysis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub definitions: Vec<Definition>,
}

impl Document {
    /// Iterate over only the executable definitions (operations and
    /// fragments) in this document.
    pub fn executable_definitions(&self) -> impl Iterator<Item = &Definition> {
        self.definitions.iter().filter(|def| {
            matches!(def, Definition::Fragment(_) | Definition::Operation(_))
        })
    }

    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Fragment(frag) => Some(frag),
            _ => None,
        })
    }

    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Operation(op) => Some(op),
            _ => None,
        })
    }

    /// Iterate over only the type-system definitions in this document.
    pub fn type_system_definitions(
        &self,
    ) -> impl Iterator<Item = &TypeSystemDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::TypeSystem(ts_def) => Some(ts_def),
            _ => None,
        })
    }
}

impl FromIterator<Definition> for Document {
    fn from_iter<I: IntoIterator<Item = Definition>>(iter: I) -> Self {
        Self {
            definitions: iter.into_iter().collect(),
        }
    }
}

impl Extend<Definition> for Document {
    fn extend<I: IntoIterator<Item = Definition>>(&mut self, iter: I) {
        self.definitions.extend(iter)
    }
}

/// A top-level definition in a GraphQL [`Document`].
#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Fragment(FragmentDefinition),
    Operation(OperationDefinition),
    TypeSystem(TypeSystemDefinition),
}
