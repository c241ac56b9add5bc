use crate::schema::Schema;
use crate::schema::SchemaLookupError;
use crate::selection::DocumentFormatter;
use crate::selection::FieldOverride;
use crate::selection::FieldResolver;
use crate::selection::ResolvedSelection;

const DEFAULT_NESTING: usize = 3;

/// Builder-style entry point combining resolution, field overrides, and
/// formatting.
///
/// ```
/// use graphql_testkit::DocumentGenerator;
/// use graphql_testkit::Schema;
///
/// let schema = Schema::builder()
///     .load_str("type Cat { name: String! weight: Int }")?
///     .build()?;
///
/// let document = DocumentGenerator::new(&schema).document_for("Cat")?;
/// assert_eq!(document, "__typename\nname\nweight\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct DocumentGenerator<'schema> {
    nesting: usize,
    overrides: Vec<(String, FieldOverride)>,
    schema: &'schema Schema,
}
impl<'schema> DocumentGenerator<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self {
            nesting: DEFAULT_NESTING,
            overrides: vec![],
            schema,
        }
    }

    /// Sets the nesting budget: the number of composite-field descents
    /// permitted before truncation. Defaults to 3.
    pub fn nesting(mut self, nesting: usize) -> Self {
        self.nesting = nesting;
        self
    }

    /// Adds field overrides to apply to every resolved tree, after
    /// resolution and before formatting.
    pub fn override_fields(
        mut self,
        overrides: Vec<(String, FieldOverride)>,
    ) -> Self {
        self.overrides.extend(overrides);
        self
    }

    /// Resolve the selection tree for `type_name`, with any configured
    /// overrides applied. Usable standalone for tests that compare
    /// structure rather than formatted text.
    pub fn fields_for(
        &self,
        type_name: &str,
    ) -> Result<ResolvedSelection, SchemaLookupError> {
        let mut selection =
            FieldResolver::new(self.schema).resolve(type_name, self.nesting)?;
        selection.apply_overrides(&self.overrides);
        Ok(selection)
    }

    /// The selection rendered as a flat field list, for interpolation into
    /// the top level of a query.
    pub fn document_for(
        &self,
        type_name: &str,
    ) -> Result<String, SchemaLookupError> {
        Ok(DocumentFormatter::new().field_list(&self.fields_for(type_name)?))
    }

    /// The selection rendered as a brace-wrapped block, for use as a
    /// sub-selection document.
    pub fn selection_set_for(
        &self,
        type_name: &str,
    ) -> Result<String, SchemaLookupError> {
        Ok(DocumentFormatter::new().selection_set(&self.fields_for(type_name)?))
    }
}
