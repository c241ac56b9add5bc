use crate::selection::FieldNode;
use crate::selection::ImplementorSelection;
use crate::selection::ResolvedSelection;

const INDENT_WIDTH: usize = 2;

/// Renders a [`ResolvedSelection`] as textual GraphQL selection syntax:
/// one line per leaf field, one brace-wrapped block per composite field,
/// and one `...on TypeName { ... }` inline fragment per implementor with a
/// non-empty unique field list.
///
/// Two output modes are supported: [`field_list`](Self::field_list) renders
/// a flat top-level list (fields for a whole query) and
/// [`selection_set`](Self::selection_set) wraps the same list in one outer
/// `{ ... }` block (a document for a sub-selection).
#[derive(Clone, Debug)]
pub struct DocumentFormatter {
    base_indent: usize,
}
impl DocumentFormatter {
    pub fn new() -> Self {
        Self { base_indent: 0 }
    }

    /// A formatter whose output is shifted right by `base_indent` levels
    /// (of 2 spaces each), for splicing into an already-indented document.
    pub fn with_base_indent(base_indent: usize) -> Self {
        Self { base_indent }
    }

    /// Render the selection as a flat field list with no wrapping braces.
    ///
    /// [`ResolvedSelection::Leaf`] has no fields to render and produces
    /// empty text. A well-formed tree never contains
    /// [`ResolvedSelection::Rejected`]; a bare one also renders empty.
    pub fn field_list(&self, selection: &ResolvedSelection) -> String {
        let mut out = String::new();
        self.write_selection(&mut out, selection, self.base_indent);
        out
    }

    /// Render the selection wrapped in a single `{ ... }` block.
    pub fn selection_set(&self, selection: &ResolvedSelection) -> String {
        let mut out = String::new();
        push_line(&mut out, self.base_indent, "{");
        self.write_selection(&mut out, selection, self.base_indent + 1);
        push_line(&mut out, self.base_indent, "}");
        out
    }

    fn write_selection(
        &self,
        out: &mut String,
        selection: &ResolvedSelection,
        indent: usize,
    ) {
        match selection {
            ResolvedSelection::Leaf
                | ResolvedSelection::Rejected => {},
            ResolvedSelection::Object { fields } =>
                write_fields(out, fields, indent),
            ResolvedSelection::Polymorphic { implementors, shared } => {
                write_fields(out, shared, indent);
                write_implementors(out, implementors, indent);
            },
        }
    }
}
impl Default for DocumentFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn write_fields(out: &mut String, fields: &[FieldNode], indent: usize) {
    for node in fields {
        write_node(out, node, indent);
    }
}

fn write_node(out: &mut String, node: &FieldNode, indent: usize) {
    match node {
        FieldNode::Leaf { name } => push_line(out, indent, name),

        FieldNode::Object { children, name } => {
            push_line(out, indent, &format!("{name} {{"));
            write_fields(out, children, indent + 1);
            push_line(out, indent, "}");
        },

        FieldNode::Polymorphic { implementors, name, shared } => {
            push_line(out, indent, &format!("{name} {{"));
            write_fields(out, shared, indent + 1);
            write_implementors(out, implementors, indent + 1);
            push_line(out, indent, "}");
        },
    }
}

fn write_implementors(
    out: &mut String,
    implementors: &[ImplementorSelection],
    indent: usize,
) {
    for implementor in implementors {
        // An inline fragment with no fields is not valid selection syntax.
        if implementor.fields.is_empty() {
            continue;
        }
        push_line(out, indent, &format!("...on {} {{", implementor.type_name));
        write_fields(out, &implementor.fields, indent + 1);
        push_line(out, indent, "}");
    }
}

fn push_line(out: &mut String, indent: usize, text: &str) {
    out.push_str(&" ".repeat(indent * INDENT_WIDTH));
    out.push_str(text);
    out.push('\n');
}
