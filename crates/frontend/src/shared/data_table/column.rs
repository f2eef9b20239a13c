use leptos::prelude::*;

/// How a cell may be edited in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    ReadOnly,
    Text,
    TextArea,
    Number { min: Option<i64> },
    Select(&'static [&'static str]),
}

impl EditKind {
    pub fn is_editable(&self) -> bool {
        !matches!(self, EditKind::ReadOnly)
    }
}

/// One column of a [`super::DataTable`].
pub struct ColumnDescriptor<T: 'static> {
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub exportable: bool,
    pub edit: EditKind,
    /// Custom cell content; plain text of the field otherwise.
    pub render: Option<Callback<T, AnyView>>,
}

impl<T: 'static> Clone for ColumnDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            label: self.label,
            sortable: self.sortable,
            exportable: self.exportable,
            edit: self.edit,
            render: self.render,
        }
    }
}

impl<T: Send + Sync + 'static> ColumnDescriptor<T> {
    pub fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: false,
            exportable: true,
            edit: EditKind::ReadOnly,
            render: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn editable(mut self, kind: EditKind) -> Self {
        self.edit = kind;
        self
    }

    pub fn skip_export(mut self) -> Self {
        self.exportable = false;
        self
    }

    pub fn render<F>(mut self, f: F) -> Self
    where
        F: Fn(T) -> AnyView + Send + Sync + 'static,
    {
        self.render = Some(Callback::new(f));
        self
    }
}

/// Toolbar features of a table instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableFeatures {
    pub enable_search: bool,
    pub enable_export: bool,
    pub enable_bulk_delete: bool,
    pub enable_date_filter: bool,
    pub enable_inline_edit: bool,
}

impl Default for TableFeatures {
    fn default() -> Self {
        Self {
            enable_search: true,
            enable_export: true,
            enable_bulk_delete: true,
            enable_date_filter: false,
            enable_inline_edit: true,
        }
    }
}

/// Keys of the columns the backend may sort by.
pub fn sortable_keys<T>(columns: &[ColumnDescriptor<T>]) -> Vec<&'static str> {
    columns.iter().filter(|c| c.sortable).map(|c| c.key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_flags() {
        let columns: Vec<ColumnDescriptor<String>> = vec![
            ColumnDescriptor::new("name", "Name").sortable().editable(EditKind::Text),
            ColumnDescriptor::new("image", "Image").skip_export(),
            ColumnDescriptor::new("created_at", "Created").sortable(),
        ];
        assert_eq!(sortable_keys(&columns), vec!["name", "created_at"]);
        assert!(columns[0].edit.is_editable());
        assert!(!columns[1].exportable);
        assert!(!columns[2].edit.is_editable());
        assert!(columns[0].render.is_none());
    }
}
