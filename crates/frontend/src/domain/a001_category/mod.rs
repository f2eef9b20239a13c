pub mod api;
pub mod tree;
pub mod ui;

use contracts::domain::a001_category::aggregate::Category;

use crate::shared::data_table::TableRecord;

impl TableRecord for Category {
    fn record_id(&self) -> String {
        self.id.clone()
    }
}
