pub mod ui;

use contracts::domain::a002_comment::Comment;

use crate::shared::data_table::TableRecord;

impl TableRecord for Comment {
    fn record_id(&self) -> String {
        self.id.clone()
    }
}
